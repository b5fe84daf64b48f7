//! Player identity, setup normalisation and conflict checks.

use crate::error::ConfigConflict;
use crate::types::PlayerId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default color token for seat one.
pub const DEFAULT_COLOR_ONE: &str = "#d64541";

/// Default color token for seat two.
pub const DEFAULT_COLOR_TWO: &str = "#2a9df4";

/// Symbols longer than this (in characters) are cut to their first character.
const MAX_SYMBOL_CHARS: usize = 2;

/// A player in a session: identity plus running score.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Mark placed on the board.
    symbol: String,
    /// Opaque styling token interpreted by the front-end.
    color: String,
    /// Rounds won this session.
    score: u32,
}

impl Player {
    pub(crate) fn from_setup(setup: PlayerSetup, score: u32) -> Self {
        Self {
            name: setup.name,
            symbol: setup.symbol,
            color: setup.color,
            score,
        }
    }

    pub(crate) fn record_win(&mut self) {
        self.score += 1;
    }

    pub(crate) fn clear_score(&mut self) {
        self.score = 0;
    }
}

/// Requested identity for one seat, before it becomes a [`Player`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    /// Display name.
    pub name: String,
    /// Mark placed on the board.
    pub symbol: String,
    /// Opaque styling token.
    pub color: String,
}

impl PlayerSetup {
    /// Creates a setup from raw values.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            color: color.into(),
        }
    }

    /// The stock setup for a seat: `Player X` / `X` and `Player O` / `O`.
    pub fn default_for(seat: PlayerId) -> Self {
        match seat {
            PlayerId::One => Self::new("Player X", "X", DEFAULT_COLOR_ONE),
            PlayerId::Two => Self::new("Player O", "O", DEFAULT_COLOR_TWO),
        }
    }

    /// Trims input and fills blanks from the seat defaults.
    ///
    /// Symbols longer than two characters keep only their first character.
    #[instrument(skip(self), fields(name = %self.name, symbol = %self.symbol))]
    pub fn normalized(self, seat: PlayerId) -> Self {
        let fallback = Self::default_for(seat);

        let name = match self.name.trim() {
            "" => fallback.name,
            trimmed => trimmed.to_string(),
        };

        let symbol = match self.symbol.trim() {
            "" => fallback.symbol,
            trimmed if trimmed.chars().count() > MAX_SYMBOL_CHARS => {
                trimmed.chars().take(1).collect()
            }
            trimmed => trimmed.to_string(),
        };

        let color = match self.color.trim() {
            "" => fallback.color,
            trimmed => trimmed.to_string(),
        };

        debug!(%name, %symbol, "Normalized player setup");
        Self { name, symbol, color }
    }
}

/// Normalizes both seats and rejects duplicate names or symbols.
#[instrument(skip_all)]
pub fn validate_pair(
    one: PlayerSetup,
    two: PlayerSetup,
) -> Result<[PlayerSetup; 2], ConfigConflict> {
    let one = one.normalized(PlayerId::One);
    let two = two.normalized(PlayerId::Two);

    if one.name == two.name {
        return Err(ConfigConflict::DuplicateName(one.name));
    }
    if one.symbol == two.symbol {
        return Err(ConfigConflict::DuplicateSymbol(one.symbol));
    }

    Ok([one, two])
}
