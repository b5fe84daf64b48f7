//! Error types for the game engine.
//!
//! Every error here is recoverable: front-ends report it and ask again.

use derive_more::{Display, Error, From};

/// A move that cannot be applied to the current round.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Row or column outside 0-2.
    #[display("Position ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Row-major index outside 0-8.
    #[display("Position {index} is off the board")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
    },

    /// The cell already holds a mark.
    #[display("Position ({row}, {col}) is already filled")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The round already ended in a win or draw.
    #[display("The round is already over")]
    RoundOver,
}

/// Player setup rejected before a round starts.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigConflict {
    /// Both players chose the same name.
    #[display("Both players are named {_0:?}; please choose different names")]
    DuplicateName(#[error(not(source))] String),

    /// Both players chose the same symbol.
    #[display("Both players use the symbol {_0:?}; please choose different symbols")]
    DuplicateSymbol(#[error(not(source))] String),
}

/// Any error raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// Rejected move.
    #[display("{_0}")]
    Move(InvalidMove),
    /// Rejected player setup.
    #[display("{_0}")]
    Config(ConfigConflict),
}
