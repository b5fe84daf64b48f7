//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictac_engine::{PlayerId, PlayerSetup};
use tracing::{debug, info, instrument};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tictac.toml";

/// Identity of one seat as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name. Blank or missing means the seat default.
    #[serde(default)]
    name: String,
    /// Board mark. Blank or missing means the seat default.
    #[serde(default)]
    symbol: String,
    /// Color token (`#rrggbb` or a basic color name).
    #[serde(default)]
    color: String,
}

impl PlayerConfig {
    /// The stock identity for a seat.
    pub fn default_for(seat: PlayerId) -> Self {
        let setup = PlayerSetup::default_for(seat);
        Self {
            name: setup.name,
            symbol: setup.symbol,
            color: setup.color,
        }
    }

    /// Converts into the engine's setup type, as written.
    pub fn to_setup(&self) -> PlayerSetup {
        PlayerSetup::new(&self.name, &self.symbol, &self.color)
    }
}

/// Sound cue settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SoundConfig {
    /// Master switch.
    #[serde(default = "default_sound_enabled")]
    enabled: bool,

    /// Audio player invoked as `<command> <file>`. Platform default if unset.
    #[serde(default)]
    command: Option<String>,

    /// Played after every move.
    #[serde(default = "default_move_file")]
    move_file: PathBuf,

    /// Played when a round is won.
    #[serde(default = "default_win_file")]
    win_file: PathBuf,

    /// Played when a round is drawn.
    #[serde(default = "default_draw_file")]
    draw_file: PathBuf,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: default_sound_enabled(),
            command: None,
            move_file: default_move_file(),
            win_file: default_win_file(),
            draw_file: default_draw_file(),
        }
    }
}

impl SoundConfig {
    /// Turns sound off, keeping the rest of the settings.
    pub fn disable(&mut self) {
        self.enabled = false;
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seat one.
    #[serde(default = "default_player_one")]
    player_one: PlayerConfig,

    /// Seat two.
    #[serde(default = "default_player_two")]
    player_two: PlayerConfig,

    /// Sound cues.
    #[serde(default)]
    sound: SoundConfig,

    /// Log file used by full-screen front-ends.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player_one() -> PlayerConfig {
    PlayerConfig::default_for(PlayerId::One)
}

fn default_player_two() -> PlayerConfig {
    PlayerConfig::default_for(PlayerId::Two)
}

fn default_sound_enabled() -> bool {
    true
}

fn default_move_file() -> PathBuf {
    PathBuf::from("click.mp3")
}

fn default_win_file() -> PathBuf {
    PathBuf::from("win.mp3")
}

fn default_draw_file() -> PathBuf {
    PathBuf::from("draw.mp3")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictac.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            sound: SoundConfig::default(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player_one = %config.player_one.name,
            player_two = %config.player_two.name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the effective configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces player names given on the command line.
    pub fn with_names(mut self, one: Option<String>, two: Option<String>) -> Self {
        if let Some(name) = one {
            self.player_one.name = name;
        }
        if let Some(name) = two {
            self.player_two.name = name;
        }
        self
    }

    /// Turns sound off.
    pub fn without_sound(mut self) -> Self {
        self.sound.disable();
        self
    }

    /// Config for the given seat.
    pub fn player(&self, seat: PlayerId) -> &PlayerConfig {
        match seat {
            PlayerId::One => &self.player_one,
            PlayerId::Two => &self.player_two,
        }
    }

    /// The seat's player with blank fields filled from the seat defaults.
    pub fn setup(&self, seat: PlayerId) -> PlayerSetup {
        self.player(seat).to_setup().normalized(seat)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_player_section_uses_seat_defaults() {
        let config = AppConfig::from_toml("[player_one]\nname = \"Ann\"\n").unwrap();
        let one = config.setup(PlayerId::One);
        assert_eq!(one.name, "Ann");
        assert_eq!(one.symbol, "X");
        assert_eq!(one.color, tictac_engine::DEFAULT_COLOR_ONE);
        assert_eq!(config.setup(PlayerId::Two), PlayerSetup::default_for(PlayerId::Two));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_names(Some("Ann".to_string()), None)
            .without_sound();
        assert_eq!(config.player_one().name(), "Ann");
        assert_eq!(config.player_two().name(), "Player O");
        assert!(!config.sound().enabled());
    }
}
