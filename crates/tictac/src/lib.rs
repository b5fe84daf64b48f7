//! Tic-tac-toe front-ends.
//!
//! Configuration, logging and sound cues shared by three ways to play the
//! [`tictac_engine`] game:
//!
//! - **tui**: full-screen ratatui board driven by the keyboard
//! - **prompt**: line-by-line terminal edition
//! - **gui**: desktop window (cargo feature `gui`)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
#[cfg(feature = "gui")]
pub mod gui;
pub mod logging;
pub mod palette;
pub mod prompt;
pub mod sound;
pub mod tui;

pub use config::{AppConfig, ConfigError, PlayerConfig, SoundConfig};
pub use prompt::PromptGame;
pub use sound::{Cue, SoundCues};

use tictac_engine::{ConfigConflict, GameEngine, PlayerId, RoundListener};
use tracing::{instrument, warn};

/// The sound listener for a config, boxed for the engine.
pub fn sound_listener(config: &AppConfig) -> Option<Box<dyn RoundListener>> {
    SoundCues::from_config(config.sound()).map(|cues| Box::new(cues) as Box<dyn RoundListener>)
}

/// Builds an engine from the configured players with sound attached.
///
/// Conflicting players (same name or symbol) fall back to the stock players;
/// the conflict is returned so the front-end can tell the user.
#[instrument(skip(config))]
pub fn build_engine(config: &AppConfig) -> (GameEngine, Option<ConfigConflict>) {
    let [one, two] = [PlayerId::One, PlayerId::Two].map(|seat| config.setup(seat));
    let (mut engine, conflict) = match GameEngine::new(one, two) {
        Ok(engine) => (engine, None),
        Err(conflict) => {
            warn!(%conflict, "Configured players conflict, using defaults");
            (GameEngine::default(), Some(conflict))
        }
    };
    engine.set_listener(sound_listener(config));
    (engine, conflict)
}
