//! Tic-tac-toe game-state engine.
//!
//! A flat, synchronous state object: a 3x3 board, two players, whose turn it
//! is, and the running session score. Front-ends (terminal, desktop) call
//! [`GameEngine::apply_move`] and re-render from
//! [`GameEngine::board_snapshot`].
//!
//! # Example
//!
//! ```
//! use tictac_engine::{GameEngine, MoveOutcome, PlayerSetup};
//!
//! let mut engine = GameEngine::new(
//!     PlayerSetup::new("Ann", "X", "red"),
//!     PlayerSetup::new("Bob", "O", "blue"),
//! )?;
//! assert_eq!(engine.apply_move(1, 1)?, MoveOutcome::Continued);
//! assert_eq!(engine.current_player().name(), "Bob");
//! # Ok::<(), tictac_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod listener;
mod player;
pub mod rules;
mod types;

pub use engine::{GameEngine, MoveOutcome, RoundStatus, Scoreboard};
pub use error::{ConfigConflict, EngineError, InvalidMove};
pub use listener::{RoundEvent, RoundListener};
pub use player::{DEFAULT_COLOR_ONE, DEFAULT_COLOR_TWO, Player, PlayerSetup, validate_pair};
pub use types::{BOARD_SIZE, Board, BoardSnapshot, CELL_COUNT, Cell, Coord, Line, PlayerId};
