//! Application state and logic.

use super::input::{digit_cell, move_cursor};
use super::setup::{FormAction, SetupForm};
use crossterm::event::KeyCode;
use tictac_engine::{ConfigConflict, Coord, GameEngine, MoveOutcome, RoundStatus};
use tracing::{debug, info, instrument, warn};

/// What the keyboard is currently driving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Moving the cursor and placing marks.
    Playing,
    /// Waiting for `y`/`n` before clearing scores.
    ConfirmReset,
    /// Editing player names and symbols.
    Setup(SetupForm),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Coord,
    status_message: String,
    mode: Mode,
    should_quit: bool,
}

impl App {
    /// Creates the app around an engine.
    ///
    /// A conflict from the configured players is shown in the status line.
    pub fn new(engine: GameEngine, conflict: Option<ConfigConflict>) -> Self {
        let mut app = Self {
            engine,
            cursor: Coord { row: 1, col: 1 },
            status_message: String::new(),
            mode: Mode::Playing,
            should_quit: false,
        };
        app.status_message = match conflict {
            Some(conflict) => format!("{conflict}. Using default players."),
            None => app.turn_message(),
        };
        app
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor cell.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the input mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match std::mem::replace(&mut self.mode, Mode::Playing) {
            Mode::Playing => self.handle_play_key(key),
            Mode::ConfirmReset => self.handle_confirm_key(key),
            Mode::Setup(form) => self.handle_setup_key(form, key),
        }
    }

    fn handle_play_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(at) = digit_cell(c) {
                    self.cursor = at;
                    self.place(at);
                }
            }
            KeyCode::Char('n') => self.play_again(),
            KeyCode::Char('r') => {
                self.mode = Mode::ConfirmReset;
                self.status_message = "Reset all scores? (y/n)".to_string();
            }
            KeyCode::Char('p') => {
                self.mode = Mode::Setup(SetupForm::from_engine(&self.engine));
                self.status_message =
                    "Edit players: Tab to switch fields, Enter to apply, Esc to cancel".to_string();
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyCode) {
        if key == KeyCode::Char('y') || key == KeyCode::Char('Y') {
            self.engine.reset_scores();
            self.engine.reset_round();
            self.status_message = format!("Scores reset. {}", self.turn_message());
        } else {
            debug!("Score reset cancelled");
            self.status_message = self.round_message();
        }
    }

    fn handle_setup_key(&mut self, mut form: SetupForm, key: KeyCode) {
        match form.handle_key(key) {
            FormAction::Editing => self.mode = Mode::Setup(form),
            FormAction::Cancel => self.status_message = self.round_message(),
            FormAction::Submit => {
                let [one, two] = form.setups();
                match self.engine.reconfigure_players(one, two) {
                    Ok(()) => {
                        self.status_message = format!("Players updated. {}", self.turn_message());
                    }
                    Err(conflict) => {
                        warn!(%conflict, "Player setup rejected");
                        form.set_error(conflict.to_string());
                        self.mode = Mode::Setup(form);
                    }
                }
            }
        }
    }

    fn place(&mut self, at: Coord) {
        match self.engine.apply_move(at.row, at.col) {
            Ok(MoveOutcome::Continued) => self.status_message = self.turn_message(),
            Ok(MoveOutcome::Won(_)) | Ok(MoveOutcome::Drawn) => {
                self.status_message = self.round_message();
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.status_message = e.to_string();
            }
        }
    }

    /// Starts the next round, keeping scores.
    fn play_again(&mut self) {
        self.engine.reset_round();
        self.cursor = Coord { row: 1, col: 1 };
        self.status_message = self.turn_message();
    }

    fn turn_message(&self) -> String {
        let player = self.engine.current_player();
        format!("{}'s turn [{}]", player.name(), player.symbol())
    }

    fn round_message(&self) -> String {
        match self.engine.status() {
            RoundStatus::Won { seat, .. } => format!(
                "{} wins this round! Press 'n' to play again.",
                self.engine.player(seat).name()
            ),
            RoundStatus::Drawn => "It's a draw! Press 'n' to play again.".to_string(),
            RoundStatus::NotStarted | RoundStatus::InProgress => self.turn_message(),
        }
    }
}
