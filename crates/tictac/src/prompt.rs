//! Line-prompt terminal edition.
//!
//! Asks both players for a name and symbol, then loops: show the board with
//! cell numbers, ask for a position, report wins and draws, offer another
//! round. Reads and writes through generic handles so sessions can be
//! scripted.

use crate::config::AppConfig;
use crate::palette::Rgb;
use anyhow::Result;
use crossterm::style::{Color, Stylize};
use std::io::{BufRead, Write};
use tictac_engine::{
    BOARD_SIZE, GameEngine, InvalidMove, MoveOutcome, PlayerId, PlayerSetup, RoundListener,
    Scoreboard,
};
use tracing::{debug, info, instrument, warn};

/// Largest accepted position number.
const LAST_POSITION: usize = BOARD_SIZE * BOARD_SIZE - 1;

/// An interactive prompt session.
pub struct PromptGame<R, W> {
    input: R,
    output: W,
    defaults: [PlayerSetup; 2],
    listener: Option<Box<dyn RoundListener>>,
}

impl<R: BufRead, W: Write> PromptGame<R, W> {
    /// Creates a session; blank answers fall back to the configured players.
    pub fn new(input: R, output: W, config: &AppConfig) -> Self {
        Self {
            input,
            output,
            defaults: [PlayerId::One, PlayerId::Two].map(|seat| config.setup(seat)),
            listener: None,
        }
    }

    /// Attaches a round listener (sound cues) to the engine once it exists.
    pub fn with_listener(mut self, listener: Option<Box<dyn RoundListener>>) -> Self {
        self.listener = listener;
        self
    }

    /// Runs until the players decline another round or input ends.
    ///
    /// Returns the final scoreboard.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<Scoreboard> {
        writeln!(
            self.output,
            "{}",
            "🎮 Welcome to Tic Tac Toe (Terminal Edition) 🎮\n".magenta()
        )?;

        let Some(mut engine) = self.create_engine()? else {
            return Ok(GameEngine::default().scoreboard());
        };
        engine.set_listener(self.listener.take());

        loop {
            self.show_board(&engine)?;
            let player = engine.current_player();
            let color = seat_color(&engine, engine.current_seat());
            writeln!(
                self.output,
                "{}",
                format!("{}'s turn [{}]", player.name(), player.symbol()).with(color)
            )?;

            let Some(outcome) = self.read_move(&mut engine)? else {
                break;
            };

            match outcome {
                MoveOutcome::Continued => continue,
                MoveOutcome::Won(_) => {
                    self.show_board(&engine)?;
                    let winner = engine.current_player();
                    writeln!(
                        self.output,
                        "🏆 {} wins this round!",
                        winner.name().as_str().with(color)
                    )?;
                }
                MoveOutcome::Drawn => {
                    self.show_board(&engine)?;
                    writeln!(self.output, "{}", "🤝 It's a draw!".yellow())?;
                }
            }

            self.show_scoreboard(&engine.scoreboard())?;
            if !self.play_again()? {
                break;
            }
            engine.reset_round();
        }

        writeln!(self.output, "Thanks for playing! 🎮")?;
        Ok(engine.scoreboard())
    }

    /// Reads one line; `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask_player(&mut self, label: &str, seat: PlayerId) -> Result<Option<PlayerSetup>> {
        let default = self.defaults[seat.index()].clone();
        let Some(name) = self.ask(&format!("{label}, enter your name: "))? else {
            return Ok(None);
        };
        let shown = if name.trim().is_empty() { default.name.clone() } else { name.clone() };
        let Some(symbol) = self.ask(&format!("{shown}, choose your symbol (X/O/etc.): "))? else {
            return Ok(None);
        };
        let name = if name.trim().is_empty() { default.name } else { name };
        let symbol = if symbol.trim().is_empty() { default.symbol } else { symbol };
        Ok(Some(PlayerSetup::new(name, symbol, default.color)))
    }

    /// Collects both players, re-asking player two until there is no conflict.
    fn create_engine(&mut self) -> Result<Option<GameEngine>> {
        let Some(one) = self.ask_player("Player 1", PlayerId::One)? else {
            return Ok(None);
        };
        loop {
            let Some(two) = self.ask_player("Player 2", PlayerId::Two)? else {
                return Ok(None);
            };
            match GameEngine::new(one.clone(), two) {
                Ok(engine) => {
                    info!("Players registered");
                    return Ok(Some(engine));
                }
                Err(conflict) => {
                    warn!(%conflict, "Player setup rejected");
                    writeln!(self.output, "{}", format!("⚠️ {conflict}").red())?;
                }
            }
        }
    }

    /// Asks until a move is accepted; `None` at end of input.
    fn read_move(&mut self, engine: &mut GameEngine) -> Result<Option<MoveOutcome>> {
        loop {
            let question = format!("Choose a position (0-{LAST_POSITION}): ");
            let Some(answer) = self.ask(&question)? else {
                return Ok(None);
            };
            let result = answer
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("Must be between 0-{LAST_POSITION}"))
                .and_then(|index| engine.apply_index(index).map_err(|e| describe(&e)));
            match result {
                Ok(outcome) => return Ok(Some(outcome)),
                Err(message) => {
                    debug!(%answer, %message, "Move rejected");
                    writeln!(self.output, "{}", format!("⚠️ {message}").red())?;
                }
            }
        }
    }

    fn play_again(&mut self) -> Result<bool> {
        Ok(self
            .ask("🔁 Play again? (y/n): ")?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")))
    }

    fn show_board(&mut self, engine: &GameEngine) -> Result<()> {
        writeln!(self.output)?;
        for (row, cells) in engine.board().rows().iter().enumerate() {
            let rendered: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell.occupant() {
                    Some(seat) => engine
                        .player(seat)
                        .symbol()
                        .as_str()
                        .with(seat_color(engine, seat))
                        .to_string(),
                    None => (row * BOARD_SIZE + col).to_string(),
                })
                .collect();
            writeln!(self.output, " {} ", rendered.join(" | "))?;
            if row + 1 < BOARD_SIZE {
                writeln!(self.output, "---|---|---")?;
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn show_scoreboard(&mut self, board: &Scoreboard) -> Result<()> {
        writeln!(self.output, "{}", "\n📊 Scoreboard:".cyan())?;
        for (name, score) in &board.players {
            writeln!(self.output, "{name}: {score}")?;
        }
        writeln!(self.output, "Draws: {}\n", board.draws)?;
        Ok(())
    }
}

fn seat_color(engine: &GameEngine, seat: PlayerId) -> Color {
    Rgb::for_player(engine.player(seat).color(), seat).into()
}

/// Wording for rejected moves in terms of position numbers.
fn describe(error: &InvalidMove) -> String {
    match error {
        InvalidMove::OutOfRange { .. } | InvalidMove::IndexOutOfRange { .. } => {
            format!("Must be between 0-{LAST_POSITION}")
        }
        InvalidMove::Occupied { .. } => "That position is already filled".to_string(),
        InvalidMove::RoundOver => error.to_string(),
    }
}
