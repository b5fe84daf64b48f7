//! Full-screen terminal UI.

mod app;
mod input;
mod setup;
mod ui;

pub use app::{App, Mode};
pub use input::{digit_cell, move_cursor};
pub use setup::{FIELD_LABELS, FormAction, SetupForm};

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{error, info, instrument};

/// Run the TUI until the user quits.
#[instrument(skip_all)]
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting tictac TUI");

    let (engine, conflict) = crate::build_engine(config);
    let mut app = App::new(engine, conflict);

    let mut terminal = ratatui::init();
    let res = run_loop(&mut terminal, &mut app);
    ratatui::restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scoreboard = %app.engine().scoreboard(), "TUI closed");
    res
}

/// Draw, wait for a key, repeat.
fn run_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
