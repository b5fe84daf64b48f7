//! tictac - two-player tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictac::logging::{self, LogTarget};
use tictac::{AppConfig, PromptGame};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);

    let mut config = AppConfig::resolve(cli.config.as_deref())
        .context("Could not load configuration")?
        .with_names(cli.player_one, cli.player_two);
    if cli.no_sound {
        config = config.without_sound();
    }

    let target = match command {
        Command::Prompt => LogTarget::Stderr,
        _ => LogTarget::File(config.log_file().clone()),
    };
    logging::init(target)?;
    info!(?command, "Starting tictac");

    match command {
        Command::Tui => tictac::tui::run(&config),
        Command::Prompt => run_prompt(&config),
        #[cfg(feature = "gui")]
        Command::Gui => tictac::gui::run(&config),
    }
}

/// Run the line-prompt edition on stdin/stdout
#[instrument(skip_all)]
fn run_prompt(config: &AppConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let scoreboard = PromptGame::new(stdin.lock(), stdout.lock(), config)
        .with_listener(tictac::sound_listener(config))
        .run()?;
    info!(%scoreboard, "Prompt session finished");
    Ok(())
}
