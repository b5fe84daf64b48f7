//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players at one keyboard
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal or a window", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictac.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable sound cues
    #[arg(long, global = true)]
    pub no_sound: bool,

    /// Name for player one, overriding the config file
    #[arg(long, global = true)]
    pub player_one: Option<String>,

    /// Name for player two, overriding the config file
    #[arg(long, global = true)]
    pub player_two: Option<String>,

    /// Front-end to run (default: tui)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front-ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Full-screen terminal board
    Tui,

    /// Line-by-line terminal edition
    Prompt,

    /// Desktop window
    #[cfg(feature = "gui")]
    Gui,
}
