//! Command-line interface for tictactoe_replay.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a browsable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Tic-tac-toe with a browsable, branch-on-replay move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe_replay.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Run an action script headlessly and print the final view
    Replay {
        /// Actions separated by spaces or commas: m<cell>, j<step>, s
        ///
        /// Example: "m4 m0 m8 j1 m2 s"
        script: String,
    },
}
