//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Tracing filter, overriding RUST_LOG and the settings file
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Log file, overriding the settings file
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Hide cell numbers on empty squares
        #[arg(long)]
        no_hints: bool,
    },

    /// Apply a script of moves and jumps, then print the result
    Replay {
        /// Cells (0-8 or labels) and jumps (@N), separated by commas or spaces
        script: String,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}
