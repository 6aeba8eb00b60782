//! Command-line interface for timeline_games.

use clap::{Parser, Subcommand};

/// Timeline Games - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "timeline_games")]
#[command(about = "Tic-tac-toe with move history, time travel and a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file (defaults to timeline_games.toml if present)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Two humans share the keyboard instead of playing the computer
        #[arg(long)]
        two_player: bool,

        /// Show the move list newest first
        #[arg(long)]
        reversed: bool,
    },

    /// Print the computer's move for a board, e.g. "XX. O.. ..."
    Suggest {
        /// Nine squares in row-major order: X, O, or . for empty
        board: String,
    },
}
