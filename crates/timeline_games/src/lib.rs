//! Timeline Games library - terminal frontend for time-travel tic-tac-toe
//!
//! Game rules live in `timeline_tictactoe`; this crate adds configuration,
//! the command-line surface and a ratatui frontend.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod suggest;
pub mod tui;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
