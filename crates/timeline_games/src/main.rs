//! Timeline Games - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use timeline_games::{
    GameConfig,
    cli::{Cli, Command},
    suggest::suggest,
    tui,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            two_player,
            reversed,
        } => {
            let config = GameConfig::load(config.as_deref())?.with_overrides(two_player, reversed);
            run_play(&config)
        }
        Command::Suggest { board } => run_suggest(&board),
    }
}

/// Run the terminal UI, logging to a file so the screen stays clean.
fn run_play(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(
        versus_computer = *config.versus_computer(),
        reversed_history = *config.reversed_history(),
        "Starting Timeline Games"
    );
    tui::run_tui(config)
}

/// Print the computer's move for a board given on the command line.
fn run_suggest(board: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let report = suggest(board).context("Invalid board")?;
    println!("{report}");
    Ok(())
}
