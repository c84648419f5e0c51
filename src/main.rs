//! tictactoe_replay - Unified CLI
//!
//! Play in the terminal, or replay an action script headlessly.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_replay::{
    GameConfig, GameState, StateObserver, TracingObserver, render_text, run_script, run_tui,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { script } => run_replay(&config, &script),
    }
}

/// Run the terminal UI, logging to the configured file.
fn run_play(config: &GameConfig) -> Result<()> {
    initialize_file_tracing(config)?;
    run_tui(GameState::with_sort_order(*config.sort_order()))
}

/// Run a script and print the resulting view.
fn run_replay(config: &GameConfig, script: &str) -> Result<()> {
    initialize_stderr_tracing(config);

    let observers: Vec<Box<dyn StateObserver>> = vec![Box::new(TracingObserver)];
    let state = run_script(
        script,
        GameState::with_sort_order(*config.sort_order()),
        observers,
    )
    .context("Failed to run script")?;

    info!(step = state.current_step(), "Script finished");
    print!("{}", render_text(&state));
    Ok(())
}

fn env_filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs go to a file so they do not interfere with the TUI.
fn initialize_file_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(log_file = %config.log_file().display(), "Tracing initialized");
    Ok(())
}

fn initialize_stderr_tracing(config: &GameConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
