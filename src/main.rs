//! Entry point: CLI parsing, logging setup, and the terminal lifecycle.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use noughts::cli::Cli;
use noughts::config::MatchConfig;
use noughts::tui;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli)?;

    let config = load_config(&cli);
    info!(
        player_one = %config.player_one(),
        player_two = %config.player_two(),
        target_games = ?config.target_games(),
        "starting match"
    );

    tui::run(&config)
}

/// Sends tracing output to a file so it never interferes with the TUI.
fn init_tracing(cli: &Cli) -> Result<()> {
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Loads the config file (if one was given) and applies CLI overrides.
/// An unreadable or malformed file falls back to defaults with a warning.
fn load_config(cli: &Cli) -> MatchConfig {
    let base = match &cli.config {
        Some(path) => match MatchConfig::from_file(path) {
            Ok(config) => config,
            Err(error) => {
                warn!(%error, "config file unusable, falling back to defaults");
                MatchConfig::default()
            }
        },
        None => MatchConfig::default(),
    };

    base.with_overrides(
        cli.player_one.clone(),
        cli.player_two.clone(),
        cli.target_games,
    )
}
