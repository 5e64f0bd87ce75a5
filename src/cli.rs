//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Terminal noughts-and-crosses with match scoring.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player noughts-and-crosses in the terminal, scored across rounds")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file with player names and the target game count
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Games per match; overrides the config file. Open-ended when unset
    #[arg(short, long)]
    pub target_games: Option<u32>,

    /// Name for player one (X); overrides the config file
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name for player two (O); overrides the config file
    #[arg(long)]
    pub player_two: Option<String>,

    /// File to write logs to
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}
