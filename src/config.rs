//! Match configuration: player names and the target game count.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration error with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Configuration for a match, loadable from a TOML file.
///
/// Every field has a default, so an empty file yields a playable
/// configuration. `target_games` stays `None` when absent, which keeps
/// the match open-ended.
#[derive(Debug, Clone, Getters, Deserialize)]
pub struct MatchConfig {
    /// Display name for the first player (marker X).
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Display name for the second player (marker O).
    #[serde(default = "default_player_two")]
    player_two: String,

    /// Games per match; when absent the overall-winner check never fires.
    #[serde(default)]
    target_games: Option<u32>,
}

fn default_player_one() -> String {
    "Player 1".to_string()
}

fn default_player_two() -> String {
    "Player 2".to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            target_games: None,
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(config_path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("loading match config");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config: {e}")))?;

        info!(
            player_one = %config.player_one,
            player_two = %config.player_two,
            target_games = ?config.target_games,
            "config loaded"
        );
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values. A
    /// `None` override keeps the existing value.
    pub fn with_overrides(
        mut self,
        player_one: Option<String>,
        player_two: Option<String>,
        target_games: Option<u32>,
    ) -> Self {
        if let Some(name) = player_one {
            self.player_one = name;
        }
        if let Some(name) = player_two {
            self.player_two = name;
        }
        if let Some(target) = target_games {
            self.target_games = Some(target);
        }
        self
    }
}
