//! Host configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_quarto::Ruleset;
use tracing::{debug, info, instrument};

/// Configuration for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HostConfig {
    /// Name of the challenging player.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Name of the challenged player.
    #[serde(default = "default_player_two")]
    player_two: String,

    /// Rules to play under (`basic` or `advanced`).
    #[serde(default)]
    ruleset: Ruleset,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Channel recorded on the challenge.
    #[serde(default = "default_channel")]
    channel: String,
}

fn default_player_one() -> String {
    "one".to_string()
}

fn default_player_two() -> String {
    "two".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_channel() -> String {
    "console".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            ruleset: Ruleset::default(),
            log_filter: default_log_filter(),
            channel: default_channel(),
        }
    }
}

impl HostConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(ruleset = %config.ruleset, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        player_one: Option<String>,
        player_two: Option<String>,
        advanced: bool,
    ) -> Self {
        if let Some(name) = player_one {
            self.player_one = name;
        }
        if let Some(name) = player_two {
            self.player_two = name;
        }
        if advanced {
            self.ruleset = Ruleset::Advanced;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
