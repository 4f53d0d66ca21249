//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use tictactoe_core::Side;
use tracing::{debug, info, instrument};

/// Settings for the terminal host.
///
/// Every field is optional in the file; missing ones take their defaults.
///
/// ```toml
/// human_side = "o"
/// log_filter = "tictactoe_core=debug"
/// show_scores = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayConfig {
    /// Side the human plays; asked interactively when absent.
    #[serde(default, deserialize_with = "deserialize_side")]
    human_side: Option<Side>,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print the score of every candidate the AI considered.
    #[serde(default)]
    show_scores: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn deserialize_side<'de, D>(deserializer: D) -> Result<Option<Side>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| s.parse::<Side>().map_err(serde::de::Error::custom))
        .transpose()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_side: None,
            log_filter: default_log_filter(),
            show_scores: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(human_side = ?config.human_side, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(mut self, human_side: Option<Side>, show_scores: bool) -> Self {
        if human_side.is_some() {
            self.human_side = human_side;
        }
        self.show_scores |= show_scores;
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
