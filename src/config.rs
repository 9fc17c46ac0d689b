//! Engine configuration.
//!
//! Loaded from a JSON file; every field is optional and falls back to its
//! default. Command-line flags override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::board::setup::STANDARD_SIZE;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid log level: '{0}'")]
    InvalidLogLevel(String),
}

/// Settings for a board session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Size used by `newboard` without an argument and by the implicit
    /// board created on first use.
    pub board_size: usize,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
    /// Print the rendered board after every successful move.
    pub render_after_move: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            board_size: STANDARD_SIZE,
            log_level: "info".to_string(),
            render_after_move: false,
        }
    }
}

impl EngineConfig {
    /// Parses `log_level` into a filter for the logger.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

/// Loads configuration from a JSON file at the given path.
pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    config_from_str(&data)
}

/// Loads configuration from a JSON string.
pub fn config_from_str(json: &str) -> Result<EngineConfig, ConfigError> {
    Ok(serde_json::from_str(json)?)
}
