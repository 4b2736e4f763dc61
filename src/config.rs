//! Configuration file support for yarnlock-inspect
//!
//! Reads configuration from `~/.config/yarnlock-inspect/config.json`:
//!
//! ```json
//! {
//!   "lockfile_name": "yarn.lock",
//!   "format": "json",
//!   "search_parents": true
//! }
//! ```
//!
//! Every field is optional. Command-line flags take precedence.

use crate::lockfile::DEFAULT_LOCKFILE_NAME;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot determine config directory. HOME environment variable not set.")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// File name looked up when no path is given (default: yarn.lock)
    #[serde(default = "default_lockfile_name")]
    pub lockfile_name: String,

    #[serde(default)]
    pub format: OutputFormat,

    /// Walk up parent directories to find the lockfile
    #[serde(default)]
    pub search_parents: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lockfile_name: default_lockfile_name(),
            format: OutputFormat::default(),
            search_parents: false,
        }
    }
}

fn default_lockfile_name() -> String {
    DEFAULT_LOCKFILE_NAME.to_string()
}

impl Config {
    /// Load configuration from the default path or return defaults if not found
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from `path`, returning defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the config file path: `~/.config/yarnlock-inspect/config.json`
pub fn config_path() -> Result<PathBuf, ConfigError> {
    // Use XDG_CONFIG_HOME if set, otherwise fall back to ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(".config"))
                .unwrap_or_default()
        });

    if config_base.as_os_str().is_empty() {
        return Err(ConfigError::NoConfigDir);
    }

    Ok(config_base.join("yarnlock-inspect").join("config.json"))
}
