//! Configuration file support
//!
//! Loads `.phpcompat.toml` from a directory or its parents.

use phpcompat_core::{CompatError, CompatibilityRange};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::logging;

/// Name of the configuration file
pub const CONFIG_FILE: &str = ".phpcompat.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No test version configured")]
    MissingTestVersion,

    #[error("Invalid test version: {0}")]
    InvalidTestVersion(#[from] CompatError),
}

/// Configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub php: PhpConfig,
    pub sniffs: SniffsConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PhpConfig {
    /// PHP versions to check against (e.g., "5.6-", "7.0-8.1")
    pub test_version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SniffsConfig {
    /// If set, only these sniffs will run
    pub enabled: Option<Vec<String>>,
    /// Sniffs to exclude (applied after enabled)
    pub disabled: Vec<String>,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str, path: &Path) -> Result<Config, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config searching from the given directory upward
    pub fn load_from(start_dir: &Path) -> Result<Option<(Config, PathBuf)>, ConfigError> {
        let mut current = Some(start_dir);

        while let Some(dir) = current {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load_path(&config_path)?;
                return Ok(Some((config, config_path)));
            }
            current = dir.parent();
        }

        Ok(None)
    }

    /// Load config from a specific path
    pub fn load_path(path: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents, path)
    }

    /// The configured range, or the override when one is given
    pub fn range(&self, override_version: Option<&str>) -> Result<CompatibilityRange, ConfigError> {
        let (source, test_version) = match override_version {
            Some(version) => ("override", version),
            None => (
                "config",
                self.php
                    .test_version
                    .as_deref()
                    .ok_or(ConfigError::MissingTestVersion)?,
            ),
        };

        let range = CompatibilityRange::from_test_version(test_version)?;
        logging::log_range(source, &range);
        Ok(range)
    }

    /// Compute the effective set of enabled sniffs
    pub fn effective_sniffs(&self, all_sniffs: &[&str]) -> HashSet<String> {
        let mut sniffs: HashSet<String> = match &self.sniffs.enabled {
            Some(enabled) => enabled.iter().cloned().collect(),
            None => all_sniffs.iter().map(|s| s.to_string()).collect(),
        };

        for disabled in &self.sniffs.disabled {
            sniffs.remove(disabled);
        }

        let mut names: Vec<&str> = sniffs.iter().map(String::as_str).collect();
        names.sort_unstable();
        logging::log_enabled_sniffs(&names);

        sniffs
    }
}
