//! Configuration management for Wordcast
//!
//! File paths, the expected account name and the geolocation are all explicit
//! configuration values, so tests can substitute every one of them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::types::GeoTag;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub database: DatabaseConfig,
    pub twitter: TwitterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Path to the plain-text dictionary source
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite usage store
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterConfig {
    /// Display name the authenticated account must carry; no check when unset
    pub account_name: Option<String>,
    /// Geolocation attached to every status
    pub geotag: GeoTag,
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            dictionary: DictionaryConfig {
                path: "~/.local/share/wordcast/dictionary.txt".to_string(),
            },
            database: DatabaseConfig {
                path: "~/.local/share/wordcast/words.db".to_string(),
            },
            twitter: TwitterConfig {
                account_name: None,
                geotag: GeoTag {
                    latitude: 51.5171,
                    longitude: -0.1062,
                },
            },
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("WORDCAST_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("wordcast").join("config.toml"))
}
