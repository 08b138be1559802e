//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\tunescout\config.toml
//! - macOS: ~/Library/Application Support/tunescout/config.toml
//! - Linux: ~/.config/tunescout/config.toml
//!
//! The config file is human-readable and editable. A missing or unparseable
//! file yields defaults; a missing API key is a recoverable failure surfaced
//! through the key provider, never fatal to startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::traits::{ApiKeyProvider, KeyError};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials (keep separate for potential future encryption)
    pub credentials: Credentials,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Secondary API key for rating and lyrics lookups
    pub musixmatch_api_key: Option<String>,
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tunescout"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_path(&path)
}

/// Load configuration from a specific path, with the same
/// default-on-any-problem semantics as [`load`].
pub fn load_path(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to disk
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    save_in(config, &dir)
}

fn save_in(config: &Config, dir: &Path) -> Result<(), ConfigError> {
    let path = dir.join("config.toml");

    // Ensure directory exists
    std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;

    // Serialize to pretty TOML
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Key Provider
// ============================================================================

/// Key provider backed by the on-disk config file.
///
/// Reads once at construction; absence surfaces as a [`KeyError`] that the
/// ratings client reports once and then works around with an empty key.
pub struct ConfigKeyProvider {
    config: Config,
}

impl ConfigKeyProvider {
    pub fn from_disk() -> Self {
        Self { config: load() }
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }
}

impl ApiKeyProvider for ConfigKeyProvider {
    fn api_key(&self) -> Result<String, KeyError> {
        self.config
            .credentials
            .musixmatch_api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                KeyError::Missing(format!(
                    "set credentials.musixmatch_api_key in {} or the MUSIXMATCH_API_KEY env var",
                    config_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "the config file".to_string())
                ))
            })
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
