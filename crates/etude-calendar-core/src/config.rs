//! TOML-based calendar configuration.
//!
//! Stores the per-user view preferences the CLI (and any other host)
//! applies when no explicit flags are given:
//! - default view mode (week / month / half-year)
//! - minimum lane count hint for renderers
//!
//! Configuration is stored at `~/.config/etude-calendar/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::range::ViewMode;

/// Calendar configuration.
///
/// Serialized to/from TOML at `~/.config/etude-calendar/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// View mode used when none is requested explicitly.
    #[serde(default)]
    pub default_view: ViewMode,
    /// Advisory minimum number of grid rows for renderers. The allocator
    /// itself never bounds lane count.
    #[serde(default)]
    pub max_lanes_hint: Option<usize>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            default_view: ViewMode::Month,
            max_lanes_hint: None,
        }
    }
}

/// Returns `~/.config/etude-calendar/`, creating it if missing.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or the
/// directory cannot be created.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join(".config")
        .join("etude-calendar");

    std::fs::create_dir_all(&base_dir).map_err(|e| ConfigError::SaveFailed {
        path: base_dir.clone(),
        message: e.to_string(),
    })?;
    Ok(base_dir)
}

impl CalendarConfig {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the default file when none exists.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_toml(&content),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk or fall back to the default.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    /// Returns an error when the document is not valid config TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Load from an explicit path, for hosts that keep config elsewhere.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
