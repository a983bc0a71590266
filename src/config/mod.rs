// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[notifications]` - default auto-dismiss delay, stack position, visible limit
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` CLI argument (passed as `dir_override`)
//! 3. `ICED_NOTIFY_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_notify::config::{self, Config};
//!
//! let mut config = config::load(None).unwrap_or_default();
//! config.general.language = Some("fr".to_string());
//! config::save(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::notifications::{ListOptions, Position, StoreConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedNotify";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_NOTIFY_CONFIG_DIR";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Toast behavior and placement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Auto-dismiss delay for every kind, in milliseconds. Per-kind defaults
    /// apply when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_duration_ms: Option<u64>,

    /// Corner the toast stack is anchored to.
    #[serde(default)]
    pub position: Position,

    /// Show at most this many toasts at once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,
}

impl NotificationsConfig {
    /// Store settings with out-of-range values clamped.
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            default_duration: self.default_duration_ms.map(|ms| {
                Duration::from_millis(
                    ms.clamp(MIN_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS),
                )
            }),
        }
    }

    #[must_use]
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            position: self.position,
            max_visible: self.max_visible.map(|max| max.clamp(1, MAX_VISIBLE_LIMIT)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// Returns the config directory, honoring `dir_override` then the environment.
#[must_use]
pub fn config_dir(dir_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = dir_override {
        return Some(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_file(dir_override: Option<&Path>) -> Option<PathBuf> {
    config_dir(dir_override).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the settings file, or defaults when it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load(dir_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_file(dir_override) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the settings file, creating its directory if needed.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = config_file(dir_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads `path`. Malformed TOML falls back to defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

/// Writes `config` to `path`.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
