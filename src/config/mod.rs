// SPDX-License-Identifier: MPL-2.0
//! This module handles the presenter configuration, including loading and
//! saving it to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[presentation]` - Default position and view pre-warming
//! - `[timing]` - Automatic duration resolution
//! - `[diagnostics]` - Lifecycle history size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `TOAST_QUEUE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toast_queue::config::{self, Config};
//! use toast_queue::message::Position;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.presentation.default_position = Position::Bottom;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::message::{DurationPolicy, Position};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Presentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PresentationConfig {
    /// Position used by messages built without an explicit one.
    #[serde(default)]
    pub default_position: Position,

    /// Ask the renderer to build views as soon as a message is enqueued
    /// instead of when it reaches the front of the queue.
    #[serde(default)]
    pub prewarm_views: bool,
}

/// Automatic duration settings (all values in seconds).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    #[serde(default = "default_automatic_base_secs")]
    pub automatic_base_secs: f64,

    #[serde(default = "default_per_character_secs")]
    pub per_character_secs: f64,

    #[serde(default = "default_minimum_secs")]
    pub minimum_secs: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            automatic_base_secs: DEFAULT_AUTOMATIC_BASE_SECS,
            per_character_secs: DEFAULT_PER_CHARACTER_SECS,
            minimum_secs: DEFAULT_MINIMUM_SECS,
        }
    }
}

impl TimingConfig {
    /// Builds the duration policy, sanitizing out-of-range values.
    ///
    /// Negative, NaN or oversized values fall back to the defaults so a
    /// hand-edited file can never produce a panicking `Duration`.
    #[must_use]
    pub fn policy(&self) -> DurationPolicy {
        DurationPolicy::new(
            secs_or(self.automatic_base_secs, DEFAULT_AUTOMATIC_BASE_SECS),
            secs_or(self.per_character_secs, DEFAULT_PER_CHARACTER_SECS),
            secs_or(self.minimum_secs, DEFAULT_MINIMUM_SECS),
        )
    }
}

fn secs_or(value: f64, fallback: f64) -> Duration {
    if value.is_finite() && (0.0..=MAX_TIMING_SECS).contains(&value) {
        Duration::from_secs_f64(value)
    } else {
        Duration::from_secs_f64(fallback)
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of lifecycle events kept by the controller.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

// =============================================================================
// Config
// =============================================================================

/// Complete presenter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub presentation: PresentationConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_automatic_base_secs() -> f64 {
    DEFAULT_AUTOMATIC_BASE_SECS
}

fn default_per_character_secs() -> f64 {
    DEFAULT_PER_CHARACTER_SECS
}

fn default_minimum_secs() -> f64 {
    DEFAULT_MINIMUM_SECS
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

// =============================================================================
// Load / Save
// =============================================================================

/// Warning key returned when an existing settings file cannot be read.
pub const LOAD_ERROR_WARNING: &str = "config-load-error";

fn settings_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// A missing file yields the defaults silently. An unreadable or malformed
/// file yields the defaults plus [`LOAD_ERROR_WARNING`] for the host to
/// surface.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration, looking in `base_dir` if given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_path(base_dir).filter(|path| path.exists()) else {
        return (Config::default(), None);
    };

    load_from_path(&path).map_or_else(
        |err| {
            log::warn!("ignoring {}: {err}", path.display());
            (Config::default(), Some(LOAD_ERROR_WARNING.to_string()))
        },
        |config| (config, None),
    )
}

/// Reads and parses a settings file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves to the default location. Does nothing when no config directory
/// can be determined.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves into `base_dir` if given, otherwise the default location.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match settings_path(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Writes `config` as TOML, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`Error::Io`] on filesystem failures and [`Error::Config`] if
/// serialization fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, content)?;
    log::debug!("settings written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.presentation.default_position, Position::Top);
        assert!(!config.presentation.prewarm_views);
        assert_eq!(config.timing.minimum_secs, DEFAULT_MINIMUM_SECS);
        assert_eq!(
            config.diagnostics.history_capacity,
            DEFAULT_HISTORY_CAPACITY
        );
    }

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            presentation: PresentationConfig {
                default_position: Position::Bottom,
                prewarm_views: true,
            },
            timing: TimingConfig {
                automatic_base_secs: 2.5,
                ..TimingConfig::default()
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[presentation]\ndefault_position = \"bottom\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.presentation.default_position, Position::Bottom);
        assert_eq!(loaded.timing, TimingConfig::default());
    }

    #[test]
    fn load_with_override_from_missing_file_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_writes_into_base_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("cfg");

        save_with_override(&Config::default(), Some(base_dir.clone()))
            .expect("save should create directories");
        assert!(base_dir.join(CONFIG_FILE).exists());
    }

    #[test]
    fn policy_replaces_invalid_timing_values() {
        let timing = TimingConfig {
            automatic_base_secs: -1.0,
            per_character_secs: f64::NAN,
            minimum_secs: 1e9,
        };
        assert_eq!(timing.policy(), TimingConfig::default().policy());
    }
}
