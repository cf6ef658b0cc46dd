//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use super::{SheetConfig, SheetTuning};
use crate::animation::SpringParams;
use crate::model::detent::DetentFractions;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path:?}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path:?}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/snapsheet/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Whether horizontal card swipes are recognized.
    #[serde(default)]
    pub swipe_enabled: Option<bool>,

    /// Viewport-height fraction of the large detent.
    #[serde(default)]
    pub large_fraction: Option<f64>,

    /// Viewport-height fraction of the medium detent.
    #[serde(default)]
    pub medium_fraction: Option<f64>,

    /// Viewport-height fraction of the small detent.
    #[serde(default)]
    pub small_fraction: Option<f64>,

    /// Viewport-height fraction of the mini detent.
    #[serde(default)]
    pub mini_fraction: Option<f64>,

    /// Drag slack past the mini detent, in points.
    #[serde(default)]
    pub overshoot_slack: Option<f64>,

    /// Release distance past the mini detent required for dismissal.
    #[serde(default)]
    pub dismiss_slack: Option<f64>,

    /// Downward release velocity required for dismissal (points/s).
    #[serde(default)]
    pub dismiss_velocity: Option<f64>,

    /// Upward flick speed that snaps straight to large (points/s).
    #[serde(default)]
    pub fast_up_velocity: Option<f64>,

    /// Downward flick speed that snaps straight to mini (points/s).
    #[serde(default)]
    pub fast_down_velocity: Option<f64>,

    /// Horizontal travel that exits the card, in points.
    #[serde(default)]
    pub exit_distance: Option<f64>,

    /// Horizontal release speed that exits the card (points/s).
    #[serde(default)]
    pub exit_velocity: Option<f64>,

    /// Card rotation cap in degrees (stored as radians once resolved).
    #[serde(default)]
    pub max_rotation_degrees: Option<f64>,

    /// Floor for card opacity while swiping.
    #[serde(default)]
    pub min_card_opacity: Option<f64>,

    /// Fallback deadline for the close commit, in milliseconds.
    #[serde(default)]
    pub settle_fallback_ms: Option<u64>,

    /// Fallback deadline for the sibling commit, in milliseconds.
    #[serde(default)]
    pub exit_fallback_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Spring tuning for sheet transitions.
    #[serde(default)]
    pub sheet_spring: Option<SpringSection>,

    /// Spring tuning for card transitions.
    #[serde(default)]
    pub card_spring: Option<SpringSection>,
}

/// Spring parameter section from TOML.
///
/// Structure matches the TOML format:
/// ```toml
/// [sheet_spring]
/// stiffness = 170.0
/// damping = 26.0
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SpringSection {
    /// Spring constant.
    #[serde(default)]
    pub stiffness: Option<f64>,

    /// Viscous damping coefficient.
    #[serde(default)]
    pub damping: Option<f64>,

    /// Attached mass.
    #[serde(default)]
    pub mass: Option<f64>,

    /// Clamp the value to the target on its first crossing.
    #[serde(default)]
    pub overshoot_clamping: Option<bool>,
}

impl SpringSection {
    fn merge_into(&self, defaults: SpringParams) -> SpringParams {
        SpringParams {
            stiffness: self.stiffness.unwrap_or(defaults.stiffness),
            damping: self.damping.unwrap_or(defaults.damping),
            mass: self.mass.unwrap_or(defaults.mass),
            overshoot_clamping: self.overshoot_clamping.unwrap_or(defaults.overshoot_clamping),
        }
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Controller configuration handed to `SheetController::new`.
    pub sheet: SheetConfig,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            sheet: SheetConfig::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/snapsheet/snapsheet.log` on Unix-like systems,
/// or the appropriate platform path elsewhere.
///
/// If the state directory cannot be determined, falls back to the current
/// directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("snapsheet").join("snapsheet.log")
    } else {
        PathBuf::from("snapsheet.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/snapsheet/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if the home directory cannot be
/// determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("snapsheet").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults).
///
/// # Errors
///
/// Returns an error if the file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `SNAPSHEET_CONFIG` environment variable
/// 3. Default path `~/.config/snapsheet/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns an error only if a config file exists but cannot be read or
/// parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    // 1. Explicit path (like CLI --config)
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    // 2. SNAPSHEET_CONFIG environment variable
    if let Ok(env_path) = std::env::var("SNAPSHEET_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    // 3. Default path
    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    // No config path available
    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let default_fractions = DetentFractions::default();
    let default_tuning = SheetTuning::default();

    let fractions = DetentFractions {
        large: config.large_fraction.unwrap_or(default_fractions.large),
        medium: config.medium_fraction.unwrap_or(default_fractions.medium),
        small: config.small_fraction.unwrap_or(default_fractions.small),
        mini: config.mini_fraction.unwrap_or(default_fractions.mini),
    };

    let tuning = SheetTuning {
        overshoot_slack: config
            .overshoot_slack
            .unwrap_or(default_tuning.overshoot_slack),
        dismiss_slack: config.dismiss_slack.unwrap_or(default_tuning.dismiss_slack),
        dismiss_velocity: config
            .dismiss_velocity
            .unwrap_or(default_tuning.dismiss_velocity),
        fast_up_velocity: config
            .fast_up_velocity
            .unwrap_or(default_tuning.fast_up_velocity),
        fast_down_velocity: config
            .fast_down_velocity
            .unwrap_or(default_tuning.fast_down_velocity),
        exit_distance: config.exit_distance.unwrap_or(default_tuning.exit_distance),
        exit_velocity: config.exit_velocity.unwrap_or(default_tuning.exit_velocity),
        max_rotation: config
            .max_rotation_degrees
            .map(f64::to_radians)
            .unwrap_or(default_tuning.max_rotation),
        min_card_opacity: config
            .min_card_opacity
            .unwrap_or(default_tuning.min_card_opacity),
        settle_fallback: config
            .settle_fallback_ms
            .map(|ms| ms as f64 / 1000.0)
            .unwrap_or(default_tuning.settle_fallback),
        exit_fallback: config
            .exit_fallback_ms
            .map(|ms| ms as f64 / 1000.0)
            .unwrap_or(default_tuning.exit_fallback),
        sheet_spring: config
            .sheet_spring
            .as_ref()
            .map(|s| s.merge_into(default_tuning.sheet_spring))
            .unwrap_or(default_tuning.sheet_spring),
        card_spring: config
            .card_spring
            .as_ref()
            .map(|s| s.merge_into(default_tuning.card_spring))
            .unwrap_or(default_tuning.card_spring),
    };

    ResolvedConfig {
        sheet: SheetConfig {
            fractions,
            swipe_enabled: config.swipe_enabled.unwrap_or(defaults.sheet.swipe_enabled),
            tuning,
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `SNAPSHEET_SWIPE_ENABLED`: "true"/"false" override for swipe recognition
/// - `SNAPSHEET_LOG_FILE`: override for the log file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(value) = std::env::var("SNAPSHEET_SWIPE_ENABLED") {
        if let Ok(enabled) = value.parse::<bool>() {
            config.sheet.swipe_enabled = enabled;
        }
    }

    if let Ok(path) = std::env::var("SNAPSHEET_LOG_FILE") {
        config.log_file_path = PathBuf::from(path);
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    swipe_override: Option<bool>,
    log_file_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(swipe) = swipe_override {
        config.sheet.swipe_enabled = swipe;
    }

    if let Some(path) = log_file_override {
        config.log_file_path = path;
    }

    config
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
