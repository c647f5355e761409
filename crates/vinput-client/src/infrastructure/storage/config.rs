//! TOML-based configuration for the virtual input client.
//!
//! The file is looked up in this order:
//! 1. The path in the `VINPUT_CONFIG` environment variable, if set.
//! 2. `$XDG_CONFIG_HOME/vinput/config.toml`.
//! 3. `~/.config/vinput/config.toml`.
//!
//! A missing file is not an error: every field has a serde default, so the
//! client runs with the defaults on first start.
//!
//! ```toml
//! [device]
//! uinput_path = "/dev/uinput"
//! settle_delay_ms = 2000
//! pointer_name = "synergyMouse"
//! keyboard_name = "synergyKeyboard"
//!
//! [screen]
//! width = 1920
//! height = 1080
//!
//! [logging]
//! log_level = "info"
//! ```
//!
//! # Why a settle delay? (for beginners)
//!
//! After `UI_DEV_CREATE` the kernel announces the new device to user space
//! and udev, the display server and libinput open it asynchronously.  Events
//! written before they have attached are silently lost.  Waiting a moment
//! after creation avoids dropping the first motion or key of a session.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vinput_core::domain::descriptor::{DEFAULT_KEYBOARD_NAME, DEFAULT_POINTER_NAME};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "VINPUT_CONFIG";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither `XDG_CONFIG_HOME` nor `HOME` is set.
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The pointer surface must be at least 1×1.
    #[error("invalid screen size {width}x{height}: both dimensions must be positive")]
    InvalidScreen { width: u16, height: u16 },
}

// ── Config schema types ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how the virtual devices are created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceConfig {
    /// Path of the uinput character device.
    #[serde(default = "default_uinput_path")]
    pub uinput_path: PathBuf,
    /// Pause after each device is committed, in milliseconds.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    #[serde(default = "default_pointer_name")]
    pub pointer_name: String,
    #[serde(default = "default_keyboard_name")]
    pub keyboard_name: String,
}

/// Surface the pointer's absolute axes span.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreenConfig {
    #[serde(default = "default_screen_width")]
    pub width: u16,
    #[serde(default = "default_screen_height")]
    pub height: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_uinput_path() -> PathBuf {
    PathBuf::from("/dev/uinput")
}
fn default_settle_delay_ms() -> u64 {
    2000
}
fn default_pointer_name() -> String {
    DEFAULT_POINTER_NAME.to_string()
}
fn default_keyboard_name() -> String {
    DEFAULT_KEYBOARD_NAME.to_string()
}
fn default_screen_width() -> u16 {
    1920
}
fn default_screen_height() -> u16 {
    1080
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            uinput_path: default_uinput_path(),
            settle_delay_ms: default_settle_delay_ms(),
            pointer_name: default_pointer_name(),
            keyboard_name: default_keyboard_name(),
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: default_screen_width(),
            height: default_screen_height(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl DeviceConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl AppConfig {
    /// Rejects values no device could be created with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScreen`] when either screen dimension is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ScreenConfig { width, height } = self.screen;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidScreen { width, height });
        }
        Ok(())
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves the config file path from the environment.
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] when no override is set and neither
/// `XDG_CONFIG_HOME` nor `HOME` is available.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("vinput").join("config.toml"))
}

/// Loads and validates the config from [`config_file_path`].
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(config_file_path()?)
}

/// Loads and validates the config at `path`, returning defaults when the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// [`ConfigError::Parse`] if the TOML is malformed and
/// [`ConfigError::InvalidScreen`] if validation fails.
pub fn load_config_from(path: impl Into<PathBuf>) -> Result<AppConfig, ConfigError> {
    let path = path.into();
    let config = match std::fs::read_to_string(&path) {
        Ok(content) => toml::from_str::<AppConfig>(&content)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
        Err(e) => return Err(ConfigError::Io { path, source: e }),
    };
    config.validate()?;
    Ok(config)
}

/// Writes `config` to `path` as pretty TOML, creating parent directories.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(config: &AppConfig, path: impl Into<PathBuf>) -> Result<(), ConfigError> {
    let path = path.into();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io { path, source })?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
