//! TOML-based application configuration.
//!
//! Stores the form defaults and display preferences:
//! - Default wake time, desired sleep, and coffee intake
//! - Clock style (12h or 24h)
//! - Optional model coefficients file
//!
//! Configuration is stored at `~/.config/betterrest/config.toml`.

use std::path::PathBuf;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::calculator::{parse_wake_time, ClockStyle, COFFEE_CUPS_RANGE, SLEEP_HOURS_RANGE};
use crate::error::{ConfigError, ModelError};
use crate::model::LinearSleepModel;

/// Form defaults: the values a fresh calculation starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default wake time, `HH:MM`.
    #[serde(default = "default_wake")]
    pub wake: String,
    #[serde(default = "default_sleep_hours")]
    pub sleep_hours: f64,
    #[serde(default = "default_coffee_cups")]
    pub coffee_cups: u32,
}

/// Display configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub clock: ClockStyle,
}

/// Prediction model configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to a TOML coefficients file overriding the bundled model.
    #[serde(default)]
    pub coefficients_path: Option<PathBuf>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/betterrest/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

// Default functions
fn default_wake() -> String {
    "07:00".to_string()
}
fn default_sleep_hours() -> f64 {
    8.0
}
fn default_coffee_cups() -> u32 {
    1
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            wake: default_wake(),
            sleep_hours: default_sleep_hours(),
            coffee_cups: default_coffee_cups(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/betterrest"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// The configured default wake time.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value does not parse as `HH:MM`.
    pub fn wake_time(&self) -> Result<NaiveTime, ConfigError> {
        parse_wake_time(&self.defaults.wake).map_err(|e| ConfigError::InvalidValue {
            key: "defaults.wake".to_string(),
            message: e.to_string(),
        })
    }

    /// The active sleep model: coefficients file if configured, bundled
    /// defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured coefficients file cannot be loaded.
    pub fn load_model(&self) -> Result<LinearSleepModel, ModelError> {
        match &self.model.coefficients_path {
            Some(path) => LinearSleepModel::from_toml_file(path),
            None => Ok(LinearSleepModel::default()),
        }
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "defaults.wake" => Some(self.defaults.wake.clone()),
            "defaults.sleep_hours" => Some(self.defaults.sleep_hours.to_string()),
            "defaults.coffee_cups" => Some(self.defaults.coffee_cups.to_string()),
            "display.clock" => Some(
                match self.display.clock {
                    ClockStyle::TwelveHour => "12h",
                    ClockStyle::TwentyFourHour => "24h",
                }
                .to_string(),
            ),
            "model.coefficients_path" => self
                .model
                .coefficients_path
                .as_ref()
                .map(|p| p.display().to_string()),
            _ => None,
        }
    }

    /// Set a config value by key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// or is out of range, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "defaults.wake" => {
                let parsed = parse_wake_time(value).map_err(|e| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
                self.defaults.wake = parsed.format("%H:%M").to_string();
            }
            "defaults.sleep_hours" => {
                let hours: f64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("cannot parse '{value}' as a number"),
                })?;
                let (min, max) = SLEEP_HOURS_RANGE;
                if !hours.is_finite() || hours < min || hours > max {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("{value} is outside {min}..={max}"),
                    });
                }
                self.defaults.sleep_hours = hours;
            }
            "defaults.coffee_cups" => {
                let cups: u32 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("cannot parse '{value}' as a count"),
                })?;
                let (min, max) = COFFEE_CUPS_RANGE;
                if cups < min || cups > max {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("{value} is outside {min}..={max}"),
                    });
                }
                self.defaults.coffee_cups = cups;
            }
            "display.clock" => {
                self.display.clock = match value {
                    "12h" => ClockStyle::TwelveHour,
                    "24h" => ClockStyle::TwentyFourHour,
                    _ => {
                        return Err(ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: format!("expected '12h' or '24h', got '{value}'"),
                        })
                    }
                };
            }
            "model.coefficients_path" => {
                self.model.coefficients_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }
}
