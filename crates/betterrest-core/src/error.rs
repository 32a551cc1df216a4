//! Core error types for betterrest-core.
//!
//! This module defines the error hierarchy using thiserror. A bedtime
//! calculation can only surface a single user-facing error kind,
//! [`CalculationError`]; everything else stays internal to the library.

use std::path::PathBuf;
use thiserror::Error;

/// The fixed message shown to the user when a bedtime calculation fails.
pub const CALCULATION_ERROR_MESSAGE: &str =
    "Sorry, an unexpected error occurred when calculating your bedtime";

/// Core error type for betterrest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Bedtime calculation failed
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Model-related errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of a bedtime calculation.
///
/// `Display` is always [`CALCULATION_ERROR_MESSAGE`]; the underlying model
/// failure is kept as the source for diagnostics. The caller is expected to
/// present this as an alert, not to discriminate sub-kinds.
#[derive(Error, Debug)]
#[error("{}", CALCULATION_ERROR_MESSAGE)]
pub struct CalculationError {
    #[source]
    source: ModelError,
}

impl CalculationError {
    /// The model failure that caused the calculation to fail.
    pub fn model_error(&self) -> &ModelError {
        &self.source
    }
}

impl From<ModelError> for CalculationError {
    fn from(source: ModelError) -> Self {
        Self { source }
    }
}

/// Prediction model failures.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A model input was NaN or infinite
    #[error("non-finite model input: {name} = {value}")]
    NonFiniteInput { name: &'static str, value: f64 },

    /// The model produced a NaN or infinite estimate
    #[error("model produced a non-finite sleep estimate")]
    NonFiniteEstimate,

    /// The estimate does not fit inside a day
    #[error("model estimate out of range: {secs} seconds")]
    EstimateOutOfRange { secs: f64 },

    /// Coefficients file could not be read or parsed
    #[error("failed to load model coefficients from {path}: {message}")]
    CoefficientsLoadFailed { path: PathBuf, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Value outside its allowed range
    #[error("Invalid value for '{field}': {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Unparseable time of day
    #[error("Invalid time '{input}': expected HH:MM")]
    InvalidTime { input: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_error_displays_fixed_message() {
        let err = CalculationError::from(ModelError::NonFiniteEstimate);
        assert_eq!(err.to_string(), CALCULATION_ERROR_MESSAGE);
    }

    #[test]
    fn calculation_error_keeps_model_source() {
        let err = CalculationError::from(ModelError::NonFiniteEstimate);
        assert!(matches!(err.model_error(), ModelError::NonFiniteEstimate));
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }

    #[test]
    fn core_error_wraps_calculation_transparently() {
        let err = CoreError::from(CalculationError::from(ModelError::NonFiniteEstimate));
        assert_eq!(err.to_string(), CALCULATION_ERROR_MESSAGE);
    }
}
