//! Bundled linear regression model.
//!
//! Actual sleep need is modeled as a linear function of wake time, desired
//! sleep, and coffee intake. Coefficients are serde types so a retrained
//! model can be dropped in from a TOML file without code changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{PredictionInput, SleepModel, SleepPrediction};
use crate::error::ModelError;

const SECS_PER_HOUR: f64 = 3600.0;
const SECS_PER_DAY: f64 = 86_400.0;

/// Coefficients of the linear sleep model.
///
/// `actual_sleep_secs = intercept + wake_weight * wake_secs
///     + sleep_weight * desired_sleep_secs + coffee_weight * cups`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelCoefficients {
    /// Base sleep need in seconds.
    #[serde(default = "default_intercept")]
    pub intercept: f64,
    /// Adjustment per second of wake-time-of-day. Negative: later risers
    /// need slightly less sleep.
    #[serde(default = "default_wake_weight")]
    pub wake_weight: f64,
    /// Weight on the desired sleep duration (seconds per second).
    #[serde(default = "default_sleep_weight")]
    pub sleep_weight: f64,
    /// Extra seconds of sleep needed per daily cup of coffee.
    #[serde(default = "default_coffee_weight")]
    pub coffee_weight: f64,
}

fn default_intercept() -> f64 {
    900.0
}
fn default_wake_weight() -> f64 {
    -0.005
}
fn default_sleep_weight() -> f64 {
    0.97
}
fn default_coffee_weight() -> f64 {
    480.0
}

impl Default for ModelCoefficients {
    fn default() -> Self {
        Self {
            intercept: default_intercept(),
            wake_weight: default_wake_weight(),
            sleep_weight: default_sleep_weight(),
            coffee_weight: default_coffee_weight(),
        }
    }
}

/// Linear regression sleep model.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSleepModel {
    coefficients: ModelCoefficients,
}

impl LinearSleepModel {
    /// Model with the given coefficients.
    pub fn new(coefficients: ModelCoefficients) -> Self {
        Self { coefficients }
    }

    /// Load coefficients from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CoefficientsLoadFailed`] if the file cannot be
    /// read or parsed.
    pub fn from_toml_file(path: &Path) -> Result<Self, ModelError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ModelError::CoefficientsLoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let coefficients: ModelCoefficients =
            toml::from_str(&content).map_err(|e| ModelError::CoefficientsLoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::debug!(path = %path.display(), "loaded model coefficients");
        Ok(Self::new(coefficients))
    }

    pub fn coefficients(&self) -> &ModelCoefficients {
        &self.coefficients
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::NonFiniteInput { name, value })
    }
}

impl SleepModel for LinearSleepModel {
    fn predict(&self, input: &PredictionInput) -> Result<SleepPrediction, ModelError> {
        let wake = require_finite("wake_secs", input.wake_secs)?;
        let sleep_hours = require_finite("estimated_sleep_hours", input.estimated_sleep_hours)?;
        let coffee = require_finite("coffee_cups", input.coffee_cups)?;

        let c = &self.coefficients;
        let estimate = c.intercept
            + c.wake_weight * wake
            + c.sleep_weight * sleep_hours * SECS_PER_HOUR
            + c.coffee_weight * coffee;

        if !estimate.is_finite() {
            return Err(ModelError::NonFiniteEstimate);
        }
        // An estimate of zero or a full day has no meaningful bedtime.
        if estimate <= 0.0 || estimate >= SECS_PER_DAY {
            return Err(ModelError::EstimateOutOfRange { secs: estimate });
        }

        Ok(SleepPrediction {
            actual_sleep_secs: estimate,
        })
    }
}
