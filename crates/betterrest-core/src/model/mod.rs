//! Sleep prediction model abstraction.
//!
//! Prediction sits behind the [`SleepModel`] trait so the calculator can be
//! exercised with deterministic stubs. [`LinearSleepModel`] is the bundled
//! implementation.

mod linear;

pub use linear::{LinearSleepModel, ModelCoefficients};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Inputs to a sleep prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Wake time as seconds since midnight.
    pub wake_secs: f64,
    /// Desired sleep duration in hours.
    pub estimated_sleep_hours: f64,
    /// Daily coffee intake in cups.
    pub coffee_cups: f64,
}

/// A model's estimate of the sleep the user will actually need.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepPrediction {
    /// Estimated actual sleep in seconds.
    pub actual_sleep_secs: f64,
}

/// Strategy seam for sleep prediction.
///
/// Implementations must be pure: identical inputs yield identical
/// predictions.
pub trait SleepModel {
    /// Predict the actual sleep needed for the given inputs.
    fn predict(&self, input: &PredictionInput) -> Result<SleepPrediction, ModelError>;
}

/// Deterministic model that ignores its inputs and always returns the
/// configured duration. Useful for tests and for `model check`.
#[derive(Debug, Clone, Copy)]
pub struct FixedSleepModel {
    /// The duration returned by every prediction, in seconds.
    pub actual_sleep_secs: f64,
}

impl FixedSleepModel {
    /// Fixed model returning exactly `hours` of sleep.
    pub fn from_hours(hours: f64) -> Self {
        Self {
            actual_sleep_secs: hours * 3600.0,
        }
    }
}

impl SleepModel for FixedSleepModel {
    fn predict(&self, _input: &PredictionInput) -> Result<SleepPrediction, ModelError> {
        Ok(SleepPrediction {
            actual_sleep_secs: self.actual_sleep_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_model_ignores_inputs() {
        let model = FixedSleepModel::from_hours(8.0);
        let a = model
            .predict(&PredictionInput {
                wake_secs: 0.0,
                estimated_sleep_hours: 4.0,
                coffee_cups: 1.0,
            })
            .unwrap();
        let b = model
            .predict(&PredictionInput {
                wake_secs: 80_000.0,
                estimated_sleep_hours: 12.0,
                coffee_cups: 20.0,
            })
            .unwrap();
        assert_eq!(a.actual_sleep_secs, 8.0 * 3600.0);
        assert_eq!(a, b);
    }
}
