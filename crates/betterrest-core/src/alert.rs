//! Alert presentation of calculation failures.
//!
//! Calculation failures surface as a dialog-style alert with a fixed title
//! and message; rendering it is the presentation layer's job.

use serde::Serialize;

use crate::error::CalculationError;

/// User-facing alert: fixed title plus the calculation error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    /// Title used for calculation failures.
    pub const ERROR_TITLE: &'static str = "Error";
}

impl From<&CalculationError> for Alert {
    fn from(err: &CalculationError) -> Self {
        Self {
            title: Self::ERROR_TITLE.to_string(),
            message: err.to_string(),
        }
    }
}
