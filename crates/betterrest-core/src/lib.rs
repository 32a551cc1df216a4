//! # BetterRest Core Library
//!
//! This library provides the core logic for BetterRest, a bedtime
//! recommender: given a desired wake time, a target sleep duration, and
//! daily caffeine intake, it predicts when the user should go to bed. It
//! implements a CLI-first philosophy where all operations are available via
//! a standalone CLI binary; any GUI shell is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Calculator**: pure time-of-day arithmetic over a prediction, no
//!   calendar logic
//! - **Model**: the prediction step behind the [`SleepModel`] trait, with a
//!   bundled linear regression implementation
//! - **Storage**: TOML-based configuration for form defaults and display
//!   preferences
//!
//! ## Key Components
//!
//! - [`BedtimeCalculator`]: computes a bedtime from a [`SleepQuery`]
//! - [`LinearSleepModel`]: bundled sleep prediction model
//! - [`Config`]: application configuration management
//! - [`Alert`]: presentation mapping of calculation failures

pub mod alert;
pub mod calculator;
pub mod error;
pub mod model;
pub mod storage;

pub use alert::Alert;
pub use calculator::{
    default_wake_time, parse_wake_time, Bedtime, BedtimeCalculator, ClockStyle, SleepQuery,
    COFFEE_CUPS_RANGE, SLEEP_HOURS_RANGE,
};
pub use error::{
    CalculationError, ConfigError, CoreError, ModelError, ValidationError,
    CALCULATION_ERROR_MESSAGE,
};
pub use model::{
    FixedSleepModel, LinearSleepModel, ModelCoefficients, PredictionInput, SleepModel,
    SleepPrediction,
};
pub use storage::Config;
