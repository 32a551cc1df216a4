//! Bedtime calculation.
//!
//! [`BedtimeCalculator`] is a pure function of a [`SleepQuery`] and an
//! injected [`SleepModel`]: decompose the wake time into seconds since
//! midnight, ask the model for the actual sleep needed, and subtract that
//! duration from the wake instant. Arithmetic is time-of-day modulo 24h;
//! there is no calendar involved.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{CalculationError, ValidationError};
use crate::model::{PredictionInput, SleepModel};

/// Allowed range for the desired sleep duration, in hours.
pub const SLEEP_HOURS_RANGE: (f64, f64) = (4.0, 12.0);
/// Allowed range for daily coffee intake, in cups.
pub const COFFEE_CUPS_RANGE: (u32, u32) = (1, 20);

const SECS_PER_DAY: i64 = 86_400;

/// The wake time a fresh form starts from.
pub fn default_wake_time() -> NaiveTime {
    NaiveTime::from_hms_opt(7, 0, 0).unwrap_or_default()
}

/// Parse a wall-clock time entered as `HH:MM`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTime`] if the input does not parse.
pub fn parse_wake_time(input: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|_| ValidationError::InvalidTime {
        input: input.to_string(),
    })
}

/// One bedtime calculation request.
///
/// Range checks happen at construction, mirroring the form's stepper
/// limits; the calculator itself does not re-validate beyond what the
/// model rejects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SleepQuery {
    wake: NaiveTime,
    desired_sleep_hours: f64,
    coffee_cups: u32,
}

impl SleepQuery {
    /// Build a query, checking the form's input ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] if `desired_sleep_hours` is
    /// outside [4, 12] or `coffee_cups` is outside [1, 20].
    pub fn new(
        wake: NaiveTime,
        desired_sleep_hours: f64,
        coffee_cups: u32,
    ) -> Result<Self, ValidationError> {
        let (min_sleep, max_sleep) = SLEEP_HOURS_RANGE;
        if !desired_sleep_hours.is_finite()
            || desired_sleep_hours < min_sleep
            || desired_sleep_hours > max_sleep
        {
            return Err(ValidationError::OutOfRange {
                field: "desired_sleep_hours",
                value: desired_sleep_hours,
                min: min_sleep,
                max: max_sleep,
            });
        }
        let (min_cups, max_cups) = COFFEE_CUPS_RANGE;
        if coffee_cups < min_cups || coffee_cups > max_cups {
            return Err(ValidationError::OutOfRange {
                field: "coffee_cups",
                value: f64::from(coffee_cups),
                min: f64::from(min_cups),
                max: f64::from(max_cups),
            });
        }
        Ok(Self {
            wake,
            desired_sleep_hours,
            coffee_cups,
        })
    }

    pub fn wake(&self) -> NaiveTime {
        self.wake
    }

    pub fn desired_sleep_hours(&self) -> f64 {
        self.desired_sleep_hours
    }

    pub fn coffee_cups(&self) -> u32 {
        self.coffee_cups
    }

    /// Wake time as whole seconds since midnight. Seconds-of-minute are
    /// ignored: the form only ever captured hour and minute.
    pub fn wake_secs(&self) -> u32 {
        self.wake.hour() * 3600 + self.wake.minute() * 60
    }
}

/// Clock style used when formatting times for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockStyle {
    /// 12-hour clock, e.g. `11:00 PM`.
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// 24-hour clock, e.g. `23:00`.
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// A computed bedtime. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bedtime {
    time: NaiveTime,
}

impl Bedtime {
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Short time string in the given clock style.
    pub fn format(&self, clock: ClockStyle) -> String {
        match clock {
            ClockStyle::TwelveHour => self.time.format("%-I:%M %p").to_string(),
            ClockStyle::TwentyFourHour => self.time.format("%H:%M").to_string(),
        }
    }
}

/// Computes recommended bedtimes through an injected prediction model.
#[derive(Debug, Clone)]
pub struct BedtimeCalculator<M> {
    model: M,
}

impl<M: SleepModel> BedtimeCalculator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Compute the recommended bedtime for `query`.
    ///
    /// The bedtime precedes the wake instant by exactly the predicted
    /// duration, wrapping across midnight when needed.
    ///
    /// # Errors
    ///
    /// Any model failure maps to the single user-facing
    /// [`CalculationError`]; no panic crosses this boundary.
    pub fn compute_bedtime(&self, query: &SleepQuery) -> Result<Bedtime, CalculationError> {
        let input = PredictionInput {
            wake_secs: f64::from(query.wake_secs()),
            estimated_sleep_hours: query.desired_sleep_hours(),
            coffee_cups: f64::from(query.coffee_cups()),
        };
        let prediction = self.model.predict(&input).map_err(CalculationError::from)?;

        let sleep_secs = prediction.actual_sleep_secs.round() as i64;
        let bed_secs = (i64::from(query.wake_secs()) - sleep_secs).rem_euclid(SECS_PER_DAY);
        // bed_secs is in [0, 86400) after rem_euclid, so this cannot miss.
        let time = NaiveTime::from_num_seconds_from_midnight_opt(bed_secs as u32, 0)
            .unwrap_or_default();
        Ok(Bedtime { time })
    }
}
