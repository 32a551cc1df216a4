//! Property tests for the bedtime calculator.
//!
//! The calculator is a pure function, so these pin down its contract over
//! the whole input space the form could produce.

use chrono::{NaiveTime, Timelike};
use proptest::prelude::*;

use betterrest_core::{
    BedtimeCalculator, ClockStyle, FixedSleepModel, LinearSleepModel, ModelError, PredictionInput,
    SleepModel, SleepPrediction, SleepQuery, CALCULATION_ERROR_MESSAGE,
};

const SECS_PER_DAY: i64 = 86_400;

struct FailingModel;

impl SleepModel for FailingModel {
    fn predict(&self, _input: &PredictionInput) -> Result<SleepPrediction, ModelError> {
        Err(ModelError::NonFiniteEstimate)
    }
}

fn wake_from_minute(minute_of_day: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minute_of_day / 60, minute_of_day % 60, 0)
        .expect("minute_of_day is below 1440")
}

fn secs_of(time: NaiveTime) -> i64 {
    i64::from(time.hour() * 3600 + time.minute() * 60)
}

proptest! {
    /// When the model succeeds, the bedtime precedes the wake instant by
    /// exactly the predicted duration, modulo 24h, and is never equal to it.
    #[test]
    fn bedtime_is_strictly_earlier_by_the_prediction(
        minute_of_day in 0u32..1440,
        sleep_hours in 4.0f64..=12.0,
        coffee_cups in 1u32..=20,
    ) {
        let wake = wake_from_minute(minute_of_day);
        let query = SleepQuery::new(wake, sleep_hours, coffee_cups).unwrap();

        let model = LinearSleepModel::default();
        let predicted = model
            .predict(&PredictionInput {
                wake_secs: f64::from(query.wake_secs()),
                estimated_sleep_hours: sleep_hours,
                coffee_cups: f64::from(coffee_cups),
            })
            .unwrap()
            .actual_sleep_secs
            .round() as i64;

        let calculator = BedtimeCalculator::new(model);
        let bedtime = calculator.compute_bedtime(&query).unwrap();

        let gap = (secs_of(wake) - secs_of(bedtime.time())).rem_euclid(SECS_PER_DAY);
        prop_assert_eq!(gap, predicted);
        prop_assert_ne!(bedtime.time(), wake);
    }

    /// Pure function: identical inputs yield identical formatted results.
    #[test]
    fn compute_bedtime_is_idempotent(
        minute_of_day in 0u32..1440,
        sleep_hours in 4.0f64..=12.0,
        coffee_cups in 1u32..=20,
    ) {
        let wake = wake_from_minute(minute_of_day);
        let query = SleepQuery::new(wake, sleep_hours, coffee_cups).unwrap();
        let calculator = BedtimeCalculator::new(LinearSleepModel::default());

        let first = calculator.compute_bedtime(&query).unwrap();
        let second = calculator.compute_bedtime(&query).unwrap();
        prop_assert_eq!(
            first.format(ClockStyle::TwelveHour),
            second.format(ClockStyle::TwelveHour)
        );
        prop_assert_eq!(first.time(), second.time());
    }

    /// More coffee never moves the recommended bedtime later.
    #[test]
    fn more_coffee_never_delays_bedtime(
        minute_of_day in 0u32..1440,
        sleep_hours in 4.0f64..=12.0,
        coffee_cups in 1u32..=19,
    ) {
        let wake = wake_from_minute(minute_of_day);
        let calculator = BedtimeCalculator::new(LinearSleepModel::default());

        let fewer = calculator
            .compute_bedtime(&SleepQuery::new(wake, sleep_hours, coffee_cups).unwrap())
            .unwrap();
        let more = calculator
            .compute_bedtime(&SleepQuery::new(wake, sleep_hours, coffee_cups + 1).unwrap())
            .unwrap();

        let gap_fewer = (secs_of(wake) - secs_of(fewer.time())).rem_euclid(SECS_PER_DAY);
        let gap_more = (secs_of(wake) - secs_of(more.time())).rem_euclid(SECS_PER_DAY);
        prop_assert!(gap_more >= gap_fewer);
    }
}

#[test]
fn stub_model_scenario_wake_seven_sleep_eight() {
    // With a stub returning exactly 8h regardless of inputs, waking at
    // 07:00 puts bedtime at 23:00 the previous day.
    let calculator = BedtimeCalculator::new(FixedSleepModel::from_hours(8.0));
    let wake = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
    let query = SleepQuery::new(wake, 8.0, 1).unwrap();

    let bedtime = calculator.compute_bedtime(&query).unwrap();
    assert_eq!(bedtime.time(), NaiveTime::from_hms_opt(23, 0, 0).unwrap());
    assert_eq!(bedtime.format(ClockStyle::TwentyFourHour), "23:00");
}

#[test]
fn failing_model_yields_fixed_error_message() {
    let calculator = BedtimeCalculator::new(FailingModel);
    let wake = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
    let query = SleepQuery::new(wake, 8.0, 1).unwrap();

    let err = calculator.compute_bedtime(&query).unwrap_err();
    assert_eq!(err.to_string(), CALCULATION_ERROR_MESSAGE);
    assert_eq!(
        err.to_string(),
        "Sorry, an unexpected error occurred when calculating your bedtime"
    );
}
