//! Bedtime calculation command -- the bedtime form as a CLI.

use clap::Args;
use chrono::NaiveTime;
use tracing::debug;

use betterrest_core::{
    parse_wake_time, Alert, BedtimeCalculator, ClockStyle, Config, SleepQuery,
};

#[derive(Args)]
pub struct CalcArgs {
    /// Wake time as HH:MM (defaults to the configured wake time)
    #[arg(long)]
    wake: Option<String>,

    /// Desired amount of sleep in hours, 4 to 12
    #[arg(long)]
    sleep: Option<f64>,

    /// Daily coffee intake in cups, 1 to 20
    #[arg(long)]
    coffee: Option<u32>,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: CalcArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    let wake = match &args.wake {
        Some(input) => parse_wake_time(input)?,
        None => config.wake_time()?,
    };
    let sleep_hours = args.sleep.unwrap_or(config.defaults.sleep_hours);
    let coffee_cups = args.coffee.unwrap_or(config.defaults.coffee_cups);

    let query = SleepQuery::new(wake, sleep_hours, coffee_cups)?;
    debug!(
        wake_secs = query.wake_secs(),
        sleep_hours, coffee_cups, "computing bedtime"
    );

    let model = config.load_model()?;
    let calculator = BedtimeCalculator::new(model);
    let clock = config.display.clock;

    match calculator.compute_bedtime(&query) {
        Ok(bedtime) => {
            debug!(bedtime = %bedtime.time(), "prediction succeeded");
            if args.json {
                let payload = serde_json::json!({
                    "wake": wake.format("%H:%M").to_string(),
                    "sleep_hours": sleep_hours,
                    "coffee_cups": coffee_cups,
                    "bedtime": bedtime.format(clock),
                    "bedtime_24h": bedtime.format(ClockStyle::TwentyFourHour),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("Wake time:           {}", format_time(wake, clock));
                println!("Desired sleep:       {} hours", format_hours(sleep_hours));
                println!("Daily coffee intake: {}", cup_label(coffee_cups));
                println!();
                println!("Suggested bedtime:   {}", bedtime.format(clock));
            }
            Ok(())
        }
        Err(err) => {
            let alert = Alert::from(&err);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&alert)?);
            } else {
                eprintln!("{}: {}", alert.title, alert.message);
            }
            std::process::exit(1);
        }
    }
}

fn format_time(time: NaiveTime, clock: ClockStyle) -> String {
    match clock {
        ClockStyle::TwelveHour => time.format("%-I:%M %p").to_string(),
        ClockStyle::TwentyFourHour => time.format("%H:%M").to_string(),
    }
}

/// Trim trailing zeros the way the form's stepper label does: 8 -> "8",
/// 8.25 -> "8.25".
fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as i64)
    } else {
        format!("{hours}")
    }
}

fn cup_label(cups: u32) -> String {
    if cups == 1 {
        "1 cup".to_string()
    } else {
        format!("{cups} cups")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_cup_is_singular() {
        assert_eq!(cup_label(1), "1 cup");
        assert_eq!(cup_label(2), "2 cups");
        assert_eq!(cup_label(20), "20 cups");
    }

    #[test]
    fn hours_label_trims_trailing_zeros() {
        assert_eq!(format_hours(8.0), "8");
        assert_eq!(format_hours(8.25), "8.25");
        assert_eq!(format_hours(11.5), "11.5");
    }

    #[test]
    fn time_formats_follow_clock_style() {
        let t = NaiveTime::from_hms_opt(23, 5, 0).unwrap();
        assert_eq!(format_time(t, ClockStyle::TwelveHour), "11:05 PM");
        assert_eq!(format_time(t, ClockStyle::TwentyFourHour), "23:05");
    }
}
