//! Prediction model command: inspect and sanity-check the active model.

use clap::Subcommand;
use tracing::debug;

use betterrest_core::{BedtimeCalculator, Config, SleepQuery};

#[derive(Subcommand)]
pub enum ModelAction {
    /// Show the active model coefficients
    Show,
    /// Run the configured defaults through the model to verify it works
    Check,
}

pub fn run(action: ModelAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ModelAction::Show => show_model(),
        ModelAction::Check => check_model(),
    }
}

fn show_model() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let model = config.load_model()?;

    match &config.model.coefficients_path {
        Some(path) => println!("# coefficients loaded from {}", path.display()),
        None => println!("# bundled coefficients"),
    }
    print!("{}", toml::to_string_pretty(model.coefficients())?);
    Ok(())
}

fn check_model() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let model = config.load_model()?;
    debug!("model loaded, running configured defaults through it");

    let query = SleepQuery::new(
        config.wake_time()?,
        config.defaults.sleep_hours,
        config.defaults.coffee_cups,
    )?;
    let calculator = BedtimeCalculator::new(model);
    let bedtime = calculator.compute_bedtime(&query)?;

    println!("model ok");
    println!(
        "  defaults ({}, {} h, {} cups) -> bedtime {}",
        config.defaults.wake,
        config.defaults.sleep_hours,
        config.defaults.coffee_cups,
        bedtime.format(config.display.clock)
    );
    Ok(())
}
