// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for exposure calculations
//!
//! This module provides command-line functionality for:
//! - Computing EV for a setting
//! - Looking up the suggested compensating parameter
//! - Formatting shutter speeds
//! - Dumping defaults and configured bounds

use camera_exposure::Config;
use camera_exposure::exposure::{
    ExposureParameter, ExposureSetting, format_aperture, format_ev, format_iso,
    format_shutter_speed, reset_to_defaults, suggest_compensating_parameter,
};

/// Parse a shutter speed given as seconds (`0.01`, `2`) or a fraction (`1/100`)
pub fn parse_shutter(input: &str) -> Result<f64, String> {
    let input = input.trim().trim_end_matches(['s', '"']);
    let seconds = match input.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator
                .trim()
                .parse()
                .map_err(|_| format!("invalid shutter numerator '{}'", numerator))?;
            let denominator: f64 = denominator
                .trim()
                .parse()
                .map_err(|_| format!("invalid shutter denominator '{}'", denominator))?;
            if denominator == 0.0 {
                return Err("shutter denominator must not be zero".to_string());
            }
            numerator / denominator
        }
        None => input
            .parse()
            .map_err(|_| format!("invalid shutter speed '{}'", input))?,
    };
    Ok(seconds)
}

/// Compute and print EV for a setting
pub fn print_ev(iso: f64, shutter: f64, aperture: f64) -> Result<(), Box<dyn std::error::Error>> {
    let setting = ExposureSetting::new(iso, shutter, aperture)?;

    println!(
        "ISO {}  {}  {}",
        format_iso(setting.iso()),
        format_shutter_speed(setting.shutter_seconds()),
        format_aperture(setting.aperture())
    );
    println!("EV {}", format_ev(setting.ev()));
    Ok(())
}

/// Print the parameter to adjust after changing `parameter`
pub fn print_suggestion(parameter: ExposureParameter) -> Result<(), Box<dyn std::error::Error>> {
    let suggested = suggest_compensating_parameter(parameter);
    println!("{} changed -> adjust {}", parameter, suggested);
    Ok(())
}

/// Print a shutter speed as shown on the controls panel
pub fn print_shutter(seconds: f64) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", format_shutter_speed(seconds));
    Ok(())
}

/// Print the default setting, including its EV, as JSON
pub fn print_defaults() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&reset_to_defaults())?);
    Ok(())
}

/// Print the configured bounds as JSON
pub fn print_bounds(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&config.exposure_bounds)?);
    Ok(())
}
