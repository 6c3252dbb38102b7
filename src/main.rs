// SPDX-License-Identifier: GPL-3.0-only

use camera_exposure::Config;
use camera_exposure::exposure::ExposureParameter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "camera-exposure")]
#[command(about = "Manual exposure calculator and controls for camera capture")]
#[command(version = env!("GIT_VERSION"))]
#[command(subcommand_required = false)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the manual controls panel in the terminal
    Terminal,

    /// Compute the exposure value for a setting
    Ev {
        /// ISO sensitivity
        #[arg(short, long, default_value = "100")]
        iso: f64,

        /// Shutter speed in seconds or as a fraction (e.g. 0.01 or 1/100)
        #[arg(short, long, default_value = "1/100", value_parser = cli::parse_shutter)]
        shutter: f64,

        /// Aperture f-number
        #[arg(short, long, default_value = "1.8")]
        aperture: f64,
    },

    /// Show which parameter to adjust after changing one
    Suggest {
        /// Changed parameter (iso, shutter or aperture)
        parameter: ExposureParameter,
    },

    /// Format a shutter speed for display
    Shutter {
        /// Shutter speed in seconds or as a fraction
        #[arg(value_parser = cli::parse_shutter)]
        seconds: f64,
    },

    /// Print the default exposure setting as JSON
    Defaults,

    /// Print the configured exposure bounds as JSON
    Bounds,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=camera_exposure=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Ev {
            iso,
            shutter,
            aperture,
        }) => cli::print_ev(iso, shutter, aperture),
        Some(Commands::Suggest { parameter }) => cli::print_suggestion(parameter),
        Some(Commands::Shutter { seconds }) => cli::print_shutter(seconds),
        Some(Commands::Defaults) => cli::print_defaults(),
        Some(Commands::Bounds) => cli::print_bounds(&load_config(cli.config)?),
        Some(Commands::Terminal) | None => {
            camera_exposure::terminal::run(&load_config(cli.config)?)
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    Ok(config)
}
