//! Command-line interface for the Swellcast rating engine.
//!
//! `swellcast rate` rates the upcoming hours at one spot, either from the
//! Open-Meteo forecast or from a local observations file, and prints JSON.
//! `swellcast spots` lists the catalogue. Options layer CLI flags over
//! `SWELLCAST_*` environment variables over configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rate;
mod spots;
mod weights;

pub use error::CliError;
pub use weights::WeightsError;

use rate::{RateArgs, run_rate};
use spots::{SpotsArgs, run_spots};

pub(crate) const ARG_SPOT_ID: &str = "spot-id";
pub(crate) const ARG_SPOTS: &str = "spots";
pub(crate) const ARG_WEIGHTS: &str = "weights";
pub(crate) const ARG_LEGACY: &str = "legacy";
pub(crate) const ARG_OBSERVATIONS: &str = "observations";
pub(crate) const ARG_TIMEZONE: &str = "timezone";
pub(crate) const ARG_MARINE_BASE_URL: &str = "marine-base-url";
pub(crate) const ARG_WEATHER_BASE_URL: &str = "weather-base-url";
pub(crate) const ARG_FORECAST_DAYS: &str = "forecast-days";
pub(crate) const ENV_SPOT_ID: &str = "SWELLCAST_CMDS_RATE_SPOT_ID";

/// Catalogue consulted when `--spots` is not configured.
pub const DEFAULT_SPOTS_PATH: &str = "spots.json";

/// Run the Swellcast CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, inputs
/// cannot be read, the upstream forecast fails or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rate(args) => run_rate(args),
        Command::Spots(args) => run_spots(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "swellcast",
    about = "Rate surf conditions at configured spots",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rate the forecast hours for one spot.
    Rate(RateArgs),
    /// List the spots in the catalogue.
    Spots(SpotsArgs),
}

#[cfg(test)]
mod tests;
