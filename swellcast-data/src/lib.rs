//! Data access for the Swellcast rating engine.
//!
//! Responsibilities:
//! - Load and validate the spot catalogue from JSON on disk.
//! - Fetch hourly marine and wind forecasts from Open-Meteo and resolve them
//!   into [`ObservationSample`](swellcast_core::ObservationSample) values.
//! - Resolve coordinates to IANA timezones.
//!
//! Boundaries:
//! - Do not encode rating rules (those live in `swellcast-scorer`).
//! - Missing readings are substituted here, never in the engine.
//!
//! Invariants:
//! - Providers surface failures as errors; they never return zero-filled
//!   series in place of an error.
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod catalogue;
pub mod forecast;
pub mod fs;
mod http;
pub mod timezone;

pub use catalogue::{CatalogueError, SpotCatalogue, SpotRecord};
pub use forecast::{HttpForecastProvider, HttpForecastProviderConfig};
pub use http::{MAX_FORECAST_DAYS, ProviderBuildError};
pub use timezone::{HttpTimezoneResolver, HttpTimezoneResolverConfig};
