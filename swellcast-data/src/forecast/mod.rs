//! HTTP forecast provider for Open-Meteo.
//!
//! This module provides [`HttpForecastProvider`], an implementation of
//! [`swellcast_core::ForecastProvider`] that combines the Open-Meteo marine
//! and weather APIs into resolved hourly samples.
//!
//! # Architecture
//!
//! The provider requests wave, swell and sea-level columns from the marine
//! API and wind columns from the weather API, then [`merge_hourly`] joins
//! them by timestamp and applies the substitution policy (swell, then total
//! wave, then zero; wind converted from km/h to m/s).

mod merge;
pub(crate) mod openmeteo;
mod provider;

#[doc(hidden)]
pub mod test_support;

pub use merge::{KMH_PER_MS, kmh_to_ms, merge_hourly};
pub use openmeteo::{MarineHourly, WeatherHourly};
pub use provider::{
    DEFAULT_FORECAST_DAYS, DEFAULT_MARINE_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    DEFAULT_WEATHER_BASE_URL, HttpForecastProvider, HttpForecastProviderConfig,
};
