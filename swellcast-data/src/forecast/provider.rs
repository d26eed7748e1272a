//! Open-Meteo implementation of [`ForecastProvider`].
//!
//! Each fetch issues two GET requests concurrently, one to the marine
//! endpoint and one to the weather endpoint, then joins the hourly columns
//! by timestamp.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use swellcast_core::ForecastProvider;
//! use swellcast_core::test_support::sample_spot;
//! use swellcast_data::forecast::{HttpForecastProvider, HttpForecastProviderConfig};
//!
//! let config = HttpForecastProviderConfig::default()
//!     .with_forecast_days(2)
//!     .with_timeout(Duration::from_secs(10));
//! let provider = HttpForecastProvider::with_config(config)?;
//! let hours = provider.fetch_forecast(&sample_spot(), "Europe/Lisbon")?;
//! println!("{} hours", hours.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use swellcast_core::{ForecastError, ForecastProvider, ForecastSeries, SpotProfile};
use url::Url;

use super::merge::merge_hourly;
use super::openmeteo::{
    MARINE_HOURLY_VARIABLES, MarineResponse, WEATHER_HOURLY_VARIABLES, WeatherResponse,
};
use crate::http::{HttpBridge, MAX_FORECAST_DAYS, ProviderBuildError, endpoint};

/// Default Open-Meteo marine API base URL.
pub const DEFAULT_MARINE_BASE_URL: &str = "https://marine-api.open-meteo.com";

/// Default Open-Meteo weather API base URL.
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com";

/// Default user agent for Open-Meteo requests.
pub const DEFAULT_USER_AGENT: &str = "swellcast-forecast/0.1";

/// Default number of forecast days requested.
pub const DEFAULT_FORECAST_DAYS: u8 = 3;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const MARINE_PATH: &str = "v1/marine";
const WEATHER_PATH: &str = "v1/forecast";

/// Configuration for [`HttpForecastProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpForecastProviderConfig {
    /// Base URL for the marine API.
    pub marine_base_url: String,
    /// Base URL for the weather API.
    pub weather_base_url: String,
    /// Number of days to request, `1..=16`.
    pub forecast_days: u8,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpForecastProviderConfig {
    fn default() -> Self {
        Self {
            marine_base_url: DEFAULT_MARINE_BASE_URL.to_owned(),
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_owned(),
            forecast_days: DEFAULT_FORECAST_DAYS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpForecastProviderConfig {
    /// Create a configuration pointing both APIs at custom hosts.
    #[must_use]
    pub fn new(marine_base_url: impl Into<String>, weather_base_url: impl Into<String>) -> Self {
        Self {
            marine_base_url: marine_base_url.into(),
            weather_base_url: weather_base_url.into(),
            ..Default::default()
        }
    }

    /// Set the marine API base URL.
    #[must_use]
    pub fn with_marine_base_url(mut self, url: impl Into<String>) -> Self {
        self.marine_base_url = url.into();
        self
    }

    /// Set the weather API base URL.
    #[must_use]
    pub fn with_weather_base_url(mut self, url: impl Into<String>) -> Self {
        self.weather_base_url = url.into();
        self
    }

    /// Set the number of forecast days.
    #[must_use]
    pub fn with_forecast_days(mut self, days: u8) -> Self {
        self.forecast_days = days;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Forecast provider backed by the Open-Meteo marine and weather APIs.
///
/// Implements the synchronous [`ForecastProvider`] trait by blocking on
/// async requests. Outside any Tokio runtime it drives its own
/// current-thread runtime; inside a multi-threaded runtime it reuses that
/// runtime through `block_in_place`.
#[derive(Debug)]
pub struct HttpForecastProvider {
    bridge: HttpBridge,
    config: HttpForecastProviderConfig,
    marine_endpoint: Url,
    weather_endpoint: Url,
}

impl HttpForecastProvider {
    /// Create a provider with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new() -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpForecastProviderConfig::default())
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    /// Returns an error if a base URL does not parse, the forecast length is
    /// out of range, or the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpForecastProviderConfig) -> Result<Self, ProviderBuildError> {
        if !(1..=MAX_FORECAST_DAYS).contains(&config.forecast_days) {
            return Err(ProviderBuildError::InvalidForecastDays(config.forecast_days));
        }
        let marine_endpoint = endpoint(&config.marine_base_url, MARINE_PATH)?;
        let weather_endpoint = endpoint(&config.weather_base_url, WEATHER_PATH)?;
        let bridge = HttpBridge::new(&config.user_agent, config.timeout)?;
        Ok(Self {
            bridge,
            config,
            marine_endpoint,
            weather_endpoint,
        })
    }

    /// The configuration this provider was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpForecastProviderConfig {
        &self.config
    }

    fn build_url(&self, base: &Url, hourly: &str, spot: &SpotProfile, timezone: &str) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &spot.location.y.to_string())
            .append_pair("longitude", &spot.location.x.to_string())
            .append_pair("hourly", hourly)
            .append_pair("timezone", timezone)
            .append_pair("forecast_days", &self.config.forecast_days.to_string());
        url
    }

    /// Build the marine API URL for `spot`.
    fn build_marine_url(&self, spot: &SpotProfile, timezone: &str) -> Url {
        self.build_url(&self.marine_endpoint, MARINE_HOURLY_VARIABLES, spot, timezone)
    }

    /// Build the weather API URL for `spot`.
    fn build_weather_url(&self, spot: &SpotProfile, timezone: &str) -> Url {
        self.build_url(&self.weather_endpoint, WEATHER_HOURLY_VARIABLES, spot, timezone)
    }

    async fn fetch_async(
        &self,
        spot: &SpotProfile,
        timezone: &str,
    ) -> Result<ForecastSeries, ForecastError> {
        let marine_url = self.build_marine_url(spot, timezone);
        let weather_url = self.build_weather_url(spot, timezone);
        let (marine, weather) = tokio::try_join!(
            self.bridge.get_json::<MarineResponse>(&marine_url),
            self.bridge.get_json::<WeatherResponse>(&weather_url),
        )?;
        Ok(merge_hourly(&marine.hourly, &weather.hourly))
    }
}

impl ForecastProvider for HttpForecastProvider {
    fn fetch_forecast(
        &self,
        spot: &SpotProfile,
        timezone: &str,
    ) -> Result<ForecastSeries, ForecastError> {
        let series = self.bridge.block_on(self.fetch_async(spot, timezone))?;
        if series.is_empty() {
            return Err(ForecastError::EmptySeries);
        }
        log::debug!(
            "fetched {} forecast hours for spot {} in {timezone}",
            series.len(),
            spot.id
        );
        Ok(series)
    }
}
