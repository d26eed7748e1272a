//! Coordinate to timezone lookup via Open-Meteo.
//!
//! Asking the weather API for `timezone=auto` returns the IANA zone covering
//! the requested coordinate, so no separate geocoding service is needed.

use std::time::Duration;

use geo::Coord;
use swellcast_core::{TimezoneError, TimezoneResolver};
use url::Url;

use crate::forecast::openmeteo::TimezoneResponse;
use crate::forecast::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_WEATHER_BASE_URL};
use crate::http::{HttpBridge, ProviderBuildError, endpoint};

const TIMEZONE_PATH: &str = "v1/forecast";

/// Configuration for [`HttpTimezoneResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTimezoneResolverConfig {
    /// Base URL for the weather API.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpTimezoneResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpTimezoneResolverConfig {
    /// Create a configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
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

/// Timezone resolver backed by Open-Meteo's `timezone=auto` lookup.
///
/// Pair with [`swellcast_core::timezone_or_utc`] to fall back to UTC when
/// the lookup fails.
#[derive(Debug)]
pub struct HttpTimezoneResolver {
    bridge: HttpBridge,
    endpoint: Url,
}

impl HttpTimezoneResolver {
    /// Create a resolver with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new() -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpTimezoneResolverConfig::default())
    }

    /// Create a resolver with explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the base URL does not parse or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: HttpTimezoneResolverConfig) -> Result<Self, ProviderBuildError> {
        let endpoint = endpoint(&config.base_url, TIMEZONE_PATH)?;
        let bridge = HttpBridge::new(&config.user_agent, config.timeout)?;
        Ok(Self { bridge, endpoint })
    }

    fn build_url(&self, location: Coord<f64>) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &location.y.to_string())
            .append_pair("longitude", &location.x.to_string())
            .append_pair("timezone", "auto")
            .append_pair("forecast_days", "1");
        url
    }
}

impl TimezoneResolver for HttpTimezoneResolver {
    fn timezone_for(&self, location: Coord<f64>) -> Result<String, TimezoneError> {
        let url = self.build_url(location);
        let response = self
            .bridge
            .block_on(self.bridge.get_json::<TimezoneResponse>(&url))
            .map_err(|err| TimezoneError::Lookup {
                message: err.to_string(),
            })?;
        match response.timezone {
            Some(zone) if !zone.trim().is_empty() => Ok(zone),
            _ => Err(TimezoneError::Blank),
        }
    }
}
