//! Test utilities for forecast providers.
//!
//! [`StubForecastProvider`] is a deterministic test double for
//! [`ForecastProvider`] that returns a pre-configured response without any
//! HTTP traffic and records which spots it was asked about.

use std::sync::Mutex;

use swellcast_core::{ForecastError, ForecastProvider, ForecastSeries, SpotProfile};

/// Stub `ForecastProvider` for testing.
///
/// # Example
///
/// ```
/// use swellcast_core::{ForecastHour, ForecastProvider, ObservationSample};
/// use swellcast_core::test_support::sample_spot;
/// use swellcast_data::forecast::test_support::StubForecastProvider;
///
/// let hours = vec![ForecastHour::new("2024-06-01T06:00", ObservationSample::default())];
/// let provider = StubForecastProvider::with_series(hours.clone());
///
/// let fetched = provider.fetch_forecast(&sample_spot(), "UTC");
/// assert_eq!(fetched, Ok(hours));
/// assert_eq!(provider.requests(), [("test-beach".to_owned(), "UTC".to_owned())]);
/// ```
#[derive(Debug)]
pub struct StubForecastProvider {
    response: StubResponse,
    requests: Mutex<Vec<(String, String)>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Series(ForecastSeries),
    Error(ForecastError),
}

impl StubForecastProvider {
    /// Create a provider that returns `series` for every spot.
    ///
    /// An empty series is reported as [`ForecastError::EmptySeries`], as the
    /// real provider does.
    #[must_use]
    pub const fn with_series(series: ForecastSeries) -> Self {
        Self {
            response: StubResponse::Series(series),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider that fails every request with `error`.
    #[must_use]
    pub const fn with_error(error: ForecastError) -> Self {
        Self {
            response: StubResponse::Error(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// `(spot id, timezone)` for each request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl ForecastProvider for StubForecastProvider {
    fn fetch_forecast(
        &self,
        spot: &SpotProfile,
        timezone: &str,
    ) -> Result<ForecastSeries, ForecastError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((spot.id.clone(), timezone.to_owned()));
        }
        match &self.response {
            StubResponse::Series(series) if series.is_empty() => Err(ForecastError::EmptySeries),
            StubResponse::Series(series) => Ok(series.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
