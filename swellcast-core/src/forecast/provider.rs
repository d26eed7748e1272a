//! Forecast provider trait and series alias.

use crate::{ForecastHour, SpotProfile};

use super::error::ForecastError;

/// Hourly forecast, in chronological order.
pub type ForecastSeries = Vec<ForecastHour>;

/// Fetch upcoming conditions for a spot.
///
/// Implementers resolve every sample field before returning: wave readings
/// prefer swell-specific values, then total-wave values, then zero. Only
/// tide may be left as `None`.
///
/// # Examples
///
/// ```rust
/// use swellcast_core::{
///     ForecastError, ForecastHour, ForecastProvider, ForecastSeries, ObservationSample,
///     SpotProfile,
/// };
///
/// struct FlatSpell;
///
/// impl ForecastProvider for FlatSpell {
///     fn fetch_forecast(
///         &self,
///         _spot: &SpotProfile,
///         _timezone: &str,
///     ) -> Result<ForecastSeries, ForecastError> {
///         Ok(vec![ForecastHour::new("2024-06-01T00:00", ObservationSample::default())])
///     }
/// }
/// ```
pub trait ForecastProvider: Send + Sync {
    /// Return the hourly forecast for `spot`, with timestamps local to
    /// `timezone`.
    ///
    /// # Errors
    /// Returns [`ForecastError`] when the upstream data cannot be retrieved
    /// or decoded, or holds no hours.
    fn fetch_forecast(
        &self,
        spot: &SpotProfile,
        timezone: &str,
    ) -> Result<ForecastSeries, ForecastError>;
}
