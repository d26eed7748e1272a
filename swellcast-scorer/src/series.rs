//! Rating whole forecast series.

use swellcast_core::{ForecastHour, ObservationSample, SpotProfile, WeightProfile};

use crate::rating::{RatedResult, RatingInputs, evaluate};

/// A forecast hour with its rating.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RatedHour {
    /// Local timestamp reported by the forecast provider.
    pub time: String,
    /// Conditions for the hour.
    pub sample: ObservationSample,
    /// Rating for the hour.
    #[serde(flatten)]
    pub result: RatedResult,
}

/// Rate every hour of a forecast for `spot`, preserving order.
#[must_use]
pub fn rate_forecast(
    spot: &SpotProfile,
    hours: &[ForecastHour],
    weights: Option<&WeightProfile>,
) -> Vec<RatedHour> {
    log::debug!("rating {} forecast hours for spot {}", hours.len(), spot.id);
    hours
        .iter()
        .map(|hour| RatedHour {
            time: hour.time.clone(),
            sample: hour.sample,
            result: evaluate(&RatingInputs::new(&hour.sample, spot), weights),
        })
        .collect()
}
