//! Compatibility wrapper producing the older flat rating shape.
//!
//! Older consumers expect a single `score` plus `<axis>Score` fields. This
//! wrapper evaluates with a frozen weight profile and flattens the result.
//! It does not reproduce the older tide-gated formula numerically.

use swellcast_core::{Axis, ComponentScore, ForecastHour, SpotProfile, WeightProfile};

use crate::rating::{RatingInputs, evaluate};

/// Frozen weights used by [`score_forecast`].
pub const LEGACY_WEIGHTS: [(Axis, f64); 5] = [
    (Axis::Wind, 0.35),
    (Axis::Dir, 0.35),
    (Axis::Period, 0.2),
    (Axis::Size, 0.1),
    (Axis::Tide, 0.6),
];

/// [`LEGACY_WEIGHTS`] as a [`WeightProfile`].
#[must_use]
pub fn legacy_weight_profile() -> WeightProfile {
    LEGACY_WEIGHTS.into_iter().collect()
}

/// Component scores keyed the way older consumers read them.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyComponents {
    /// Wind score.
    pub wind_score: f64,
    /// Swell direction score.
    pub dir_score: f64,
    /// Period score.
    pub period_score: f64,
    /// Size score.
    pub size_score: f64,
    /// Tide score.
    pub tide_score: f64,
}

impl LegacyComponents {
    fn from_components(components: &[ComponentScore]) -> Self {
        components
            .iter()
            .fold(Self::default(), |mut flat, component| {
                let slot = match component.axis {
                    Axis::Wind => &mut flat.wind_score,
                    Axis::Dir => &mut flat.dir_score,
                    Axis::Period => &mut flat.period_score,
                    Axis::Size => &mut flat.size_score,
                    Axis::Tide => &mut flat.tide_score,
                };
                *slot = component.score;
                flat
            })
    }
}

/// Flat rating in the older response shape.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LegacyRating {
    /// Overall rating in `0.0..=10.0`.
    pub score: f64,
    /// Per-axis scores.
    pub components: LegacyComponents,
    /// Human-readable explanations in axis order.
    pub reasons: Vec<String>,
}

/// A forecast hour with its legacy rating.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LegacyRatedHour {
    /// Local timestamp reported by the forecast provider.
    pub time: String,
    /// Rating for the hour.
    #[serde(flatten)]
    pub rating: LegacyRating,
}

/// Rate one observation with [`LEGACY_WEIGHTS`].
///
/// # Examples
/// ```
/// use swellcast_core::ObservationSample;
/// use swellcast_core::test_support::sample_spot;
/// use swellcast_scorer::{RatingInputs, score_forecast};
///
/// let spot = sample_spot();
/// let sample = ObservationSample::default();
/// let rating = score_forecast(&RatingInputs::new(&sample, &spot));
/// assert!((0.0..=10.0).contains(&rating.score));
/// assert_eq!(rating.components.tide_score, 1.0);
/// ```
#[must_use]
pub fn score_forecast(inputs: &RatingInputs<'_>) -> LegacyRating {
    let weights = legacy_weight_profile();
    let rated = evaluate(inputs, Some(&weights));
    LegacyRating {
        score: rated.aggregate.map_or(0.0, |aggregate| aggregate.score),
        components: LegacyComponents::from_components(&rated.components),
        reasons: rated.reasons,
    }
}

/// Rate every hour of a forecast with [`score_forecast`].
#[must_use]
pub fn score_forecast_series(spot: &SpotProfile, hours: &[ForecastHour]) -> Vec<LegacyRatedHour> {
    hours
        .iter()
        .map(|hour| LegacyRatedHour {
            time: hour.time.clone(),
            rating: score_forecast(&RatingInputs::new(&hour.sample, spot)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use swellcast_core::ObservationSample;
    use swellcast_core::test_support::sample_spot;

    #[rstest]
    fn legacy_weights_are_frozen() {
        let profile = legacy_weight_profile();
        assert_eq!(profile.weight(Axis::Wind), Some(0.35));
        assert_eq!(profile.weight(Axis::Dir), Some(0.35));
        assert_eq!(profile.weight(Axis::Period), Some(0.2));
        assert_eq!(profile.weight(Axis::Size), Some(0.1));
        assert_eq!(profile.weight(Axis::Tide), Some(0.6));
    }

    #[rstest]
    fn serialises_flat_axis_keys() {
        let spot = sample_spot();
        let sample = ObservationSample::default();
        let rating = score_forecast(&RatingInputs::new(&sample, &spot));
        let json = serde_json::to_value(&rating).expect("serialise legacy rating");
        for key in ["windScore", "dirScore", "periodScore", "sizeScore", "tideScore"] {
            assert!(json["components"].get(key).is_some(), "missing {key}");
        }
        assert!(json.get("score").is_some());
    }

    #[rstest]
    fn series_keeps_timestamps() {
        let spot = sample_spot();
        let hours = [
            ForecastHour::new("2024-06-01T06:00", ObservationSample::default()),
            ForecastHour::new("2024-06-01T07:00", ObservationSample::default()),
        ];
        let rated = score_forecast_series(&spot, &hours);
        let times: Vec<_> = rated.iter().map(|hour| hour.time.as_str()).collect();
        assert_eq!(times, ["2024-06-01T06:00", "2024-06-01T07:00"]);
    }
}
