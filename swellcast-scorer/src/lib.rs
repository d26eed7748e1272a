//! Surf-quality rating for Swellcast.
//!
//! The crate turns one [`ObservationSample`](swellcast_core::ObservationSample)
//! and a [`SpotProfile`](swellcast_core::SpotProfile) into five per-axis
//! scores, a list of short reasons and, when a
//! [`WeightProfile`](swellcast_core::WeightProfile) is supplied, a `0..=10`
//! aggregate computed as a weighted geometric mean.
//!
//! Evaluation is pure and infallible. Missing or out-of-range readings are
//! clamped rather than reported, so callers only deal with errors at the data
//! layer.
//!
//! # Examples
//!
//! ```
//! use swellcast_core::{Axis, ForecastHour, ObservationSample, WeightProfile};
//! use swellcast_core::test_support::sample_spot;
//! use swellcast_scorer::rate_forecast;
//!
//! let spot = sample_spot();
//! let hours = [ForecastHour::new(
//!     "2024-06-01T06:00",
//!     ObservationSample { hs: 1.2, tp: 11.0, dp: 220.0, wind: 2.0, wind_dir: 80.0, tide: None },
//! )];
//! let weights = WeightProfile::new()
//!     .with_weight(Axis::Wind, 1.0)
//!     .with_weight(Axis::Dir, 1.0);
//! let rated = rate_forecast(&spot, &hours, Some(&weights));
//! assert_eq!(rated.len(), 1);
//! assert!(rated[0].result.aggregate.is_some());
//! ```

#![forbid(unsafe_code)]

mod aggregate;
mod axes;
pub mod legacy;
mod rating;
pub mod reasons;
mod series;
pub mod tuning;

pub use aggregate::{Aggregate, AggregateMethod, aggregate};
pub use axes::{
    DirectionScorer, PeriodScorer, SizeScorer, TideScorer, WindScorer, axis_scorers,
    direction_quality, period_quality, size_quality, tide_quality, wind_quality,
};
pub use legacy::{
    LEGACY_WEIGHTS, LegacyComponents, LegacyRatedHour, LegacyRating, legacy_weight_profile,
    score_forecast, score_forecast_series,
};
pub use rating::{RatedResult, RatingInputs, evaluate, score_components};
pub use reasons::reasons;
pub use series::{RatedHour, rate_forecast};

#[cfg(test)]
mod tests;
