//! Facade crate for the Swellcast surf-rating engine.
//!
//! This crate re-exports the core domain types and the rating entry points,
//! and exposes the Open-Meteo data layer behind the `data` feature.
//!
//! # Examples
//!
//! ```
//! use swellcast_engine::{Axis, ObservationSample, RatingInputs, WeightProfile, evaluate};
//! use swellcast_core::test_support::sample_spot;
//!
//! let spot = sample_spot();
//! let sample = ObservationSample {
//!     hs: 1.2,
//!     tp: 11.0,
//!     dp: 220.0,
//!     wind: 2.0,
//!     wind_dir: 80.0,
//!     tide: None,
//! };
//! let weights = WeightProfile::new().with_weight(Axis::Wind, 1.0);
//! let rated = evaluate(&RatingInputs::new(&sample, &spot), Some(&weights));
//! assert!(rated.aggregate.is_some());
//! ```

#![forbid(unsafe_code)]

pub use swellcast_core::{
    Axis, AxisScorer, BreakType, ComponentScore, FixedTimezone, ForecastError, ForecastHour,
    ForecastProvider, ForecastSeries, ObservationSample, PeriodShape, SpotProfile,
    SpotProfileError, SwellWindow, TideWindow, TimezoneError, TimezoneResolver, WeightProfile,
    timezone_or_utc,
};

pub use swellcast_scorer::{
    Aggregate, AggregateMethod, LegacyRatedHour, LegacyRating, RatedHour, RatedResult,
    RatingInputs, evaluate, rate_forecast, score_forecast, score_forecast_series,
};

#[cfg(feature = "data")]
pub use swellcast_data::{
    CatalogueError, HttpForecastProvider, HttpForecastProviderConfig, HttpTimezoneResolver,
    ProviderBuildError, SpotCatalogue, SpotRecord,
};

#[cfg(feature = "test-support")]
pub use swellcast_core::test_support;
