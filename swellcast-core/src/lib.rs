//! Core domain types for the Swellcast rating engine.
//!
//! The crate holds the vocabulary shared by every other workspace member:
//! static [`SpotProfile`] configuration, hourly [`ObservationSample`] values,
//! the closed set of rating [`Axis`] identifiers and the [`WeightProfile`]
//! used to combine them. It also defines the seams collaborators plug into:
//! [`AxisScorer`] for per-axis quality functions, [`ForecastProvider`] for
//! fetching observations and [`TimezoneResolver`] for coordinate lookups.
//!
//! Constructors for configuration types return `Result` so malformed spot
//! definitions are rejected before they reach the engine. Scoring itself is
//! infallible.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod axis;
pub mod forecast;
pub mod geometry;
pub mod observation;
pub mod scorer;
pub mod spot;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod timezone;
pub mod weights;

pub use axis::{Axis, UnknownAxisError};
pub use forecast::{ForecastError, ForecastProvider, ForecastSeries};
pub use geometry::{angular_distance, is_in_circular_window, normalise_bearing, window_centre};
pub use observation::{ForecastHour, ObservationSample};
pub use scorer::{AxisScorer, ComponentScore, sanitise_score};
pub use spot::{
    BreakType, DEFAULT_IDEAL_PERIOD_S, DEFAULT_MIN_PERIOD_S, PeriodShape, SpotProfile,
    SpotProfileError, SwellWindow, TideWindow, UnknownBreakTypeError,
};
pub use timezone::{FixedTimezone, TimezoneError, TimezoneResolver, UTC, timezone_or_utc};
pub use weights::WeightProfile;
