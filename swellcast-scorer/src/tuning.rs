//! Named tuning constants for the axis scorers and aggregator.
//!
//! Scorer logic refers to these by name so each threshold can be tested and
//! tuned on its own.

use swellcast_core::BreakType;

/// Wind speed (m/s) at which any wind, even offshore, scores zero.
pub const WIND_KILL_SPEED_MS: f64 = 18.0;

/// Degrees either side of dead onshore that score zero for wind angle.
pub const ONSHORE_DEAD_ZONE_DEG: f64 = 30.0;

/// Direction falloff (degrees) for swell arriving inside the spot window.
pub const INSIDE_WINDOW_FALLOFF_DEG: f64 = 60.0;

/// Direction falloff (degrees) for swell arriving outside the spot window.
pub const OUTSIDE_WINDOW_FALLOFF_DEG: f64 = 120.0;

/// Wave height (m) at which a beach break scores fully for size.
pub const BEACH_SIZE_CAP_M: f64 = 2.5;

/// Wave height (m) at which a point break scores fully for size.
pub const POINT_SIZE_CAP_M: f64 = 4.0;

/// Wave height (m) at which a reef break scores fully for size.
pub const REEF_SIZE_CAP_M: f64 = 3.0;

/// Floor applied to any size cap.
pub const MIN_SIZE_CAP_M: f64 = 0.1;

/// Floor applied to the span between minimum and ideal period.
pub const MIN_PERIOD_SPAN_S: f64 = 1.0;

/// Half-range (m) used when a tide window has zero width.
pub const MIN_TIDE_HALF_RANGE_M: f64 = 0.1;

/// Floor applied to axis scores before taking logarithms.
pub const GEOMETRIC_EPSILON: f64 = 1e-6;

/// Size cap for a break type.
///
/// # Examples
/// ```
/// use swellcast_core::BreakType;
/// use swellcast_scorer::tuning::size_cap;
///
/// assert_eq!(size_cap(BreakType::Beach), 2.5);
/// assert_eq!(size_cap(BreakType::default()), 3.0);
/// ```
#[must_use]
pub const fn size_cap(break_type: BreakType) -> f64 {
    match break_type {
        BreakType::Beach => BEACH_SIZE_CAP_M,
        BreakType::Point => POINT_SIZE_CAP_M,
        BreakType::Reef => REEF_SIZE_CAP_M,
    }
}
