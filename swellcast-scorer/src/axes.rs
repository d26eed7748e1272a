//! Per-axis quality functions and their [`AxisScorer`] wrappers.
//!
//! Each free function is pure and returns a value in `0.0..=1.0`. The unit
//! structs expose the same calculations through the
//! [`AxisScorer`](swellcast_core::AxisScorer) trait so callers can iterate
//! over every axis uniformly.
#![expect(
    clippy::float_arithmetic,
    reason = "axis scoring is floating-point maths over bearings and metres"
)]

use swellcast_core::{
    Axis, AxisScorer, BreakType, ObservationSample, PeriodShape, SpotProfile, SwellWindow,
    TideWindow, angular_distance, is_in_circular_window, normalise_bearing, sanitise_score,
    window_centre,
};

use crate::tuning::{
    GEOMETRIC_EPSILON, INSIDE_WINDOW_FALLOFF_DEG, MIN_PERIOD_SPAN_S, MIN_SIZE_CAP_M,
    MIN_TIDE_HALF_RANGE_M, ONSHORE_DEAD_ZONE_DEG, OUTSIDE_WINDOW_FALLOFF_DEG,
    WIND_KILL_SPEED_MS, size_cap,
};

const HALF_CIRCLE_DEG: f64 = 180.0;

/// Rate wind for a break facing `coast_bearing`.
///
/// Dead offshore at zero speed scores `1.0`. Anything within
/// [`ONSHORE_DEAD_ZONE_DEG`] of dead onshore, or blowing at
/// [`WIND_KILL_SPEED_MS`] or more, scores `0.0`.
///
/// # Examples
/// ```
/// use swellcast_scorer::wind_quality;
///
/// // West-facing beach, calm easterly.
/// assert_eq!(wind_quality(0.0, 90.0, 270.0), 1.0);
/// // Same beach, westerly straight onshore.
/// assert_eq!(wind_quality(4.0, 270.0, 270.0), 0.0);
/// ```
#[must_use]
pub fn wind_quality(speed: f64, wind_dir: f64, coast_bearing: f64) -> f64 {
    let offshore = normalise_bearing(coast_bearing + HALF_CIRCLE_DEG);
    let off_angle = HALF_CIRCLE_DEG - angular_distance(wind_dir, offshore);
    let angle = sanitise_score(
        (off_angle - ONSHORE_DEAD_ZONE_DEG) / (HALF_CIRCLE_DEG - ONSHORE_DEAD_ZONE_DEG),
    );
    let speed_penalty = 1.0 - sanitise_score(speed / WIND_KILL_SPEED_MS);
    sanitise_score(angle * speed_penalty)
}

/// Rate swell direction against the `min..=max` window.
///
/// The score falls linearly with distance from the window centre, over
/// [`INSIDE_WINDOW_FALLOFF_DEG`] inside the window and the gentler
/// [`OUTSIDE_WINDOW_FALLOFF_DEG`] outside it.
///
/// # Examples
/// ```
/// use swellcast_scorer::direction_quality;
///
/// assert_eq!(direction_quality(215.0, 190.0, 240.0), 1.0);
/// assert!(direction_quality(30.0, 190.0, 240.0) < 0.01);
/// ```
#[must_use]
pub fn direction_quality(dp: f64, min: f64, max: f64) -> f64 {
    let centre = window_centre(min, max);
    let diff = angular_distance(dp, centre);
    let falloff = if is_in_circular_window(dp, min, max) {
        INSIDE_WINDOW_FALLOFF_DEG
    } else {
        OUTSIDE_WINDOW_FALLOFF_DEG
    };
    sanitise_score(1.0 - diff / falloff)
}

/// Rate peak period on a linear ramp from `min_period` to `ideal_period`.
///
/// The ramp span never drops below [`MIN_PERIOD_SPAN_S`].
#[must_use]
pub fn period_quality(tp: f64, min_period: f64, ideal_period: f64) -> f64 {
    let span = (ideal_period - min_period).max(MIN_PERIOD_SPAN_S);
    sanitise_score((tp - min_period) / span)
}

/// Rate significant wave height relative to the break type's size cap.
#[must_use]
pub fn size_quality(hs: f64, break_type: BreakType) -> f64 {
    sanitise_score(hs / size_cap(break_type).max(MIN_SIZE_CAP_M))
}

/// Rate tide height against an optional window.
///
/// Missing data on either side is neutral (`1.0`). Outside the window the
/// score is `0.0`; inside it follows an inverted parabola peaking at the
/// ideal height, or the window midpoint when no ideal is set.
///
/// # Examples
/// ```
/// use swellcast_core::TideWindow;
/// use swellcast_scorer::tide_quality;
///
/// # fn main() -> Result<(), swellcast_core::SpotProfileError> {
/// let window = TideWindow::new(0.5, Some(1.0), 1.5)?;
/// assert_eq!(tide_quality(None, Some(&window)), 1.0);
/// assert_eq!(tide_quality(Some(1.0), Some(&window)), 1.0);
/// assert_eq!(tide_quality(Some(2.0), Some(&window)), 0.0);
/// assert_eq!(tide_quality(Some(2.0), None), 1.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn tide_quality(tide: Option<f64>, window: Option<&TideWindow>) -> f64 {
    let (Some(height), Some(bounds)) = (tide, window) else {
        return 1.0;
    };
    if !bounds.contains(height) {
        return 0.0;
    }
    let half_range = (bounds.max() - bounds.min()) / 2.0;
    let half = if half_range > 0.0 {
        half_range
    } else {
        MIN_TIDE_HALF_RANGE_M
    };
    let t = (height - bounds.ideal_or_midpoint()) / half;
    sanitise_score(1.0 - t * t)
}

/// Floor a score at [`GEOMETRIC_EPSILON`] so its logarithm stays finite.
pub(crate) fn floor_for_log(score: f64) -> f64 {
    score.max(GEOMETRIC_EPSILON)
}

/// Scores [`Axis::Wind`] with [`wind_quality`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WindScorer;

impl AxisScorer for WindScorer {
    fn axis(&self) -> Axis {
        Axis::Wind
    }

    fn raw_score(&self, sample: &ObservationSample, spot: &SpotProfile) -> f64 {
        wind_quality(sample.wind, sample.wind_dir, spot.coast_bearing)
    }
}

/// Scores [`Axis::Dir`] with [`direction_quality`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DirectionScorer;

impl DirectionScorer {
    fn window_score(dp: f64, window: &SwellWindow) -> f64 {
        direction_quality(dp, window.min(), window.max())
    }
}

impl AxisScorer for DirectionScorer {
    fn axis(&self) -> Axis {
        Axis::Dir
    }

    fn raw_score(&self, sample: &ObservationSample, spot: &SpotProfile) -> f64 {
        Self::window_score(sample.dp, &spot.swell_window)
    }
}

/// Scores [`Axis::Period`] with [`period_quality`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PeriodScorer;

impl PeriodScorer {
    fn shape_score(tp: f64, shape: PeriodShape) -> f64 {
        period_quality(tp, shape.min(), shape.ideal())
    }
}

impl AxisScorer for PeriodScorer {
    fn axis(&self) -> Axis {
        Axis::Period
    }

    fn raw_score(&self, sample: &ObservationSample, spot: &SpotProfile) -> f64 {
        Self::shape_score(sample.tp, spot.period_shape)
    }
}

/// Scores [`Axis::Size`] with [`size_quality`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SizeScorer;

impl AxisScorer for SizeScorer {
    fn axis(&self) -> Axis {
        Axis::Size
    }

    fn raw_score(&self, sample: &ObservationSample, spot: &SpotProfile) -> f64 {
        size_quality(sample.hs, spot.break_type)
    }
}

/// Scores [`Axis::Tide`] with [`tide_quality`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TideScorer;

impl AxisScorer for TideScorer {
    fn axis(&self) -> Axis {
        Axis::Tide
    }

    fn raw_score(&self, sample: &ObservationSample, spot: &SpotProfile) -> f64 {
        tide_quality(sample.tide, spot.tide_window.as_ref())
    }
}

/// The built-in scorers, one per axis, in [`Axis::ALL`] order.
#[must_use]
pub fn axis_scorers() -> [&'static dyn AxisScorer; 5] {
    [
        &WindScorer,
        &DirectionScorer,
        &PeriodScorer,
        &SizeScorer,
        &TideScorer,
    ]
}
