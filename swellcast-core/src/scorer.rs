//! Score one axis of an observation against a spot.
//!
//! The `AxisScorer` trait assigns a `0.0..=1.0` quality to a single
//! [`Axis`](crate::Axis) given an
//! [`ObservationSample`](crate::ObservationSample) and the
//! [`SpotProfile`](crate::SpotProfile) it was taken for.

use crate::{Axis, ObservationSample, SpotProfile};

/// Clamp and validate a raw score.
///
/// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
///
/// # Examples
/// ```
/// use swellcast_core::sanitise_score;
///
/// assert_eq!(sanitise_score(1.4), 1.0);
/// assert_eq!(sanitise_score(-0.2), 0.0);
/// assert_eq!(sanitise_score(f64::NAN), 0.0);
/// ```
#[must_use]
pub fn sanitise_score(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Calculate the quality of one physical axis.
///
/// Implementations must be pure and thread-safe (`Send + Sync`) so axes can
/// be evaluated in any order or in parallel. `raw_score` may stray outside
/// `0.0..=1.0`; [`AxisScorer::score`] applies [`sanitise_score`].
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use swellcast_core::{
///     Axis, AxisScorer, BreakType, ObservationSample, SpotProfile, SwellWindow,
/// };
///
/// struct Stoked;
///
/// impl AxisScorer for Stoked {
///     fn axis(&self) -> Axis {
///         Axis::Size
///     }
///
///     fn raw_score(&self, _sample: &ObservationSample, _spot: &SpotProfile) -> f64 {
///         2.0
///     }
/// }
///
/// # fn main() -> Result<(), swellcast_core::SpotProfileError> {
/// let spot = SpotProfile::new(
///     "spot",
///     "Spot",
///     Coord { x: 0.0, y: 0.0 },
///     270.0,
///     BreakType::Beach,
///     SwellWindow::new(190.0, 240.0)?,
/// )?;
/// assert_eq!(Stoked.score(&ObservationSample::default(), &spot), 1.0);
/// # Ok(())
/// # }
/// ```
pub trait AxisScorer: Send + Sync {
    /// The axis this scorer rates.
    fn axis(&self) -> Axis;

    /// Return an unclamped quality for `sample` at `spot`.
    fn raw_score(&self, sample: &ObservationSample, spot: &SpotProfile) -> f64;

    /// Return the sanitised quality in `0.0..=1.0`.
    fn score(&self, sample: &ObservationSample, spot: &SpotProfile) -> f64 {
        sanitise_score(self.raw_score(sample, spot))
    }

    /// Return the labelled component score.
    fn component(&self, sample: &ObservationSample, spot: &SpotProfile) -> ComponentScore {
        ComponentScore::new(self.axis(), self.raw_score(sample, spot))
    }
}

/// A labelled per-axis score in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentScore {
    /// Axis identifier.
    pub axis: Axis,
    /// Human-readable axis label.
    pub label: String,
    /// Sanitised score.
    pub score: f64,
}

impl ComponentScore {
    /// Build a component for `axis`, sanitising `score`.
    ///
    /// # Examples
    /// ```
    /// use swellcast_core::{Axis, ComponentScore};
    ///
    /// let component = ComponentScore::new(Axis::Dir, 1.7);
    /// assert_eq!(component.label, "Swell direction");
    /// assert_eq!(component.score, 1.0);
    /// ```
    #[must_use]
    pub fn new(axis: Axis, score: f64) -> Self {
        Self {
            axis,
            label: axis.label().to_owned(),
            score: sanitise_score(score),
        }
    }
}
