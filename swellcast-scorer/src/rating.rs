//! The evaluation facade: score every axis, explain, optionally aggregate.

use swellcast_core::{ComponentScore, ObservationSample, SpotProfile, WeightProfile};

use crate::aggregate::{Aggregate, aggregate};
use crate::axes::axis_scorers;
use crate::reasons::reasons;

/// One observation paired with the spot it should be rated for.
#[derive(Debug, Clone, Copy)]
pub struct RatingInputs<'a> {
    /// Conditions to rate.
    pub sample: &'a ObservationSample,
    /// Spot the conditions apply to.
    pub spot: &'a SpotProfile,
}

impl<'a> RatingInputs<'a> {
    /// Pair `sample` with `spot`.
    #[must_use]
    pub const fn new(sample: &'a ObservationSample, spot: &'a SpotProfile) -> Self {
        Self { sample, spot }
    }
}

/// Per-axis scores, explanations and an optional overall rating.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RatedResult {
    /// One component per axis, in wind, direction, period, size, tide order.
    pub components: [ComponentScore; 5],
    /// Overall rating; `None` when no weight profile was supplied.
    pub aggregate: Option<Aggregate>,
    /// Human-readable explanations in axis order.
    pub reasons: Vec<String>,
}

/// Score all five axes of `inputs` with the built-in scorers.
#[must_use]
pub fn score_components(inputs: &RatingInputs<'_>) -> [ComponentScore; 5] {
    axis_scorers().map(|scorer| scorer.component(inputs.sample, inputs.spot))
}

/// Rate one observation.
///
/// Pure and infallible: out-of-range or missing readings are clamped by
/// the axis scorers. Supplying `weights` adds an [`Aggregate`]; `None`
/// leaves it absent.
///
/// # Examples
/// ```
/// use swellcast_core::{Axis, ObservationSample, WeightProfile};
/// use swellcast_core::test_support::sample_spot;
/// use swellcast_scorer::{RatingInputs, evaluate};
///
/// let spot = sample_spot();
/// let sample = ObservationSample {
///     hs: 1.5,
///     tp: 13.0,
///     dp: 215.0,
///     wind: 0.0,
///     wind_dir: 90.0,
///     tide: None,
/// };
/// let inputs = RatingInputs::new(&sample, &spot);
///
/// assert!(evaluate(&inputs, None).aggregate.is_none());
///
/// let weights = WeightProfile::new().with_weight(Axis::Wind, 1.0);
/// let rated = evaluate(&inputs, Some(&weights));
/// assert_eq!(rated.aggregate.map(|aggregate| aggregate.score), Some(10.0));
/// ```
#[must_use]
pub fn evaluate(inputs: &RatingInputs<'_>, weights: Option<&WeightProfile>) -> RatedResult {
    let components = score_components(inputs);
    let aggregate = weights.map(|profile| aggregate(&components, profile));
    let reasons = reasons(&components);
    RatedResult {
        components,
        aggregate,
        reasons,
    }
}
