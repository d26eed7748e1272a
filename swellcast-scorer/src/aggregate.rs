//! Weighted geometric-mean aggregation of component scores.
#![expect(
    clippy::float_arithmetic,
    reason = "aggregation is a weighted geometric mean"
)]

use swellcast_core::{Axis, ComponentScore, WeightProfile};

use crate::axes::floor_for_log;

/// Aggregation strategy reported alongside the score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateMethod {
    /// Weighted geometric mean of the floored component scores.
    #[default]
    Geometric,
}

/// A `0.0..=10.0` overall rating with the weights that produced it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Aggregate {
    /// Aggregation strategy.
    pub method: AggregateMethod,
    /// Rating in `0.0..=10.0`, rounded to one decimal place.
    pub score: f64,
    /// Normalised weight per axis. Every axis is present.
    pub weights: WeightProfile,
}

/// Effective weight for `axis`: negative, missing and non-finite weights
/// count as zero.
fn floored_weight(profile: &WeightProfile, axis: Axis) -> f64 {
    let weight = profile.weight_or_zero(axis);
    if weight.is_finite() { weight.max(0.0) } else { 0.0 }
}

fn component_score(components: &[ComponentScore], axis: Axis) -> f64 {
    components
        .iter()
        .find(|component| component.axis == axis)
        .map_or(0.0, |component| component.score)
}

/// Combine `components` into a single rating weighted by `profile`.
///
/// Weights are floored at zero and normalised to sum to one; a profile
/// whose weights sum to zero keeps every weight at zero and so rates
/// `10.0`. Scores are floored at
/// [`GEOMETRIC_EPSILON`](crate::tuning::GEOMETRIC_EPSILON) before the
/// logarithm, so one zero axis with full weight drives the rating to `0.0`.
///
/// # Examples
/// ```
/// use swellcast_core::{Axis, ComponentScore, WeightProfile};
/// use swellcast_scorer::aggregate;
///
/// let components: Vec<_> = Axis::ALL
///     .iter()
///     .map(|&axis| ComponentScore::new(axis, 0.5))
///     .collect();
/// let weights = WeightProfile::new().with_weight(Axis::Wind, 2.0).with_weight(Axis::Dir, 2.0);
/// let result = aggregate(&components, &weights);
/// assert_eq!(result.score, 5.0);
/// assert_eq!(result.weights.weight(Axis::Wind), Some(0.5));
/// assert_eq!(result.weights.weight(Axis::Tide), Some(0.0));
/// ```
#[must_use]
pub fn aggregate(components: &[ComponentScore], profile: &WeightProfile) -> Aggregate {
    let floored = Axis::ALL.map(|axis| (axis, floored_weight(profile, axis)));
    let total: f64 = floored.iter().map(|&(_, weight)| weight).sum();
    let divisor = if total > 0.0 { total } else { 1.0 };
    let normalised = floored.map(|(axis, weight)| (axis, weight / divisor));

    let log_sum: f64 = normalised
        .iter()
        .map(|&(axis, weight)| weight * floor_for_log(component_score(components, axis)).ln())
        .sum();
    let geometric = log_sum.exp();

    Aggregate {
        method: AggregateMethod::Geometric,
        score: (geometric * 100.0).round() / 10.0,
        weights: normalised.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn mixed() -> Vec<ComponentScore> {
        vec![
            ComponentScore::new(Axis::Wind, 0.0),
            ComponentScore::new(Axis::Dir, 1.0),
            ComponentScore::new(Axis::Period, 0.8),
            ComponentScore::new(Axis::Size, 0.6),
            ComponentScore::new(Axis::Tide, 1.0),
        ]
    }

    #[rstest]
    fn zero_axis_with_full_weight_floors_rating(mixed: Vec<ComponentScore>) {
        let result = aggregate(&mixed, &WeightProfile::new().with_weight(Axis::Wind, 1.0));
        assert_eq!(result.score, 0.0);
    }

    #[rstest]
    fn all_zero_weights_rate_ten(mixed: Vec<ComponentScore>) {
        let result = aggregate(&mixed, &WeightProfile::new());
        assert_eq!(result.score, 10.0);
        assert!(result.weights.iter().all(|(_, weight)| weight == 0.0));
        assert_eq!(result.weights.iter().count(), Axis::ALL.len());
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn unusable_weights_count_as_zero(mixed: Vec<ComponentScore>, #[case] bad: f64) {
        let profile = WeightProfile::new()
            .with_weight(Axis::Wind, bad)
            .with_weight(Axis::Dir, 1.0);
        let result = aggregate(&mixed, &profile);
        assert_eq!(result.weights.weight(Axis::Wind), Some(0.0));
        assert_eq!(result.weights.weight(Axis::Dir), Some(1.0));
        assert_eq!(result.score, 10.0);
    }

    #[rstest]
    fn serialises_method_as_lowercase(mixed: Vec<ComponentScore>) {
        let result = aggregate(&mixed, &WeightProfile::new().with_weight(Axis::Dir, 1.0));
        let json = serde_json::to_value(&result).expect("serialise aggregate");
        assert_eq!(json["method"], "geometric");
        assert_eq!(json["weights"]["dir"], 1.0);
    }
}
