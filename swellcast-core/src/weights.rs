//! Weight profiles: per-axis importance used when aggregating a rating.
//!
//! A profile is a partial mapping from [`Axis`] to a weight. Missing axes
//! count as zero. Values are stored as given; the aggregator floors negative
//! and non-finite weights to zero before normalising, so a profile never
//! needs validating up front.

use std::collections::BTreeMap;

use crate::Axis;

/// Per-axis weights for the aggregate rating.
///
/// Passing no profile at all disables aggregation; an empty profile still
/// aggregates.
///
/// # Examples
/// ```
/// use swellcast_core::{Axis, WeightProfile};
///
/// let profile = WeightProfile::new()
///     .with_weight(Axis::Wind, 0.5)
///     .with_weight(Axis::Dir, 0.3);
/// assert_eq!(profile.weight(Axis::Wind), Some(0.5));
/// assert_eq!(profile.weight_or_zero(Axis::Tide), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeightProfile {
    weights: BTreeMap<Axis, f64>,
}

impl WeightProfile {
    /// Construct an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the weight configured for an axis, if any.
    #[must_use]
    pub fn weight(&self, axis: Axis) -> Option<f64> {
        self.weights.get(&axis).copied()
    }

    /// Return the configured weight, treating a missing axis as zero.
    #[must_use]
    pub fn weight_or_zero(&self, axis: Axis) -> f64 {
        self.weight(axis).unwrap_or(0.0)
    }

    /// Insert or replace the weight for an axis.
    pub fn set_weight(&mut self, axis: Axis, weight: f64) {
        self.weights.insert(axis, weight);
    }

    /// Add a weight while returning `self` for chaining.
    #[must_use]
    pub fn with_weight(mut self, axis: Axis, weight: f64) -> Self {
        self.set_weight(axis, weight);
        self
    }

    /// Report whether no axis has been given a weight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over configured weights in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        self.weights.iter().map(|(&axis, &weight)| (axis, weight))
    }
}

impl FromIterator<(Axis, f64)> for WeightProfile {
    fn from_iter<I: IntoIterator<Item = (Axis, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
