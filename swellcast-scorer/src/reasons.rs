//! Short human-readable explanations derived from component scores.

use swellcast_core::{Axis, ComponentScore};

/// Wind score at or above which conditions read as offshore or light.
pub const GOOD_WIND_SCORE: f64 = 0.6;
/// Direction score at or above which the swell reads as favourable.
pub const GOOD_DIRECTION_SCORE: f64 = 0.6;
/// Period score at or above which the period reads as good.
pub const GOOD_PERIOD_SCORE: f64 = 0.6;
/// Size score at or above which the surf reads as solid.
pub const SOLID_SIZE_SCORE: f64 = 0.8;
/// Score at or below which wind, period and size read as poor.
pub const POOR_SCORE: f64 = 0.2;

/// Reason emitted for a good wind score.
pub const OFFSHORE_OR_LIGHT_WINDS: &str = "offshore or light winds";
/// Reason emitted for a poor wind score.
pub const ONSHORE_OR_STRONG_WINDS: &str = "onshore/strong winds";
/// Reason emitted for a good direction score.
pub const FAVOURABLE_SWELL_DIRECTION: &str = "favourable swell direction";
/// Reason emitted for any other direction score.
pub const SUBOPTIMAL_SWELL_DIRECTION: &str = "suboptimal swell direction";
/// Reason emitted for a good period score.
pub const GOOD_PERIOD: &str = "good period";
/// Reason emitted for a poor period score.
pub const SHORT_OR_WEAK_PERIOD: &str = "short/weak period";
/// Reason emitted for a high size score.
pub const SOLID_SIZE: &str = "solid size";
/// Reason emitted for a low size score.
pub const SMALL_SURF: &str = "small surf";
/// Reason emitted when the tide sits outside the spot's window.
pub const TIDE_OUT_OF_WINDOW: &str = "tide out of window";

fn banded(
    score: f64,
    good: f64,
    good_reason: &'static str,
    poor_reason: &'static str,
) -> Option<&'static str> {
    if score >= good {
        Some(good_reason)
    } else if score <= POOR_SCORE {
        Some(poor_reason)
    } else {
        None
    }
}

fn reason_for(axis: Axis, score: f64) -> Option<&'static str> {
    match axis {
        Axis::Wind => banded(
            score,
            GOOD_WIND_SCORE,
            OFFSHORE_OR_LIGHT_WINDS,
            ONSHORE_OR_STRONG_WINDS,
        ),
        Axis::Dir => Some(if score >= GOOD_DIRECTION_SCORE {
            FAVOURABLE_SWELL_DIRECTION
        } else {
            SUBOPTIMAL_SWELL_DIRECTION
        }),
        Axis::Period => banded(score, GOOD_PERIOD_SCORE, GOOD_PERIOD, SHORT_OR_WEAK_PERIOD),
        Axis::Size => banded(score, SOLID_SIZE_SCORE, SOLID_SIZE, SMALL_SURF),
        Axis::Tide => (score <= 0.0).then_some(TIDE_OUT_OF_WINDOW),
    }
}

/// Explain `components` in wind, direction, period, size, tide order.
///
/// Exactly one direction reason is always present; the other axes only
/// contribute when they fall in a notable band.
///
/// # Examples
/// ```
/// use swellcast_core::{Axis, ComponentScore};
/// use swellcast_scorer::reasons;
///
/// let components = [
///     ComponentScore::new(Axis::Wind, 0.9),
///     ComponentScore::new(Axis::Dir, 0.3),
///     ComponentScore::new(Axis::Period, 0.5),
///     ComponentScore::new(Axis::Size, 0.1),
///     ComponentScore::new(Axis::Tide, 1.0),
/// ];
/// assert_eq!(
///     reasons(&components),
///     ["offshore or light winds", "suboptimal swell direction", "small surf"],
/// );
/// ```
#[must_use]
pub fn reasons(components: &[ComponentScore]) -> Vec<String> {
    Axis::ALL
        .iter()
        .filter_map(|&axis| {
            components
                .iter()
                .find(|component| component.axis == axis)
                .and_then(|component| reason_for(axis, component.score))
        })
        .map(str::to_owned)
        .collect()
}
