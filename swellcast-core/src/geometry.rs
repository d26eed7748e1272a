//! Compass geometry over the `0..360` degree domain.
//!
//! Every direction check in the engine goes through these helpers. Spot
//! windows routinely straddle north, so [`is_in_circular_window`] must keep
//! the wrap branch exact.

#![expect(
    clippy::float_arithmetic,
    reason = "compass geometry is floating-point modular arithmetic"
)]

/// Degrees in a full turn.
pub const FULL_CIRCLE_DEG: f64 = 360.0;

/// Largest possible separation between two bearings.
pub const HALF_CIRCLE_DEG: f64 = 180.0;

/// Map any bearing onto `0.0..360.0`.
///
/// # Examples
/// ```
/// use swellcast_core::normalise_bearing;
///
/// assert_eq!(normalise_bearing(370.0), 10.0);
/// assert_eq!(normalise_bearing(-90.0), 270.0);
/// ```
#[must_use]
pub fn normalise_bearing(bearing: f64) -> f64 {
    bearing.rem_euclid(FULL_CIRCLE_DEG)
}

/// Shortest separation between two bearings, in `0.0..=180.0`.
///
/// # Examples
/// ```
/// use swellcast_core::angular_distance;
///
/// assert_eq!(angular_distance(350.0, 10.0), 20.0);
/// assert_eq!(angular_distance(90.0, 270.0), 180.0);
/// ```
#[must_use]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let separation = (a - b).abs() % FULL_CIRCLE_DEG;
    separation.min(FULL_CIRCLE_DEG - separation)
}

/// Report whether `bearing` lies on the clockwise arc from `min` to `max`.
///
/// All three values are normalised first. Equal bounds denote a full circle.
/// When `min > max` the window wraps through north.
///
/// # Examples
/// ```
/// use swellcast_core::is_in_circular_window;
///
/// assert!(is_in_circular_window(350.0, 340.0, 10.0));
/// assert!(is_in_circular_window(5.0, 340.0, 10.0));
/// assert!(!is_in_circular_window(180.0, 340.0, 10.0));
/// ```
#[must_use]
pub fn is_in_circular_window(bearing: f64, min: f64, max: f64) -> bool {
    let x = normalise_bearing(bearing);
    let lo = normalise_bearing(min);
    let hi = normalise_bearing(max);
    if lo == hi {
        true
    } else if lo < hi {
        x >= lo && x <= hi
    } else {
        x >= lo || x <= hi
    }
}

/// Midpoint of the clockwise arc from `min` to `max`.
///
/// Both bounds are normalised first, so the arc matches the one
/// [`is_in_circular_window`] tests against.
///
/// # Examples
/// ```
/// use swellcast_core::window_centre;
///
/// assert_eq!(window_centre(190.0, 240.0), 215.0);
/// assert_eq!(window_centre(350.0, 20.0), 5.0);
/// assert_eq!(window_centre(400.0, 0.0), 200.0);
/// ```
#[must_use]
pub fn window_centre(min: f64, max: f64) -> f64 {
    let lo = normalise_bearing(min);
    let hi = normalise_bearing(max);
    let span = (hi - lo).rem_euclid(FULL_CIRCLE_DEG);
    normalise_bearing(lo + span / 2.0)
}
