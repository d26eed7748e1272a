//! Static surf spot configuration.
//!
//! A [`SpotProfile`] describes how a break responds to conditions: which way
//! it faces, which swell directions reach it, the wave type and the tide and
//! period ranges it prefers. Profiles are loaded once and never change while
//! forecasts are being rated.

use geo::Coord;
use thiserror::Error;

use crate::geometry::{FULL_CIRCLE_DEG, is_in_circular_window, window_centre};

/// Period (seconds) at or below which swell scores zero when a spot does not
/// say otherwise.
pub const DEFAULT_MIN_PERIOD_S: f64 = 7.0;

/// Period (seconds) at which swell scores fully when a spot does not say
/// otherwise.
pub const DEFAULT_IDEAL_PERIOD_S: f64 = 13.0;

/// The kind of seabed a wave breaks over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BreakType {
    /// Sandbar beach break.
    Beach,
    /// Reef break.
    #[default]
    Reef,
    /// Point break.
    Point,
}

impl BreakType {
    /// Return the lowercase identifier used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::Reef => "reef",
            Self::Point => "point",
        }
    }
}

impl std::fmt::Display for BreakType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown break type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown break type '{name}'")]
pub struct UnknownBreakTypeError {
    /// The rejected input.
    pub name: String,
}

impl std::str::FromStr for BreakType {
    type Err = UnknownBreakTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beach" => Ok(Self::Beach),
            "reef" => Ok(Self::Reef),
            "point" => Ok(Self::Point),
            _ => Err(UnknownBreakTypeError { name: s.to_owned() }),
        }
    }
}

/// Errors returned while constructing spot configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpotProfileError {
    /// The spot identifier was empty or whitespace.
    #[error("spot id must not be empty")]
    EmptyId,
    /// A numeric field was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A bearing fell outside `0 <= x < 360`.
    #[error("{field} must be within 0..360 degrees, got {value}")]
    BearingOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The tide window's lower bound exceeded its upper bound.
    #[error("tide window minimum {min} exceeds maximum {max}")]
    InvertedTideWindow {
        /// Lower bound in metres.
        min: f64,
        /// Upper bound in metres.
        max: f64,
    },
}

fn require_finite(field: &'static str, value: f64) -> Result<f64, SpotProfileError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SpotProfileError::NonFinite { field })
    }
}

fn require_bearing(field: &'static str, value: f64) -> Result<f64, SpotProfileError> {
    let bearing = require_finite(field, value)?;
    if (0.0..FULL_CIRCLE_DEG).contains(&bearing) {
        Ok(bearing)
    } else {
        Err(SpotProfileError::BearingOutOfRange { field, value })
    }
}

/// Compass window of swell directions a spot can receive.
///
/// The window runs clockwise from `min` to `max` and may wrap through north.
/// Equal bounds accept every direction.
///
/// # Examples
/// ```
/// use swellcast_core::SwellWindow;
///
/// # fn main() -> Result<(), swellcast_core::SpotProfileError> {
/// let window = SwellWindow::new(340.0, 10.0)?;
/// assert!(window.contains(355.0));
/// assert_eq!(window.centre(), 355.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SwellWindow {
    min: f64,
    max: f64,
}

impl SwellWindow {
    /// Validate and construct a window.
    ///
    /// # Errors
    /// Returns [`SpotProfileError::BearingOutOfRange`] or
    /// [`SpotProfileError::NonFinite`] for unusable bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, SpotProfileError> {
        Ok(Self {
            min: require_bearing("swellDirMin", min)?,
            max: require_bearing("swellDirMax", max)?,
        })
    }

    /// Clockwise start of the window.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Clockwise end of the window.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Report whether a coming-from bearing falls inside the window.
    #[must_use]
    pub fn contains(&self, bearing: f64) -> bool {
        is_in_circular_window(bearing, self.min, self.max)
    }

    /// Circular midpoint of the window.
    #[must_use]
    pub fn centre(&self) -> f64 {
        window_centre(self.min, self.max)
    }
}

/// Preferred tide range in metres, on the same datum as tide observations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TideWindow {
    min: f64,
    ideal: Option<f64>,
    max: f64,
}

impl TideWindow {
    /// Validate and construct a tide window.
    ///
    /// # Errors
    /// Returns [`SpotProfileError::InvertedTideWindow`] when `min > max` and
    /// [`SpotProfileError::NonFinite`] for NaN or infinite inputs.
    pub fn new(min: f64, ideal: Option<f64>, max: f64) -> Result<Self, SpotProfileError> {
        let lower = require_finite("minTide", min)?;
        let upper = require_finite("maxTide", max)?;
        let ideal_tide = ideal
            .map(|value| require_finite("idealTide", value))
            .transpose()?;
        if lower > upper {
            return Err(SpotProfileError::InvertedTideWindow {
                min: lower,
                max: upper,
            });
        }
        Ok(Self {
            min: lower,
            ideal: ideal_tide,
            max: upper,
        })
    }

    /// Lowest acceptable tide.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Highest acceptable tide.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Explicitly configured ideal tide, if any.
    #[must_use]
    pub const fn ideal(&self) -> Option<f64> {
        self.ideal
    }

    /// Ideal tide, falling back to the window midpoint.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the midpoint is the mean of the bounds"
    )]
    pub fn ideal_or_midpoint(&self) -> f64 {
        self.ideal.unwrap_or((self.min + self.max) / 2.0)
    }

    /// Report whether a tide height lies within the inclusive bounds.
    #[must_use]
    pub fn contains(&self, tide: f64) -> bool {
        (self.min..=self.max).contains(&tide)
    }
}

/// Period range over which swell quality ramps from nothing to ideal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PeriodShape {
    min: f64,
    ideal: f64,
}

impl PeriodShape {
    /// Construct a period shape, substituting defaults for missing values.
    ///
    /// Spans that are zero or negative are accepted here; the scorer guards
    /// them.
    ///
    /// # Errors
    /// Returns [`SpotProfileError::NonFinite`] for NaN or infinite inputs.
    pub fn new(min: Option<f64>, ideal: Option<f64>) -> Result<Self, SpotProfileError> {
        Ok(Self {
            min: require_finite("minPeriod", min.unwrap_or(DEFAULT_MIN_PERIOD_S))?,
            ideal: require_finite("idealPeriod", ideal.unwrap_or(DEFAULT_IDEAL_PERIOD_S))?,
        })
    }

    /// Period at or below which swell scores zero.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Period at which swell scores fully.
    #[must_use]
    pub const fn ideal(&self) -> f64 {
        self.ideal
    }
}

impl Default for PeriodShape {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PERIOD_S,
            ideal: DEFAULT_IDEAL_PERIOD_S,
        }
    }
}

/// A named surf break and the conditions it prefers.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use swellcast_core::{BreakType, SpotProfile, SwellWindow, TideWindow};
///
/// # fn main() -> Result<(), swellcast_core::SpotProfileError> {
/// let spot = SpotProfile::new(
///     "pipeline",
///     "Banzai Pipeline",
///     Coord { x: -158.05, y: 21.66 },
///     0.0,
///     BreakType::Reef,
///     SwellWindow::new(280.0, 20.0)?,
/// )?
/// .with_tide_window(TideWindow::new(0.0, Some(0.3), 0.8)?);
/// assert_eq!(spot.offshore_bearing(), 180.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpotProfile {
    /// Unique identifier within a catalogue.
    pub id: String,
    /// Display name.
    pub name: String,
    /// WGS84 position with `x = longitude` and `y = latitude`.
    pub location: Coord<f64>,
    /// Direction the break faces, in degrees.
    pub coast_bearing: f64,
    /// Seabed type, which sets the size cap.
    pub break_type: BreakType,
    /// Acceptable incoming swell directions.
    pub swell_window: SwellWindow,
    /// Preferred tide range; `None` makes the tide axis neutral.
    pub tide_window: Option<TideWindow>,
    /// Period ramp.
    pub period_shape: PeriodShape,
}

impl SpotProfile {
    /// Validate and construct a profile without tide metadata and with the
    /// default period shape.
    ///
    /// # Errors
    /// Returns [`SpotProfileError::EmptyId`] for a blank id and
    /// [`SpotProfileError::BearingOutOfRange`] or
    /// [`SpotProfileError::NonFinite`] for an unusable coast bearing.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: Coord<f64>,
        coast_bearing: f64,
        break_type: BreakType,
        swell_window: SwellWindow,
    ) -> Result<Self, SpotProfileError> {
        let spot_id = id.into();
        if spot_id.trim().is_empty() {
            return Err(SpotProfileError::EmptyId);
        }
        require_finite("lon", location.x)?;
        require_finite("lat", location.y)?;
        Ok(Self {
            id: spot_id,
            name: name.into(),
            location,
            coast_bearing: require_bearing("coastBearing", coast_bearing)?,
            break_type,
            swell_window,
            tide_window: None,
            period_shape: PeriodShape::default(),
        })
    }

    /// Attach a tide window.
    #[must_use]
    pub fn with_tide_window(mut self, tide_window: TideWindow) -> Self {
        self.tide_window = Some(tide_window);
        self
    }

    /// Replace the period shape.
    #[must_use]
    pub fn with_period_shape(mut self, period_shape: PeriodShape) -> Self {
        self.period_shape = period_shape;
        self
    }

    /// Bearing wind must come from to blow offshore.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "offshore is the coast bearing rotated by half a turn"
    )]
    pub fn offshore_bearing(&self) -> f64 {
        (self.coast_bearing + 180.0) % FULL_CIRCLE_DEG
    }
}
