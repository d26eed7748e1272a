//! Rating axes: the five physical dimensions a surf forecast is judged on.
//!
//! The set is closed. Downstream consumers key off the lowercase identifiers
//! returned by [`Axis::as_str`], so they must never change.
//!
//! # Examples
//! ```
//! use swellcast_core::Axis;
//!
//! assert_eq!(Axis::Dir.as_str(), "dir");
//! assert_eq!(Axis::Dir.to_string(), "dir");
//! assert_eq!("Tide".parse::<Axis>(), Ok(Axis::Tide));
//! ```

use thiserror::Error;

/// One of the five rated dimensions.
///
/// Variants are declared in evaluation order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Wind speed and direction relative to the coastline.
    Wind,
    /// Incoming swell direction relative to the spot's window.
    Dir,
    /// Swell period.
    Period,
    /// Wave height.
    Size,
    /// Tide height relative to the spot's preferred window.
    Tide,
}

impl Axis {
    /// Every axis, in evaluation order.
    pub const ALL: [Self; 5] = [Self::Wind, Self::Dir, Self::Period, Self::Size, Self::Tide];

    /// Return the stable lowercase identifier.
    ///
    /// # Examples
    /// ```
    /// use swellcast_core::Axis;
    ///
    /// assert_eq!(Axis::Period.as_str(), "period");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wind => "wind",
            Self::Dir => "dir",
            Self::Period => "period",
            Self::Size => "size",
            Self::Tide => "tide",
        }
    }

    /// Return the human-readable label shown next to a score.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wind => "Wind",
            Self::Dir => "Swell direction",
            Self::Period => "Period",
            Self::Size => "Size",
            Self::Tide => "Tide",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that names no known axis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown axis '{name}'")]
pub struct UnknownAxisError {
    /// The rejected input.
    pub name: String,
}

impl std::str::FromStr for Axis {
    type Err = UnknownAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wind" => Ok(Self::Wind),
            "dir" => Ok(Self::Dir),
            "period" => Ok(Self::Period),
            "size" => Ok(Self::Size),
            "tide" => Ok(Self::Tide),
            _ => Err(UnknownAxisError { name: s.to_owned() }),
        }
    }
}
