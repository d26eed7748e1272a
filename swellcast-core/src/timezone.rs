//! Coordinate to timezone lookup.
//!
//! Forecast hours are reported in the spot's local time, so the provider
//! needs an IANA zone name. Lookups are best effort: [`timezone_or_utc`]
//! falls back to [`UTC`] on any failure.

use geo::Coord;
use thiserror::Error;

/// Zone used whenever a lookup fails.
pub const UTC: &str = "UTC";

/// Errors from [`TimezoneResolver::timezone_for`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimezoneError {
    /// The lookup service could not be reached or answered with an error.
    #[error("timezone lookup failed: {message}")]
    Lookup {
        /// Error detail.
        message: String,
    },
    /// The lookup succeeded but named no zone.
    #[error("timezone lookup returned no zone")]
    Blank,
}

/// Resolve the IANA timezone covering a coordinate.
pub trait TimezoneResolver: Send + Sync {
    /// Return the zone name for `location` (`x = longitude`, `y = latitude`).
    ///
    /// # Errors
    /// Returns [`TimezoneError`] when the zone cannot be determined.
    fn timezone_for(&self, location: Coord<f64>) -> Result<String, TimezoneError>;
}

/// Resolver that always answers with the same zone.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use swellcast_core::{FixedTimezone, TimezoneResolver};
///
/// let resolver = FixedTimezone::new("Europe/Lisbon");
/// let zone = resolver.timezone_for(Coord { x: -9.4, y: 38.7 });
/// assert_eq!(zone.as_deref(), Ok("Europe/Lisbon"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTimezone {
    zone: String,
}

impl FixedTimezone {
    /// Build a resolver for `zone`.
    #[must_use]
    pub fn new(zone: impl Into<String>) -> Self {
        Self { zone: zone.into() }
    }
}

impl TimezoneResolver for FixedTimezone {
    fn timezone_for(&self, _location: Coord<f64>) -> Result<String, TimezoneError> {
        if self.zone.trim().is_empty() {
            return Err(TimezoneError::Blank);
        }
        Ok(self.zone.clone())
    }
}

/// Resolve a zone, substituting [`UTC`] on any failure or blank answer.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use swellcast_core::{FixedTimezone, timezone_or_utc};
///
/// let zone = timezone_or_utc(&FixedTimezone::new(""), Coord { x: 0.0, y: 0.0 });
/// assert_eq!(zone, "UTC");
/// ```
#[must_use]
pub fn timezone_or_utc(resolver: &dyn TimezoneResolver, location: Coord<f64>) -> String {
    match resolver.timezone_for(location) {
        Ok(zone) if !zone.trim().is_empty() => zone,
        Ok(_) => {
            log::warn!("timezone lookup returned a blank zone; using {UTC}");
            UTC.to_owned()
        }
        Err(err) => {
            log::warn!("{err}; using {UTC}");
            UTC.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct BrokenResolver;

    impl TimezoneResolver for BrokenResolver {
        fn timezone_for(&self, _location: Coord<f64>) -> Result<String, TimezoneError> {
            Err(TimezoneError::Lookup {
                message: "connection refused".to_owned(),
            })
        }
    }

    #[rstest]
    fn fixed_zone_is_returned() {
        let zone = timezone_or_utc(
            &FixedTimezone::new("Pacific/Honolulu"),
            Coord { x: -158.0, y: 21.6 },
        );
        assert_eq!(zone, "Pacific/Honolulu");
    }

    #[rstest]
    fn lookup_failure_falls_back_to_utc() {
        let zone = timezone_or_utc(&BrokenResolver, Coord { x: 0.0, y: 0.0 });
        assert_eq!(zone, UTC);
    }

    #[rstest]
    fn blank_zone_is_an_error() {
        let err = FixedTimezone::new("   ")
            .timezone_for(Coord { x: 0.0, y: 0.0 })
            .expect_err("blank zone should fail");
        assert_eq!(err, TimezoneError::Blank);
    }
}
