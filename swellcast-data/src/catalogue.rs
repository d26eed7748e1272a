//! Spot catalogue: the JSON file describing every rateable break.
//!
//! The file holds an array of records with camelCase keys:
//!
//! ```json
//! [
//!   {
//!     "id": "supertubos",
//!     "name": "Supertubos",
//!     "lat": 39.34,
//!     "lon": -9.36,
//!     "coastBearing": 250,
//!     "breakType": "beach",
//!     "swellDirMin": 240,
//!     "swellDirMax": 320,
//!     "minTide": 0.5,
//!     "maxTide": 2.5,
//!     "minPeriod": 9,
//!     "idealPeriod": 14
//!   }
//! ]
//! ```
//!
//! A tide window only exists when both `minTide` and `maxTide` are given.
//! Partial tide fields are logged with a warning and ignored.

use std::collections::HashSet;
use std::io::{BufReader, Read};

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use serde::{Deserialize, Serialize};
use swellcast_core::{BreakType, PeriodShape, SpotProfile, SpotProfileError, SwellWindow, TideWindow};
use thiserror::Error;

use crate::fs::open_utf8_file;

/// One catalogue entry as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotRecord {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Direction the break faces, in degrees.
    pub coast_bearing: f64,
    /// Break type; reef when omitted.
    #[serde(default)]
    pub break_type: BreakType,
    /// Clockwise start of the swell window.
    pub swell_dir_min: f64,
    /// Clockwise end of the swell window.
    pub swell_dir_max: f64,
    /// Lowest workable tide in metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_tide: Option<f64>,
    /// Best tide in metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_tide: Option<f64>,
    /// Highest workable tide in metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tide: Option<f64>,
    /// Period below which swell scores zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_period: Option<f64>,
    /// Period at which swell scores fully.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_period: Option<f64>,
}

impl SpotRecord {
    /// Report tide fields that cannot form a window: exactly one of
    /// `minTide`/`maxTide`, or `idealTide` without both bounds.
    pub(crate) const fn has_incomplete_tide(&self) -> bool {
        let has_window = self.min_tide.is_some() && self.max_tide.is_some();
        let has_any =
            self.min_tide.is_some() || self.max_tide.is_some() || self.ideal_tide.is_some();
        has_any && !has_window
    }
}

impl TryFrom<SpotRecord> for SpotProfile {
    type Error = SpotProfileError;

    fn try_from(record: SpotRecord) -> Result<Self, Self::Error> {
        if record.has_incomplete_tide() {
            log::warn!(
                "spot '{}' needs both minTide and maxTide for a tide window; \
                 ignoring its tide fields",
                record.id
            );
        }
        let window = SwellWindow::new(record.swell_dir_min, record.swell_dir_max)?;
        let shape = PeriodShape::new(record.min_period, record.ideal_period)?;
        let profile = Self::new(
            record.id,
            record.name,
            Coord {
                x: record.lon,
                y: record.lat,
            },
            record.coast_bearing,
            record.break_type,
            window,
        )?
        .with_period_shape(shape);
        match (record.min_tide, record.max_tide) {
            (Some(min), Some(max)) => Ok(profile.with_tide_window(TideWindow::new(
                min,
                record.ideal_tide,
                max,
            )?)),
            _ => Ok(profile),
        }
    }
}

impl From<&SpotProfile> for SpotRecord {
    fn from(spot: &SpotProfile) -> Self {
        let tide = spot.tide_window.as_ref();
        Self {
            id: spot.id.clone(),
            name: spot.name.clone(),
            lat: spot.location.y,
            lon: spot.location.x,
            coast_bearing: spot.coast_bearing,
            break_type: spot.break_type,
            swell_dir_min: spot.swell_window.min(),
            swell_dir_max: spot.swell_window.max(),
            min_tide: tide.map(TideWindow::min),
            ideal_tide: tide.and_then(TideWindow::ideal),
            max_tide: tide.map(TideWindow::max),
            min_period: Some(spot.period_shape.min()),
            ideal_period: Some(spot.period_shape.ideal()),
        }
    }
}

/// Errors raised while loading a catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The catalogue file could not be opened.
    #[error("failed to open spot catalogue at {path:?}: {source}")]
    Open {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The catalogue was not a JSON array of spot records.
    #[error("failed to parse spot catalogue: {source}")]
    Parse {
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// A record failed validation.
    #[error("spot '{id}' is invalid: {source}")]
    InvalidSpot {
        /// Identifier of the rejected record.
        id: String,
        /// Validation failure.
        #[source]
        source: SpotProfileError,
    },
    /// Two records share an identifier.
    #[error("spot id '{id}' appears more than once")]
    DuplicateId {
        /// Repeated identifier.
        id: String,
    },
}

/// Validated spots in file order, addressable by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpotCatalogue {
    spots: Vec<SpotProfile>,
}

impl SpotCatalogue {
    /// Load and validate the catalogue at `path`.
    ///
    /// # Errors
    /// Returns [`CatalogueError`] when the file cannot be opened or parsed,
    /// or when any record is invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, CatalogueError> {
        let file = open_utf8_file(path).map_err(|source| CatalogueError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue = Self::from_reader(BufReader::new(file))?;
        log::debug!("loaded {} spots from {path}", catalogue.len());
        Ok(catalogue)
    }

    /// Parse and validate a catalogue from any reader.
    ///
    /// # Errors
    /// Returns [`CatalogueError`] when the JSON is malformed or any record
    /// is invalid.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogueError> {
        let records: Vec<SpotRecord> =
            serde_json::from_reader(reader).map_err(|source| CatalogueError::Parse { source })?;
        Self::from_records(records)
    }

    /// Validate pre-parsed records.
    ///
    /// # Errors
    /// Returns [`CatalogueError::InvalidSpot`] for the first invalid record
    /// and [`CatalogueError::DuplicateId`] for the first repeated id.
    ///
    /// # Examples
    /// ```
    /// use swellcast_data::{SpotCatalogue, SpotRecord};
    ///
    /// let record: SpotRecord = serde_json::from_str(
    ///     r#"{"id":"peniche","name":"Peniche","lat":39.35,"lon":-9.37,
    ///         "coastBearing":270,"breakType":"beach",
    ///         "swellDirMin":250,"swellDirMax":320}"#,
    /// )?;
    /// let catalogue = SpotCatalogue::from_records(vec![record])?;
    /// assert_eq!(catalogue.get("peniche").map(|spot| spot.name.as_str()), Some("Peniche"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_records(records: Vec<SpotRecord>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut spots = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id.clone()) {
                return Err(CatalogueError::DuplicateId { id: record.id });
            }
            let id = record.id.clone();
            let spot = SpotProfile::try_from(record)
                .map_err(|source| CatalogueError::InvalidSpot { id, source })?;
            spots.push(spot);
        }
        Ok(Self { spots })
    }

    /// Look up a spot by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SpotProfile> {
        self.spots.iter().find(|spot| spot.id == id)
    }

    /// Iterate over spots in file order.
    pub fn iter(&self) -> impl Iterator<Item = &SpotProfile> {
        self.spots.iter()
    }

    /// Number of spots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.spots.len()
    }

    /// Whether the catalogue holds no spots.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Convert every spot back to its on-disk record shape.
    #[must_use]
    pub fn records(&self) -> Vec<SpotRecord> {
        self.spots.iter().map(SpotRecord::from).collect()
    }
}
