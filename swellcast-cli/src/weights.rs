//! Parse `axis=weight` lists given on the command line.

use std::num::ParseFloatError;
use std::str::FromStr;

use swellcast_core::{Axis, WeightProfile};
use thiserror::Error;

/// Errors raised while parsing a weight list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// An entry is not of the form `axis=weight`.
    #[error("weight entry '{entry}' should look like axis=weight")]
    MissingSeparator {
        /// The rejected entry.
        entry: String,
    },
    /// The weight is not a number.
    #[error("weight '{value}' for {axis} is not a number: {source}")]
    InvalidNumber {
        /// Axis name as written.
        axis: String,
        /// The rejected value.
        value: String,
        /// Parse failure.
        #[source]
        source: ParseFloatError,
    },
}

/// Parse a comma-separated `axis=weight` list into a profile.
///
/// Axis names are case-insensitive. Unknown axes are logged and skipped.
/// Malformed entries and unparsable numbers are errors. Blank entries are
/// ignored.
pub(crate) fn parse_weights(input: &str) -> Result<WeightProfile, WeightsError> {
    let mut profile = WeightProfile::new();
    for entry in input.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        let (raw_name, raw_value) = entry
            .split_once('=')
            .ok_or_else(|| WeightsError::MissingSeparator {
                entry: entry.to_owned(),
            })?;
        let name = raw_name.trim();
        let value = raw_value.trim();
        let weight = value
            .parse::<f64>()
            .map_err(|source| WeightsError::InvalidNumber {
                axis: name.to_owned(),
                value: value.to_owned(),
                source,
            })?;
        match Axis::from_str(name) {
            Ok(axis) => profile.set_weight(axis, weight),
            Err(err) => log::warn!("{err}; ignoring its weight"),
        }
    }
    Ok(profile)
}
