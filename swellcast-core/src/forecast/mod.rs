//! Fetch hourly observations for a surf spot.
//!
//! The `ForecastProvider` trait abstracts retrieval of a spot's upcoming
//! conditions. Callers supply a [`SpotProfile`](crate::SpotProfile) and an
//! IANA timezone name and receive one
//! [`ForecastHour`](crate::ForecastHour) per forecast hour.
//!
//! Failures are explicit values; providers never hand back zero-filled
//! series in place of an error.

mod error;
mod provider;

pub use error::ForecastError;
pub use provider::{ForecastProvider, ForecastSeries};
