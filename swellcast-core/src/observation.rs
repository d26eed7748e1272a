//! Hourly environmental observations fed to the rating engine.
//!
//! Samples arrive fully resolved: the data layer has already chosen between
//! swell-specific and total-wave readings and substituted zero for gaps. Only
//! tide stays optional, because a missing tide makes its axis neutral rather
//! than zero.

/// One forecast hour of marine and wind conditions.
///
/// Directions use the coming-from convention.
///
/// # Examples
/// ```
/// use swellcast_core::ObservationSample;
///
/// let sample = ObservationSample {
///     hs: 1.5,
///     tp: 13.0,
///     dp: 215.0,
///     wind: 3.0,
///     wind_dir: 90.0,
///     tide: None,
/// };
/// assert!(sample.tide.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ObservationSample {
    /// Significant (or swell) wave height in metres.
    pub hs: f64,
    /// Peak (or swell) period in seconds.
    pub tp: f64,
    /// Swell direction in degrees.
    pub dp: f64,
    /// 10 m wind speed in metres per second.
    pub wind: f64,
    /// Wind direction in degrees.
    pub wind_dir: f64,
    /// Tide height in metres, when the provider reports one.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub tide: Option<f64>,
}

/// An observation sample stamped with its local forecast hour.
///
/// `time` is kept exactly as the provider reported it, typically an
/// ISO-8601 local timestamp such as `2024-06-01T06:00`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastHour {
    /// Local timestamp of the hour.
    pub time: String,
    /// Conditions during the hour.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub sample: ObservationSample,
}

impl ForecastHour {
    /// Stamp a sample with its hour.
    #[must_use]
    pub fn new(time: impl Into<String>, sample: ObservationSample) -> Self {
        Self {
            time: time.into(),
            sample,
        }
    }
}
