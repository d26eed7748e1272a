//! Open-Meteo response types for the marine, weather and timezone lookups.
//!
//! Open-Meteo returns hourly data column-wise: a `time` array plus one array
//! per requested variable, aligned by index. Any cell may be `null`.
//!
//! See: <https://open-meteo.com/en/docs/marine-weather-api>

use serde::Deserialize;

/// Hourly marine variables requested from the marine endpoint.
pub const MARINE_HOURLY_VARIABLES: &str = "wave_height,wave_period,wave_direction,\
swell_wave_height,swell_wave_period,swell_wave_direction,sea_level_height_msl";

/// Hourly wind variables requested from the weather endpoint.
pub const WEATHER_HOURLY_VARIABLES: &str = "wind_speed_10m,wind_direction_10m";

/// Marine endpoint response.
#[derive(Debug, Deserialize)]
pub struct MarineResponse {
    /// Column-wise hourly values.
    pub hourly: MarineHourly,
}

/// Column-wise marine readings.
#[derive(Debug, Default, Deserialize)]
pub struct MarineHourly {
    /// Local hour timestamps.
    pub time: Vec<String>,
    /// Total significant wave height in metres.
    #[serde(default)]
    pub wave_height: Vec<Option<f64>>,
    /// Total wave peak period in seconds.
    #[serde(default)]
    pub wave_period: Vec<Option<f64>>,
    /// Total wave direction in degrees.
    #[serde(default)]
    pub wave_direction: Vec<Option<f64>>,
    /// Swell height in metres.
    #[serde(default)]
    pub swell_wave_height: Vec<Option<f64>>,
    /// Swell period in seconds.
    #[serde(default)]
    pub swell_wave_period: Vec<Option<f64>>,
    /// Swell direction in degrees.
    #[serde(default)]
    pub swell_wave_direction: Vec<Option<f64>>,
    /// Sea level relative to mean sea level, in metres.
    #[serde(default)]
    pub sea_level_height_msl: Vec<Option<f64>>,
}

/// Weather endpoint response.
#[derive(Debug, Deserialize)]
pub struct WeatherResponse {
    /// Column-wise hourly values.
    pub hourly: WeatherHourly,
}

/// Column-wise wind readings.
#[derive(Debug, Default, Deserialize)]
pub struct WeatherHourly {
    /// Local hour timestamps.
    pub time: Vec<String>,
    /// 10 m wind speed in km/h.
    #[serde(default)]
    pub wind_speed_10m: Vec<Option<f64>>,
    /// 10 m wind direction in degrees.
    #[serde(default)]
    pub wind_direction_10m: Vec<Option<f64>>,
}

/// Location metadata returned when asking for `timezone=auto`.
#[derive(Debug, Deserialize)]
pub struct TimezoneResponse {
    /// IANA zone name.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Body returned alongside a non-success status.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    /// Explanation supplied by the service.
    #[serde(default)]
    pub reason: Option<String>,
}
