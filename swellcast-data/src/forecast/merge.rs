//! Join marine and weather columns into resolved hourly samples.
//!
//! This is the only place where missing readings are substituted: swell
//! values win over total-wave values, and zero stands in when neither is
//! present. Tide stays `None` when the service has no sea level.
#![expect(
    clippy::float_arithmetic,
    reason = "wind speed unit conversion"
)]

use std::collections::HashMap;

use swellcast_core::{ForecastHour, ForecastSeries, ObservationSample};

use super::openmeteo::{MarineHourly, WeatherHourly};

/// Kilometres per hour in one metre per second.
pub const KMH_PER_MS: f64 = 3.6;

fn cell(column: &[Option<f64>], index: usize) -> Option<f64> {
    column.get(index).copied().flatten()
}

fn swell_or_wave(swell: Option<f64>, wave: Option<f64>) -> f64 {
    swell.or(wave).unwrap_or(0.0)
}

/// Convert km/h to m/s.
#[must_use]
pub fn kmh_to_ms(speed_kmh: f64) -> f64 {
    speed_kmh / KMH_PER_MS
}

#[derive(Debug, Clone, Copy, Default)]
struct Wind {
    speed_ms: f64,
    direction: f64,
}

fn wind_by_time(weather: &WeatherHourly) -> HashMap<&str, Wind> {
    weather
        .time
        .iter()
        .enumerate()
        .map(|(index, time)| {
            let wind = Wind {
                speed_ms: cell(&weather.wind_speed_10m, index).map_or(0.0, kmh_to_ms),
                direction: cell(&weather.wind_direction_10m, index).unwrap_or(0.0),
            };
            (time.as_str(), wind)
        })
        .collect()
}

/// Merge marine and weather columns by timestamp, in marine order.
///
/// Weather hours with no marine counterpart are dropped; marine hours with
/// no weather counterpart get calm wind from north.
#[must_use]
pub fn merge_hourly(marine: &MarineHourly, weather: &WeatherHourly) -> ForecastSeries {
    let winds = wind_by_time(weather);
    marine
        .time
        .iter()
        .enumerate()
        .map(|(index, time)| {
            let wind = winds.get(time.as_str()).copied().unwrap_or_default();
            let sample = ObservationSample {
                hs: swell_or_wave(
                    cell(&marine.swell_wave_height, index),
                    cell(&marine.wave_height, index),
                ),
                tp: swell_or_wave(
                    cell(&marine.swell_wave_period, index),
                    cell(&marine.wave_period, index),
                ),
                dp: swell_or_wave(
                    cell(&marine.swell_wave_direction, index),
                    cell(&marine.wave_direction, index),
                ),
                wind: wind.speed_ms,
                wind_dir: wind.direction,
                tide: cell(&marine.sea_level_height_msl, index),
            };
            ForecastHour::new(time.clone(), sample)
        })
        .collect()
}
