//! Fixtures shared by the CLI unit and behaviour tests.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use swellcast_core::test_support::sample_spot;
use swellcast_core::{
    FixedTimezone, ForecastError, ForecastHour, ForecastProvider, ForecastSeries,
    ObservationSample, SpotProfile, TimezoneResolver,
};
use swellcast_data::SpotRecord;
use swellcast_data::forecast::test_support::StubForecastProvider;
use tempfile::TempDir;

use crate::CliError;
use crate::rate::{ForecastSourceBuilder, RateConfig};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory holding a catalogue and optional observations.
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write a catalogue holding [`sample_spot`] and return its path.
    pub(super) fn write_catalogue(&self) -> Utf8PathBuf {
        let path = self.path("spots.json");
        let records = vec![SpotRecord::from(&sample_spot())];
        let payload = serde_json::to_string_pretty(&records).expect("serialise catalogue");
        write_utf8(&path, payload.as_bytes());
        path
    }

    pub(super) fn write_observations(&self, hours: &[ForecastHour]) -> Utf8PathBuf {
        let path = self.path("observations.json");
        let payload = serde_json::to_string_pretty(hours).expect("serialise observations");
        write_utf8(&path, payload.as_bytes());
        path
    }
}

/// South-west groundswell with a light offshore easterly.
pub(super) fn clean_hour(time: &str) -> ForecastHour {
    ForecastHour::new(
        time,
        ObservationSample {
            hs: 1.2,
            tp: 11.0,
            dp: 220.0,
            wind: 2.0,
            wind_dir: 80.0,
            tide: None,
        },
    )
}

pub(super) fn spot() -> SpotProfile {
    sample_spot()
}

struct SharedProvider(Arc<StubForecastProvider>);

impl ForecastProvider for SharedProvider {
    fn fetch_forecast(
        &self,
        spot: &SpotProfile,
        timezone: &str,
    ) -> Result<ForecastSeries, ForecastError> {
        self.0.fetch_forecast(spot, timezone)
    }
}

/// Builder serving a stub provider and a fixed timezone.
pub(super) struct StubSourceBuilder {
    provider: Arc<StubForecastProvider>,
    timezone: String,
}

impl StubSourceBuilder {
    pub(super) fn with_series(series: ForecastSeries) -> Self {
        Self {
            provider: Arc::new(StubForecastProvider::with_series(series)),
            timezone: "Europe/Lisbon".to_owned(),
        }
    }

    pub(super) fn with_error(error: ForecastError) -> Self {
        Self {
            provider: Arc::new(StubForecastProvider::with_error(error)),
            timezone: "Europe/Lisbon".to_owned(),
        }
    }

    pub(super) fn with_timezone(mut self, timezone: &str) -> Self {
        self.timezone = timezone.to_owned();
        self
    }

    pub(super) fn requests(&self) -> Vec<(String, String)> {
        self.provider.requests()
    }
}

impl ForecastSourceBuilder for StubSourceBuilder {
    fn forecast_provider(
        &self,
        _config: &RateConfig,
    ) -> Result<Box<dyn ForecastProvider>, CliError> {
        Ok(Box::new(SharedProvider(Arc::clone(&self.provider))))
    }

    fn timezone_resolver(
        &self,
        _config: &RateConfig,
    ) -> Result<Box<dyn TimezoneResolver>, CliError> {
        Ok(Box::new(FixedTimezone::new(self.timezone.clone())))
    }
}
