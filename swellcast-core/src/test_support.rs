//! Test-only fixtures and deterministic collaborators shared by unit and
//! behaviour tests across the workspace.

use geo::Coord;

use crate::{
    Axis, AxisScorer, BreakType, ForecastError, ForecastProvider, ForecastSeries,
    ObservationSample, PeriodShape, SpotProfile, SwellWindow,
};

/// West-facing beach break with a south-west swell window, 8-13 s period
/// ramp and no tide metadata.
///
/// # Panics
/// Never in practice; the hard-coded values are valid.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixture values are constants known to validate"
)]
pub fn sample_spot() -> SpotProfile {
    let window = SwellWindow::new(190.0, 240.0).expect("valid swell window");
    let shape = PeriodShape::new(Some(8.0), Some(13.0)).expect("valid period shape");
    SpotProfile::new(
        "test-beach",
        "Test Beach",
        Coord { x: -9.5, y: 39.3 },
        270.0,
        BreakType::Beach,
        window,
    )
    .expect("valid spot")
    .with_period_shape(shape)
}

/// Test `AxisScorer` returning the same raw value for every input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantScorer {
    axis: Axis,
    value: f64,
}

impl ConstantScorer {
    /// Score every sample on `axis` as `value`.
    #[must_use]
    pub const fn new(axis: Axis, value: f64) -> Self {
        Self { axis, value }
    }
}

impl AxisScorer for ConstantScorer {
    fn axis(&self) -> Axis {
        self.axis
    }

    fn raw_score(&self, _sample: &ObservationSample, _spot: &SpotProfile) -> f64 {
        self.value
    }
}

/// `ForecastProvider` returning a pre-built series for any spot.
///
/// An empty series yields [`ForecastError::EmptySeries`].
#[derive(Debug, Clone, Default)]
pub struct FixedForecastProvider {
    hours: ForecastSeries,
}

impl FixedForecastProvider {
    /// Serve `hours` for every request.
    #[must_use]
    pub const fn new(hours: ForecastSeries) -> Self {
        Self { hours }
    }
}

impl ForecastProvider for FixedForecastProvider {
    fn fetch_forecast(
        &self,
        _spot: &SpotProfile,
        _timezone: &str,
    ) -> Result<ForecastSeries, ForecastError> {
        if self.hours.is_empty() {
            return Err(ForecastError::EmptySeries);
        }
        Ok(self.hours.clone())
    }
}
