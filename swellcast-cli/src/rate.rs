//! `rate` command: score the forecast hours for one spot.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use swellcast_core::{
    FixedTimezone, ForecastProvider, ForecastSeries, SpotProfile, TimezoneResolver,
    WeightProfile, timezone_or_utc,
};
use swellcast_data::fs::{file_is_file, open_utf8_file};
use swellcast_data::{
    HttpForecastProvider, HttpForecastProviderConfig, HttpTimezoneResolver,
    HttpTimezoneResolverConfig, SpotCatalogue,
};
use swellcast_scorer::{LegacyRatedHour, RatedHour, rate_forecast, score_forecast_series};

use crate::weights::parse_weights;
use crate::{
    ARG_FORECAST_DAYS, ARG_LEGACY, ARG_MARINE_BASE_URL, ARG_OBSERVATIONS, ARG_SPOT_ID, ARG_SPOTS,
    ARG_TIMEZONE, ARG_WEATHER_BASE_URL, ARG_WEIGHTS, CliError, DEFAULT_SPOTS_PATH, ENV_SPOT_ID,
};

/// CLI arguments for the `rate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rate",
    long_about = "Rate each forecast hour at a spot. Hours come from the \
                 Open-Meteo marine and weather APIs unless an observations \
                 file is given. Every option can also come from a \
                 configuration file or SWELLCAST_* environment variables.",
    about = "Rate the forecast hours for one spot"
)]
#[ortho_config(prefix = "SWELLCAST")]
pub(crate) struct RateArgs {
    /// Identifier of the spot to rate.
    #[arg(value_name = ARG_SPOT_ID)]
    #[serde(default)]
    pub(crate) spot_id: Option<String>,
    /// Path to the spot catalogue JSON file.
    #[arg(long = ARG_SPOTS, value_name = "path")]
    #[serde(default)]
    pub(crate) spots: Option<Utf8PathBuf>,
    /// Comma-separated axis weights, e.g. "wind=1,dir=0.5". Omit for no aggregate.
    #[arg(long = ARG_WEIGHTS, value_name = "list")]
    #[serde(default)]
    pub(crate) weights: Option<String>,
    /// Emit legacy `score`/`components` ratings using the frozen weights.
    #[arg(
        long = ARG_LEGACY,
        value_name = "bool",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) legacy: Option<bool>,
    /// Read hours from a JSON file of forecast hours instead of the network.
    #[arg(long = ARG_OBSERVATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) observations: Option<Utf8PathBuf>,
    /// IANA timezone for forecast timestamps; looked up from the spot when unset.
    #[arg(long = ARG_TIMEZONE, value_name = "zone")]
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    /// Base URL of the Open-Meteo marine API.
    #[arg(long = ARG_MARINE_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) marine_base_url: Option<String>,
    /// Base URL of the Open-Meteo weather API.
    #[arg(long = ARG_WEATHER_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) weather_base_url: Option<String>,
    /// Number of forecast days to request.
    #[arg(long = ARG_FORECAST_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) forecast_days: Option<u8>,
}

impl RateArgs {
    pub(crate) fn into_config(self) -> Result<RateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RateConfig::try_from(merged)
    }
}

/// Resolved `rate` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RateConfig {
    /// Spot to rate.
    pub(crate) spot_id: String,
    /// Spot catalogue file.
    pub(crate) spots: Utf8PathBuf,
    /// Parsed weights; `None` suppresses the aggregate.
    pub(crate) weights: Option<WeightProfile>,
    /// Emit legacy ratings.
    pub(crate) legacy: bool,
    /// Offline observations file.
    pub(crate) observations: Option<Utf8PathBuf>,
    /// Timezone override.
    pub(crate) timezone: Option<String>,
    /// Forecast provider settings.
    pub(crate) forecast: HttpForecastProviderConfig,
}

impl RateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.spots, ARG_SPOTS)?;
        if let Some(observations) = &self.observations {
            require_existing(observations, ARG_OBSERVATIONS)?;
        }
        Ok(())
    }
}

impl TryFrom<RateArgs> for RateConfig {
    type Error = CliError;

    fn try_from(args: RateArgs) -> Result<Self, Self::Error> {
        let spot_id = args
            .spot_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_SPOT_ID,
                env: ENV_SPOT_ID,
            })?;
        let spots = args
            .spots
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_SPOTS_PATH));
        let weights = args.weights.as_deref().map(parse_weights).transpose()?;

        let defaults = HttpForecastProviderConfig::default();
        let forecast = HttpForecastProviderConfig::new(
            args.marine_base_url.unwrap_or(defaults.marine_base_url),
            args.weather_base_url.unwrap_or(defaults.weather_base_url),
        )
        .with_forecast_days(args.forecast_days.unwrap_or(defaults.forecast_days));

        Ok(Self {
            spot_id,
            spots,
            weights,
            legacy: args.legacy.unwrap_or(false),
            observations: args.observations,
            timezone: args.timezone,
            forecast,
        })
    }
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Builds the network collaborators for the current rate invocation.
pub(super) trait ForecastSourceBuilder {
    fn forecast_provider(
        &self,
        config: &RateConfig,
    ) -> Result<Box<dyn ForecastProvider>, CliError>;

    fn timezone_resolver(
        &self,
        config: &RateConfig,
    ) -> Result<Box<dyn TimezoneResolver>, CliError>;
}

pub(super) struct DefaultForecastSourceBuilder;

impl ForecastSourceBuilder for DefaultForecastSourceBuilder {
    fn forecast_provider(
        &self,
        config: &RateConfig,
    ) -> Result<Box<dyn ForecastProvider>, CliError> {
        let provider = HttpForecastProvider::with_config(config.forecast.clone())
            .map_err(|source| CliError::BuildForecastProvider { source })?;
        Ok(Box::new(provider))
    }

    fn timezone_resolver(
        &self,
        config: &RateConfig,
    ) -> Result<Box<dyn TimezoneResolver>, CliError> {
        if let Some(zone) = &config.timezone {
            return Ok(Box::new(FixedTimezone::new(zone.clone())));
        }
        let resolver_config =
            HttpTimezoneResolverConfig::new(config.forecast.weather_base_url.clone());
        let resolver = HttpTimezoneResolver::with_config(resolver_config)
            .map_err(|source| CliError::BuildTimezoneResolver { source })?;
        Ok(Box::new(resolver))
    }
}

/// Ratings printed by the `rate` command.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum RateOutput {
    /// Per-axis ratings with optional aggregate.
    Rated(Vec<RatedHour>),
    /// Frozen-weight ratings for older consumers.
    Legacy(Vec<LegacyRatedHour>),
}

pub(super) fn run_rate(args: RateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultForecastSourceBuilder;
    run_rate_with(args, &builder, &mut stdout)
}

pub(super) fn run_rate_with(
    args: RateArgs,
    builder: &dyn ForecastSourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let output = execute_rate(args, builder)?;
    write_json(writer, &output)
}

fn execute_rate(
    args: RateArgs,
    builder: &dyn ForecastSourceBuilder,
) -> Result<RateOutput, CliError> {
    let config = resolve_rate_config(args)?;
    let catalogue = SpotCatalogue::load(&config.spots)?;
    let spot = catalogue
        .get(&config.spot_id)
        .ok_or_else(|| CliError::UnknownSpot {
            id: config.spot_id.clone(),
            path: config.spots.clone(),
        })?;
    let hours = config.observations.as_deref().map_or_else(
        || fetch_hours(&config, spot, builder),
        load_observations,
    )?;
    log::debug!("rating {} hours for spot '{}'", hours.len(), spot.id);

    if config.legacy {
        if config.weights.is_some() {
            log::warn!("--{ARG_WEIGHTS} is ignored with --{ARG_LEGACY}; using the frozen weights");
        }
        return Ok(RateOutput::Legacy(score_forecast_series(spot, &hours)));
    }
    Ok(RateOutput::Rated(rate_forecast(
        spot,
        &hours,
        config.weights.as_ref(),
    )))
}

fn resolve_rate_config(args: RateArgs) -> Result<RateConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn fetch_hours(
    config: &RateConfig,
    spot: &SpotProfile,
    builder: &dyn ForecastSourceBuilder,
) -> Result<ForecastSeries, CliError> {
    let resolver = builder.timezone_resolver(config)?;
    let timezone = timezone_or_utc(resolver.as_ref(), spot.location);
    let provider = builder.forecast_provider(config)?;
    log::debug!(
        "fetching {} forecast days for '{}' in {timezone}",
        config.forecast.forecast_days,
        spot.id
    );
    provider
        .fetch_forecast(spot, &timezone)
        .map_err(|source| CliError::Forecast {
            spot_id: spot.id.clone(),
            source,
        })
}

/// Loads a JSON array of forecast hours from disk.
pub(super) fn load_observations(path: &Utf8Path) -> Result<ForecastSeries, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenObservations {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseObservations {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RateConfig, CliError> {
    let merged = RateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RateConfig::try_from(merged)
}
