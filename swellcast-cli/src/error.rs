//! Error types emitted by the Swellcast CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use swellcast_core::ForecastError;
use swellcast_data::{CatalogueError, ProviderBuildError};
use thiserror::Error;

use crate::weights::WeightsError;

/// Errors emitted by the Swellcast CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the input.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the input.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the input.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The spot catalogue could not be loaded.
    #[error(transparent)]
    LoadCatalogue(#[from] CatalogueError),
    /// The requested spot is not in the catalogue.
    #[error("unknown spot '{id}' in {path:?}")]
    UnknownSpot {
        /// Requested spot identifier.
        id: String,
        /// Catalogue that was searched.
        path: Utf8PathBuf,
    },
    /// The `--weights` list could not be parsed.
    #[error("invalid weights: {0}")]
    InvalidWeights(#[from] WeightsError),
    /// Opening the observations file failed.
    #[error("failed to open observations at {path:?}: {source}")]
    OpenObservations {
        /// Observations file.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Observations JSON could not be decoded.
    #[error("failed to parse observations JSON at {path:?}: {source}")]
    ParseObservations {
        /// Observations file.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// Constructing the forecast provider failed.
    #[error("failed to build forecast provider: {source}")]
    BuildForecastProvider {
        /// Construction failure.
        #[source]
        source: ProviderBuildError,
    },
    /// Constructing the timezone resolver failed.
    #[error("failed to build timezone resolver: {source}")]
    BuildTimezoneResolver {
        /// Construction failure.
        #[source]
        source: ProviderBuildError,
    },
    /// The upstream forecast could not be fetched.
    #[error("upstream forecast failed for spot '{spot_id}': {source}")]
    Forecast {
        /// Spot being rated.
        spot_id: String,
        /// Provider failure.
        #[source]
        source: ForecastError,
    },
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
