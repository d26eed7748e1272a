//! `spots` command: print the configured catalogue.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use swellcast_data::SpotCatalogue;

use crate::rate::{require_existing, write_json};
use crate::{ARG_SPOTS, CliError, DEFAULT_SPOTS_PATH};

/// CLI arguments for the `spots` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "spots", about = "Print the spot catalogue as JSON")]
#[ortho_config(prefix = "SWELLCAST")]
pub(crate) struct SpotsArgs {
    /// Path to the spot catalogue JSON file.
    #[arg(long = ARG_SPOTS, value_name = "path")]
    #[serde(default)]
    pub(crate) spots: Option<Utf8PathBuf>,
}

impl SpotsArgs {
    fn into_catalogue_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(merged
            .spots
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_SPOTS_PATH)))
    }
}

pub(crate) fn run_spots(args: SpotsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_spots_with(args, &mut stdout)
}

pub(crate) fn run_spots_with(args: SpotsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let path = args.into_catalogue_path()?;
    require_existing(&path, ARG_SPOTS)?;
    let catalogue = SpotCatalogue::load(&path)?;
    log::debug!("listing {} spots from {path}", catalogue.len());
    write_json(writer, &catalogue.records())
}
