//! Stats command: summarise the region catalogue.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use suburb_core::RegionCatalog;

use crate::output::{require_existing, write_json};
use crate::{ARG_CATALOG, CliError, ENV_STATS_CATALOG, JsonFileCatalog};

/// CLI arguments for the `stats` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "stats",
    about = "Print region and POI totals for the catalogue"
)]
#[ortho_config(prefix = "SUBURBS")]
pub(crate) struct StatsArgs {
    /// Path to the JSON region catalogue.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

pub(crate) fn run_stats(args: StatsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_stats_with(args, &mut stdout)
}

pub(crate) fn run_stats_with(args: StatsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let catalog = merged.catalog.ok_or(CliError::MissingArgument {
        field: ARG_CATALOG,
        env: ENV_STATS_CATALOG,
    })?;
    require_existing(&catalog, ARG_CATALOG)?;
    let snapshot = JsonFileCatalog::new(catalog).snapshot()?;
    write_json(writer, &snapshot.summary())
}
