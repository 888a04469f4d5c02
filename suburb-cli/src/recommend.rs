//! Recommend command: rank regions for a JSON preference request.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use suburb_core::{RecommendRequest, Recommendation};
use suburb_scorer::Recommender;

use crate::output::{require_existing, write_json};
use crate::{
    ARG_CATALOG, ARG_LIMIT, ARG_RECOMMEND_REQUEST, CliError, DEFAULT_LIMIT, ENV_RECOMMEND_CATALOG,
    ENV_RECOMMEND_REQUEST, JsonFileCatalog,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Rank every region in the catalogue against a JSON request \
                 holding the five category weights and an optional \
                 latitude, longitude, radius_km and min_total_pois.",
    about = "Rank regions for a preference request"
)]
#[ortho_config(prefix = "SUBURBS")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing the recommendation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the JSON region catalogue.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Maximum number of regions to print.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) limit: usize,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_RECOMMEND_REQUEST)?;
        require_existing(&self.catalog, ARG_CATALOG)?;
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_RECOMMEND_CATALOG,
        })?;
        Ok(Self {
            request_path,
            catalog,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let request = load_recommend_request(&config.request_path)?;
    let recommender = Recommender::new(JsonFileCatalog::new(config.catalog));
    let ranked = recommender.recommend(&request)?;
    let shown: Vec<Recommendation> = ranked
        .iter()
        .take(config.limit)
        .map(Recommendation::from)
        .collect();
    write_json(writer, &shown)
}

/// Load a JSON-encoded [`RecommendRequest`] from disk.
pub(crate) fn load_recommend_request(path: &Utf8Path) -> Result<RecommendRequest, CliError> {
    let contents =
        suburb_fs::read_utf8_file(path).map_err(|source| CliError::OpenRecommendRequest {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseRecommendRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
