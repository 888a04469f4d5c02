//! Ask command: rank regions for a free-text description.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use suburb_core::{NormalizedWeights, PreferenceInterpreter, Recommendation};
use suburb_scorer::{KeywordInterpreter, Recommender};

use crate::output::{require_existing, write_json};
use crate::{
    ARG_CATALOG, ARG_LIMIT, ARG_QUERY, CliError, DEFAULT_LIMIT, ENV_ASK_CATALOG, ENV_ASK_QUERY,
    JsonFileCatalog,
};

/// CLI arguments for the `ask` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "ask",
    long_about = "Describe the area you want in plain words. The description \
                 is mapped to category weights by keyword, and the weights \
                 used are printed alongside the ranking.",
    about = "Rank regions for a free-text description"
)]
#[ortho_config(prefix = "SUBURBS")]
pub(crate) struct AskArgs {
    /// Free-text description, e.g. "quiet, family-friendly, near a train station".
    #[arg(value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Path to the JSON region catalogue.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Maximum number of regions to print.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl AskArgs {
    pub(crate) fn into_config(self) -> Result<AskConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AskConfig::try_from(merged)
    }
}

/// Resolved `ask` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AskConfig {
    pub(crate) query: String,
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) limit: usize,
}

impl TryFrom<AskArgs> for AskConfig {
    type Error = CliError;

    fn try_from(args: AskArgs) -> Result<Self, Self::Error> {
        let query = args.query.ok_or(CliError::MissingArgument {
            field: ARG_QUERY,
            env: ENV_ASK_QUERY,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_ASK_CATALOG,
        })?;
        Ok(Self {
            query,
            catalog,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
        })
    }
}

/// Printed result of the `ask` command.
#[derive(Debug, Serialize)]
struct AskOutput {
    interpreted_preferences: NormalizedWeights,
    recommendations: Vec<Recommendation>,
}

pub(crate) fn run_ask(args: AskArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_ask_with(args, &KeywordInterpreter::default(), &mut stdout)
}

pub(crate) fn run_ask_with(
    args: AskArgs,
    interpreter: &dyn PreferenceInterpreter,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.catalog, ARG_CATALOG)?;
    let recommender = Recommender::new(JsonFileCatalog::new(config.catalog));
    let result = recommender.recommend_from_query(interpreter, &config.query)?;
    let output = AskOutput {
        interpreted_preferences: result.interpreted_preferences,
        recommendations: result
            .recommendations
            .iter()
            .take(config.limit)
            .map(Recommendation::from)
            .collect(),
    };
    write_json(writer, &output)
}
