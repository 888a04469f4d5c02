//! Command-line interface for ranking Sydney regions against amenity
//! preferences.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod ask;
mod catalog;
mod error;
mod output;
mod recommend;
mod stats;

pub use catalog::JsonFileCatalog;
pub use error::CliError;

use ask::{AskArgs, run_ask};
use recommend::{RecommendArgs, run_recommend};
use stats::{StatsArgs, run_stats};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_QUERY: &str = "query";
pub(crate) const ARG_RECOMMEND_REQUEST: &str = "request";
pub(crate) const ENV_RECOMMEND_CATALOG: &str = "SUBURBS_CMDS_RECOMMEND_CATALOG";
pub(crate) const ENV_RECOMMEND_REQUEST: &str = "SUBURBS_CMDS_RECOMMEND_REQUEST_PATH";
pub(crate) const ENV_ASK_CATALOG: &str = "SUBURBS_CMDS_ASK_CATALOG";
pub(crate) const ENV_ASK_QUERY: &str = "SUBURBS_CMDS_ASK_QUERY";
pub(crate) const ENV_STATS_CATALOG: &str = "SUBURBS_CMDS_STATS_CATALOG";

/// Number of recommendations printed when `--limit` is not set.
pub const DEFAULT_LIMIT: usize = 10;

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// catalogue cannot be read, the request is rejected, or output cannot be
/// written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Ask(args) => run_ask(args),
        Command::Stats(args) => run_stats(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "suburbs",
    about = "Rank Sydney regions by how well their amenities match your preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank regions for a JSON preference request.
    Recommend(RecommendArgs),
    /// Rank regions for a free-text description.
    Ask(AskArgs),
    /// Summarise the region catalogue.
    Stats(StatsArgs),
}

#[cfg(test)]
mod tests;
