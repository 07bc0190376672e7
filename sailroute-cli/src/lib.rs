//! Command-line interface for planning sailing routes.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod instructions;
mod route;

pub use error::CliError;
pub use route::{OutputFormat, RoutePlan};

use route::{RouteArgs, run_route};

const ARG_DEST_HEADING: &str = "dest-heading";
const ARG_DEST_DISTANCE: &str = "dest-distance";
const ARG_FROM: &str = "from";
const ARG_TO: &str = "to";
const ARG_WIND_HEADING: &str = "wind-heading";
const ARG_WIND_SPEED: &str = "wind-speed";
const ARG_FORMAT: &str = "format";
const ARG_ALTERNATIVE: &str = "alternative";
const ENV_DEST_HEADING: &str = "SAILROUTE_CMDS_ROUTE_DEST_HEADING";
const ENV_DEST_DISTANCE: &str = "SAILROUTE_CMDS_ROUTE_DEST_DISTANCE";
const ENV_FROM: &str = "SAILROUTE_CMDS_ROUTE_FROM";
const ENV_TO: &str = "SAILROUTE_CMDS_ROUTE_TO";
const ENV_WIND_HEADING: &str = "SAILROUTE_CMDS_ROUTE_WIND_HEADING";
const ENV_WIND_SPEED: &str = "SAILROUTE_CMDS_ROUTE_WIND_SPEED";

/// Run the sailroute CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// optimiser rejects the request, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Route(args) => run_route(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sailroute",
    about = "Plan the fastest sailing route under a steady wind",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the fastest direct or tacking route to a destination.
    Route(RouteArgs),
}

#[cfg(test)]
mod tests;
