//! Error types emitted by the sailroute CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use sailroute_core::{PositionError, RouteRequestError};
use thiserror::Error;

/// Errors emitted by the sailroute CLI.
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
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Both ways of describing the destination were supplied.
    #[error("--{first} conflicts with --{second}; describe the destination one way")]
    ConflictingDestination {
        /// Flag from the bearing-and-distance form.
        first: &'static str,
        /// Flag from the position form.
        second: &'static str,
    },
    /// A position option could not be parsed.
    #[error("invalid {field}: {source}")]
    InvalidPosition {
        /// Long flag name of the option.
        field: &'static str,
        /// Parse failure.
        #[source]
        source: PositionError,
    },
    /// The optimiser rejected the request.
    #[error("invalid route request: {0}")]
    InvalidRequest(#[from] RouteRequestError),
    /// `--alternative` was given but only one route ties for fastest.
    #[error("no alternative route ties with the fastest one")]
    NoAlternative,
    /// Serialising the route plan failed.
    #[error("failed to serialise route plan: {0}")]
    SerialiseRoutePlan(#[source] serde_json::Error),
    /// Writing the route output failed.
    #[error("failed to write route output: {0}")]
    WriteRouteOutput(#[source] std::io::Error),
}
