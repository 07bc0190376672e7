//! Route command implementation for the sailroute CLI.

use std::io::Write;

use clap::{Parser, ValueEnum};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use sailroute_core::{Position, Route, RouteOptimizer, RouteRequest};
use serde::{Deserialize, Serialize};

use crate::instructions::render;
use crate::{
    ARG_ALTERNATIVE, ARG_DEST_DISTANCE, ARG_DEST_HEADING, ARG_FORMAT, ARG_FROM, ARG_TO,
    ARG_WIND_HEADING, ARG_WIND_SPEED, CliError, ENV_DEST_DISTANCE, ENV_DEST_HEADING, ENV_FROM,
    ENV_TO, ENV_WIND_HEADING, ENV_WIND_SPEED,
};

/// How the route plan is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sailing instructions, one per line.
    #[default]
    Text,
    /// The pretty-printed [`RoutePlan`].
    Json,
}

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Find the fastest route to a destination given as a bearing \
                 and distance, or as a pair of positions. Values can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Plan the fastest route to a destination"
)]
#[ortho_config(prefix = "SAILROUTE")]
pub(crate) struct RouteArgs {
    /// Compass bearing to the destination in degrees.
    #[arg(long = ARG_DEST_HEADING, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) dest_heading: Option<i32>,
    /// Straight-line distance to the destination in metres.
    #[arg(long = ARG_DEST_DISTANCE, value_name = "metres")]
    #[serde(default)]
    pub(crate) dest_distance: Option<f64>,
    /// Starting position as `latitude,longitude`.
    #[arg(long = ARG_FROM, value_name = "lat,lon", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) from: Option<String>,
    /// Destination position as `latitude,longitude`.
    #[arg(long = ARG_TO, value_name = "lat,lon", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) to: Option<String>,
    /// Compass heading the wind blows from in degrees.
    #[arg(long = ARG_WIND_HEADING, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) wind_heading: Option<i32>,
    /// True wind speed in knots.
    #[arg(long = ARG_WIND_SPEED, value_name = "knots")]
    #[serde(default)]
    pub(crate) wind_speed: Option<f64>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Pick the second of two equally fast routes.
    #[arg(long = ARG_ALTERNATIVE)]
    #[serde(default)]
    pub(crate) alternative: bool,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Where the boat is heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Destination {
    /// Bearing and distance from the boat.
    Relative { heading: i32, distance_m: f64 },
    /// Start and end positions.
    Between { from: Position, to: Position },
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RouteConfig {
    pub(crate) destination: Destination,
    pub(crate) wind_heading: i32,
    pub(crate) wind_speed_knots: f64,
    pub(crate) format: OutputFormat,
    pub(crate) alternative: bool,
}

impl RouteConfig {
    pub(crate) fn request(&self) -> RouteRequest {
        match self.destination {
            Destination::Relative {
                heading,
                distance_m,
            } => RouteRequest::new(heading, distance_m, self.wind_heading, self.wind_speed_knots),
            Destination::Between { from, to } => {
                RouteRequest::between(&from, &to, self.wind_heading, self.wind_speed_knots)
            }
        }
    }

    pub(crate) const fn start(&self) -> Option<Position> {
        match self.destination {
            Destination::Between { from, .. } => Some(from),
            Destination::Relative { .. } => None,
        }
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let destination = resolve_destination(&args)?;
        let wind_heading = args.wind_heading.ok_or(CliError::MissingArgument {
            field: ARG_WIND_HEADING,
            env: ENV_WIND_HEADING,
        })?;
        let wind_speed_knots = args.wind_speed.ok_or(CliError::MissingArgument {
            field: ARG_WIND_SPEED,
            env: ENV_WIND_SPEED,
        })?;
        Ok(Self {
            destination,
            wind_heading,
            wind_speed_knots,
            format: args.format.unwrap_or_default(),
            alternative: args.alternative,
        })
    }
}

fn resolve_destination(args: &RouteArgs) -> Result<Destination, CliError> {
    let relative_flag = if args.dest_heading.is_some() {
        Some(ARG_DEST_HEADING)
    } else {
        args.dest_distance.map(|_| ARG_DEST_DISTANCE)
    };
    let position_flag = if args.from.is_some() {
        Some(ARG_FROM)
    } else {
        args.to.as_ref().map(|_| ARG_TO)
    };

    match (relative_flag, position_flag) {
        (Some(first), Some(second)) => Err(CliError::ConflictingDestination { first, second }),
        (_, Some(_)) => Ok(Destination::Between {
            from: parse_position(args.from.as_deref(), ARG_FROM, ENV_FROM)?,
            to: parse_position(args.to.as_deref(), ARG_TO, ENV_TO)?,
        }),
        (_, None) => {
            let heading = args.dest_heading.ok_or(CliError::MissingArgument {
                field: ARG_DEST_HEADING,
                env: ENV_DEST_HEADING,
            })?;
            let distance_m = args.dest_distance.ok_or(CliError::MissingArgument {
                field: ARG_DEST_DISTANCE,
                env: ENV_DEST_DISTANCE,
            })?;
            Ok(Destination::Relative {
                heading,
                distance_m,
            })
        }
    }
}

fn parse_position(
    text: Option<&str>,
    field: &'static str,
    env: &'static str,
) -> Result<Position, CliError> {
    text.ok_or(CliError::MissingArgument { field, env })?
        .parse()
        .map_err(|source| CliError::InvalidPosition { field, source })
}

/// The outcome of a `route` invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// The request handed to the optimiser.
    pub request: RouteRequest,
    /// Every route tying for fastest, best first.
    pub routes: Vec<Route>,
    /// Index of the route chosen for sailing.
    pub selected: usize,
    /// Positions along the chosen route when the start position is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Vec<Position>>,
}

impl RoutePlan {
    /// The route chosen for sailing.
    #[must_use]
    pub fn selected_route(&self) -> Option<&Route> {
        self.routes.get(self.selected)
    }
}

pub(super) fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_route_with(args, &mut stdout)
}

pub(super) fn run_route_with(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let plan = plan_route(&config)?;
    write_route_plan(writer, &plan, config.format)
}

pub(crate) fn plan_route(config: &RouteConfig) -> Result<RoutePlan, CliError> {
    let request = config.request();
    let routes = RouteOptimizer::new().optimal_routes(&request)?;
    let selected = usize::from(config.alternative);
    let route = routes.get(selected).ok_or(CliError::NoAlternative)?;
    info!(
        "selected route {} of {}: departure {}°, arrival {}°",
        selected + 1,
        routes.len(),
        route.departure_heading(),
        route.arrival_heading()
    );
    let waypoints = config.start().map(|start| route.waypoints(&start));
    Ok(RoutePlan {
        request,
        routes,
        selected,
        waypoints,
    })
}

fn write_route_plan(
    writer: &mut dyn Write,
    plan: &RoutePlan,
    format: OutputFormat,
) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(plan).map_err(CliError::SerialiseRoutePlan)?
        }
        OutputFormat::Text => text_lines(plan).join("\n"),
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteRouteOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteRouteOutput)?;
    Ok(())
}

pub(crate) fn text_lines(plan: &RoutePlan) -> Vec<String> {
    let mut lines = plan.selected_route().map(render).unwrap_or_default();
    if let Some(waypoints) = &plan.waypoints {
        lines.push("Waypoints:".to_owned());
        lines.extend(waypoints.iter().map(|point| {
            format!("  {:.5},{:.5}", point.latitude(), point.longitude())
        }));
    }
    lines
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
