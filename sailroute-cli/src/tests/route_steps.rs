//! Behaviour-driven step definitions driving the route CLI scenarios.

use super::*;
use clap::Parser;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug, Default)]
struct RouteWorld {
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RouteWorld {
    fn push_flag(&self, flag: &str, value: impl Into<String>) {
        let mut args = self.cli_args.borrow_mut();
        args.push(format!("--{flag}"));
        args.push(value.into());
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["sailroute".to_owned(), "route".to_owned()];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn stdout(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RouteWorld {
    RouteWorld::default()
}

#[given("a destination {distance} metres away on {heading} degrees")]
fn destination_relative(#[from(world)] world: &RouteWorld, distance: String, heading: String) {
    world.push_flag(ARG_DEST_HEADING, heading);
    world.push_flag(ARG_DEST_DISTANCE, distance);
}

#[given("a start position of {position}")]
fn start_position(#[from(world)] world: &RouteWorld, position: String) {
    world.push_flag(ARG_FROM, position);
}

#[given("a destination position of {position}")]
fn destination_position(#[from(world)] world: &RouteWorld, position: String) {
    world.push_flag(ARG_TO, position);
}

#[given("wind from {heading} degrees at {speed} knots")]
fn wind(#[from(world)] world: &RouteWorld, heading: String, speed: String) {
    world.push_flag(ARG_WIND_HEADING, heading);
    world.push_flag(ARG_WIND_SPEED, speed);
}

#[given("wind from {heading} degrees with no speed")]
fn wind_without_speed(#[from(world)] world: &RouteWorld, heading: String) {
    world.push_flag(ARG_WIND_HEADING, heading);
}

#[given("JSON output is requested")]
fn json_output(#[from(world)] world: &RouteWorld) {
    world.push_flag(ARG_FORMAT, "json");
}

#[when("I run the route command")]
fn run_route_command(#[from(world)] world: &RouteWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Route(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_route_with(args, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds with {count} routes in the JSON plan")]
fn succeeds_with_routes(#[from(world)] world: &RouteWorld, count: usize) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let plan: RoutePlan =
        serde_json::from_str(&world.stdout()).expect("output should be a JSON route plan");
    assert_eq!(plan.routes.len(), count);
    assert_eq!(plan.selected, 0);
    assert!(plan.waypoints.is_none());
}

#[then("the JSON plan lists {count} waypoints")]
fn plan_lists_waypoints(#[from(world)] world: &RouteWorld, count: usize) {
    let plan: RoutePlan =
        serde_json::from_str(&world.stdout()).expect("output should be a JSON route plan");
    let waypoints = plan.waypoints.expect("waypoints should be present");
    assert_eq!(waypoints.len(), count);
}

#[then("the output includes {text}")]
fn output_includes(#[from(world)] world: &RouteWorld, text: String) {
    let expected = text.trim_matches('"');
    let stdout = world.stdout();
    assert!(
        stdout.lines().any(|line| line == expected),
        "expected {expected:?} in {stdout:?}"
    );
}

#[then("the command fails because {field} is missing")]
fn fails_missing(#[from(world)] world: &RouteWorld, field: String) {
    match &*world.error() {
        CliError::MissingArgument { field: missing, .. } => assert_eq!(*missing, field),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the destination is ambiguous")]
fn fails_ambiguous(#[from(world)] world: &RouteWorld) {
    match &*world.error() {
        CliError::ConflictingDestination { first, second } => {
            assert_eq!(*first, ARG_DEST_HEADING);
            assert_eq!(*second, ARG_TO);
        }
        other => panic!("expected ConflictingDestination, found {other:?}"),
    }
}

macro_rules! register_route_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/route_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RouteWorld) {
            let _ = world;
        }
    };
}

register_route_scenario!(route_json_upwind, "planning an upwind route as JSON");
register_route_scenario!(route_text_reach, "printing instructions for a beam reach");
register_route_scenario!(route_between_positions, "planning between two positions");
register_route_scenario!(route_missing_wind_speed, "rejecting a missing wind speed");
register_route_scenario!(route_conflicting_destination, "rejecting two destination forms");
