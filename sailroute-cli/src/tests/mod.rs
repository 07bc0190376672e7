//! Shared test harness modules for the sailroute CLI.

use super::*;
use crate::route::{Destination, RouteConfig, run_route_with};

mod route_steps;
