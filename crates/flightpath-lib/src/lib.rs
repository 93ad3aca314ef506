//! Flightpath library entry points.
//!
//! This crate models a directed graph of airports and scheduled flights and
//! answers two itinerary questions: the path between two airports with the
//! fewest connecting flights, and the timing through a fixed airport
//! sequence that minimizes total elapsed real-world time, honoring per-city
//! time-zone offsets and a minimum legal connection. Higher-level consumers
//! (the CLI) should only depend on the functions exported here.

#![deny(warnings)]

pub mod clock;
pub mod error;
pub mod itinerary;
pub mod network;
pub mod routing;
pub mod search;
pub mod subgraph;

pub use error::{Error, Result};
pub use itinerary::{Itinerary, Leg};
pub use network::{City, CityGraph, CityId, Flight};
pub use routing::{minimize_time_on_path, plan_route, RouteMode, RouteRequest};
pub use search::{fewest_stops, shortest_time, HopTree, TimeTree};
pub use subgraph::project_onto_path;
