//! High-level itinerary planning entry points.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::itinerary::Itinerary;
use crate::network::{CityGraph, CityId};
use crate::search::{fewest_stops, shortest_time};
use crate::subgraph::project_onto_path;

/// Supported planning modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteMode {
    /// Fewest connecting flights, then the fastest timing along that fixed
    /// airport sequence.
    FewestStops,
    /// Fastest elapsed time over the whole network, ignoring hop count.
    ShortestTime,
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteMode::FewestStops => "fewest-stops",
            RouteMode::ShortestTime => "shortest-time",
        };
        f.write_str(value)
    }
}

/// High-level itinerary request. City fields accept a display name or an
/// airport code.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub finish: String,
    /// Local 24-hour clock time at which the traveller sets out.
    pub depart_clock: i32,
    pub mode: RouteMode,
}

impl RouteRequest {
    /// Convenience constructor for fewest-stops planning.
    pub fn fewest_stops(start: impl Into<String>, finish: impl Into<String>, depart_clock: i32) -> Self {
        Self {
            start: start.into(),
            finish: finish.into(),
            depart_clock,
            mode: RouteMode::FewestStops,
        }
    }

    /// Convenience constructor for whole-network shortest-time planning.
    pub fn shortest_time(start: impl Into<String>, finish: impl Into<String>, depart_clock: i32) -> Self {
        Self {
            start: start.into(),
            finish: finish.into(),
            depart_clock,
            mode: RouteMode::ShortestTime,
        }
    }
}

/// Compute an itinerary for the requested mode. An unreachable finish is a
/// normal outcome surfaced as [`Error::RouteNotFound`].
pub fn plan_route(graph: &CityGraph, request: &RouteRequest) -> Result<Itinerary> {
    let start = resolve(graph, &request.start)?;
    let finish = resolve(graph, &request.finish)?;
    debug!(
        mode = %request.mode,
        start = graph.city(start).code(),
        finish = graph.city(finish).code(),
        "planning itinerary"
    );

    let itinerary = match request.mode {
        RouteMode::ShortestTime => {
            let tree = shortest_time(graph, start, request.depart_clock);
            Itinerary::from_time_tree(graph, &tree, finish)
        }
        RouteMode::FewestStops => minimize_time_on_path(graph, start, finish, request.depart_clock),
    };

    itinerary.ok_or_else(|| Error::RouteNotFound {
        start: request.start.clone(),
        finish: request.finish.clone(),
    })
}

/// Run the fewest-stops search, restrict the graph to the airport sequence
/// it found, and time the journey along that sequence: the itinerary that
/// minimizes elapsed time given the constraint of being a minimum-stop path.
/// Returns `None` when no flight chain connects the two cities.
pub fn minimize_time_on_path(graph: &CityGraph, start: CityId, finish: CityId, depart_clock: i32) -> Option<Itinerary> {
    let hop_tree = fewest_stops(graph, start);
    let restricted = project_onto_path(graph, &hop_tree, finish)?;
    let new_start = restricted.city_by_code(graph.city(start).code())?;
    let new_finish = restricted.city_by_code(graph.city(finish).code())?;
    let time_tree = shortest_time(&restricted, new_start, depart_clock);
    Itinerary::from_time_tree(&restricted, &time_tree, new_finish)
}

fn resolve(graph: &CityGraph, key: &str) -> Result<CityId> {
    graph.resolve(key).ok_or_else(|| Error::UnknownCity {
        name: key.to_string(),
    })
}
