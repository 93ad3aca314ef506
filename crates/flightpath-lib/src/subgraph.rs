//! Projection of a graph onto a fewest-stops path.

use std::collections::HashMap;

use tracing::debug;

use crate::network::{CityGraph, CityId};
use crate::search::HopTree;

/// Materialize a new graph containing only the cities on the hop-count path
/// from the tree's start to `finish`, and only the flights that stay on that
/// path.
///
/// The parent chain is walked from `finish` back to the start and fresh
/// vertices are inserted in that order, copying identity, offset, and
/// position but never adjacency. Every path city except the finish then
/// receives exactly the original flights whose destination is the next hop
/// the fewest-stops search recorded; flights to anything off the path are
/// dropped. A later time search over the result can therefore only consider
/// itineraries that follow this fixed airport sequence.
///
/// Returns `None` when `finish` was not reached by the search.
pub fn project_onto_path(graph: &CityGraph, tree: &HopTree, finish: CityId) -> Option<CityGraph> {
    let path = tree.path_to(finish)?;

    let mut restricted = CityGraph::new();
    let mut new_ids: HashMap<CityId, CityId> = HashMap::new();
    for &id in path.iter().rev() {
        let city = graph.city(id);
        // Path vertices are distinct, so the keys cannot collide.
        let new_id = restricted
            .add_city(city.code(), city.name(), city.gmt_offset(), city.x(), city.y())
            .ok()?;
        new_ids.insert(id, new_id);
    }

    for pair in path.windows(2) {
        let (from, next) = (pair[0], pair[1]);
        let new_from = *new_ids.get(&from)?;
        let new_next = *new_ids.get(&next)?;
        for flight in graph.flights_between(from, graph.city(next).code()) {
            restricted.attach_flight(new_from, flight.reattached(new_next));
        }
    }

    debug!(
        cities = restricted.len(),
        finish = graph.city(finish).code(),
        "projected fewest-stops path onto a restricted graph"
    );
    Some(restricted)
}
