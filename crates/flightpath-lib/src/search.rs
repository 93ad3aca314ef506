//! The two shortest-path searches.
//!
//! Search state lives in per-run side tables ([`HopTree`], [`TimeTree`])
//! rather than on the vertices, so consecutive queries over the same graph
//! are independent by construction and shared reads need no coordination.
//! Both trees record parent back-references; a parent is always a vertex
//! that was already finalized with a smaller cost, so parent chains are
//! acyclic and terminate at the search's start vertex.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use tracing::debug;

use crate::clock::{local_clock_to_gmt_minutes, waiting_time, MINUTES_IN_DAY, MIN_CONNECTION_MINUTES};
use crate::network::{CityGraph, CityId};

/// Parent tree produced by the fewest-stops search. Unreached vertices keep
/// `None` for both hop count and parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopTree {
    start: CityId,
    hops: Vec<Option<u32>>,
    parents: Vec<Option<CityId>>,
}

impl HopTree {
    pub fn start(&self) -> CityId {
        self.start
    }

    /// Fewest number of flights needed to reach `city`, or `None` when it is
    /// unreachable from the start.
    pub fn hops(&self, city: CityId) -> Option<u32> {
        self.hops[city.index()]
    }

    pub fn parent(&self, city: CityId) -> Option<CityId> {
        self.parents[city.index()]
    }

    /// Walk parent references back from `finish` and return the path in
    /// start-to-finish order, or `None` when `finish` was never reached.
    pub fn path_to(&self, finish: CityId) -> Option<Vec<CityId>> {
        self.hops(finish)?;
        let mut path = vec![finish];
        let mut current = finish;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Unweighted breadth-first search over the deduplicated adjacency lists.
/// First-reached wins, which yields one valid minimum-hop-count path to
/// every reachable vertex.
pub fn fewest_stops(graph: &CityGraph, start: CityId) -> HopTree {
    debug!(start = graph.city(start).code(), "running fewest-stops search");

    let mut hops: Vec<Option<u32>> = vec![None; graph.len()];
    let mut parents: Vec<Option<CityId>> = vec![None; graph.len()];
    let mut queue = VecDeque::new();

    hops[start.index()] = Some(0);
    queue.push_back((start, 0u32));

    while let Some((current, dist)) = queue.pop_front() {
        for &next in graph.city(current).neighbors() {
            if hops[next.index()].is_some() {
                continue;
            }
            hops[next.index()] = Some(dist + 1);
            parents[next.index()] = Some(current);
            queue.push_back((next, dist + 1));
        }
    }

    HopTree {
        start,
        hops,
        parents,
    }
}

/// Cost tree produced by the minimum-time search. Costs are total elapsed
/// minutes from the start; arrival and departure minutes are GMT-normalized
/// and refer to the best-known path through each vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeTree {
    start: CityId,
    costs: Vec<Option<u32>>,
    parents: Vec<Option<CityId>>,
    arrive_at: Vec<Option<i32>>,
    depart_parent: Vec<Option<i32>>,
}

impl TimeTree {
    pub fn start(&self) -> CityId {
        self.start
    }

    /// Total elapsed minutes on the best-known path to `city`, or `None`
    /// when it is unreachable.
    pub fn cost(&self, city: CityId) -> Option<u32> {
        self.costs[city.index()]
    }

    pub fn parent(&self, city: CityId) -> Option<CityId> {
        self.parents[city.index()]
    }

    /// GMT minute of arrival at `city` on the best-known path. For the start
    /// vertex this is the traveller's converted start time.
    pub fn arrive_at(&self, city: CityId) -> Option<i32> {
        self.arrive_at[city.index()]
    }

    /// GMT minute of departure from `city`'s parent on the best-known path.
    pub fn depart_parent(&self, city: CityId) -> Option<i32> {
        self.depart_parent[city.index()]
    }

    /// Path in start-to-finish order, or `None` when `finish` kept its
    /// sentinel cost.
    pub fn path_to(&self, finish: CityId) -> Option<Vec<CityId>> {
        self.cost(finish)?;
        let mut path = vec![finish];
        let mut current = finish;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Minimum-elapsed-time search: Dijkstra with a lazy-deletion heap and a
/// state-dependent edge weight.
///
/// The weight of a flight is the waiting time at the departure airport plus
/// the flight's duration. A flight relaxed before any vertex has been
/// finalized is the trip's first leg and carries no connection minimum; on
/// every later leg a wait under [`MIN_CONNECTION_MINUTES`] forces an
/// overnight stay, adding a full day to the wait.
///
/// The main loop is bounded by the number of finalized vertices; when the
/// heap drains early the remaining vertices simply stay unreached.
pub fn shortest_time(graph: &CityGraph, start: CityId, start_clock: i32) -> TimeTree {
    let start_city = graph.city(start);
    let gmt_start = local_clock_to_gmt_minutes(start_clock, start_city.gmt_offset());
    debug!(
        start = start_city.code(),
        gmt_start, "running minimum-time search"
    );

    let mut costs: Vec<Option<u32>> = vec![None; graph.len()];
    let mut parents: Vec<Option<CityId>> = vec![None; graph.len()];
    let mut arrive_at: Vec<Option<i32>> = vec![None; graph.len()];
    let mut depart_parent: Vec<Option<i32>> = vec![None; graph.len()];
    let mut visited = vec![false; graph.len()];
    let mut queue = BinaryHeap::new();

    costs[start.index()] = Some(0);
    arrive_at[start.index()] = Some(gmt_start);
    queue.push(QueueEntry::new(start, 0));

    let mut finalized = 0usize;
    while finalized < graph.len() {
        let Some(entry) = queue.pop() else {
            break;
        };
        let current = entry.city;
        // Lazy deletion: the heap may hold stale entries for a vertex whose
        // cost was improved after this entry was pushed.
        if visited[current.index()] {
            continue;
        }
        // Only legs relaxed from the very first finalized vertex are the
        // trip's first flight; the traveller has not disembarked yet.
        let intermediate = finalized > 0;
        visited[current.index()] = true;
        finalized += 1;

        let (current_cost, current_arrival) = match (costs[current.index()], arrive_at[current.index()]) {
            (Some(cost), Some(arrival)) => (cost, arrival),
            _ => continue,
        };

        for flight in graph.flights_from(current) {
            let next = flight.dest();
            let mut wait = waiting_time(current_arrival, flight.depart());
            if intermediate && wait < MIN_CONNECTION_MINUTES {
                // Too tight to change planes; wait for tomorrow's departure.
                wait += MINUTES_IN_DAY;
            }
            let candidate = current_cost + (wait + flight.duration()) as u32;
            if costs[next.index()].map_or(true, |best| candidate < best) {
                costs[next.index()] = Some(candidate);
                arrive_at[next.index()] = Some(flight.arrive());
                depart_parent[next.index()] = Some(flight.depart());
                parents[next.index()] = Some(current);
                queue.push(QueueEntry::new(next, candidate));
            }
        }
    }

    TimeTree {
        start,
        costs,
        parents,
        arrive_at,
        depart_parent,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    city: CityId,
    cost: u32,
}

impl QueueEntry {
    fn new(city: CityId, cost: u32) -> Self {
        Self { city, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.city.cmp(&self.city))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
