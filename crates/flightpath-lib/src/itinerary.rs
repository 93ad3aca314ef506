//! Itinerary reconstruction and rendering.

use std::fmt::Write;

use serde::Serialize;

use crate::clock;
use crate::network::{CityGraph, CityId};
use crate::search::TimeTree;

/// One row of an itinerary: the starting city, or a flown leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leg {
    pub code: String,
    pub name: String,
    /// Local wall-clock arrival at this city. On the starting row this is
    /// the traveller's start time.
    pub arrive_local: String,
    /// Local wall-clock departure from the previous city; `None` on the
    /// starting row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depart_local: Option<String>,
    /// Minutes this leg added to the running total (waiting plus flying);
    /// zero on the starting row.
    pub leg_minutes: u32,
}

/// Ordered itinerary from a search start to a chosen finish city, with
/// per-leg timing and cumulative cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    pub start: String,
    pub finish: String,
    pub legs: Vec<Leg>,
    pub total_minutes: u32,
}

impl Itinerary {
    /// Walk parent references from `finish` back to the tree's start and
    /// emit rows in travel order. Local times are re-derived by shifting the
    /// recorded GMT minutes by the owning city's offset; each leg's cost is
    /// the difference between its total and its parent's total. Returns
    /// `None` when `finish` kept its sentinel cost, i.e. no path exists.
    pub fn from_time_tree(graph: &CityGraph, tree: &TimeTree, finish: CityId) -> Option<Itinerary> {
        let total_minutes = tree.cost(finish)?;
        let path = tree.path_to(finish)?;

        let mut legs = Vec::with_capacity(path.len());
        for (position, &id) in path.iter().enumerate() {
            let city = graph.city(id);
            let arrive_local =
                clock::minute_to_clock_string(tree.arrive_at(id)? + city.gmt_offset_minutes());
            if position == 0 {
                legs.push(Leg {
                    code: city.code().to_string(),
                    name: city.name().to_string(),
                    arrive_local,
                    depart_local: None,
                    leg_minutes: 0,
                });
                continue;
            }

            let parent = path[position - 1];
            let parent_city = graph.city(parent);
            let depart_local = clock::minute_to_clock_string(
                tree.depart_parent(id)? + parent_city.gmt_offset_minutes(),
            );
            legs.push(Leg {
                code: city.code().to_string(),
                name: city.name().to_string(),
                arrive_local,
                depart_local: Some(depart_local),
                leg_minutes: tree.cost(id)? - tree.cost(parent)?,
            });
        }

        Some(Itinerary {
            start: graph.city(path[0]).code().to_string(),
            finish: graph.city(finish).code().to_string(),
            legs,
            total_minutes,
        })
    }

    /// Number of flights in the itinerary.
    pub fn hop_count(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }

    /// Render the itinerary in travel order, one line per row, followed by
    /// the total elapsed time.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        for leg in &self.legs {
            match &leg.depart_local {
                None => {
                    let _ = writeln!(buffer, "Start at {} at {}", leg.name, leg.arrive_local);
                }
                Some(depart) => {
                    let _ = writeln!(
                        buffer,
                        "depart at {} to {}, arriving at {} (additional cost {})",
                        depart,
                        leg.name,
                        leg.arrive_local,
                        clock::format_duration(leg.leg_minutes as i32)
                    );
                }
            }
        }
        let _ = writeln!(
            buffer,
            "Total cost = {}",
            clock::format_duration(self.total_minutes as i32)
        );
        buffer
    }
}
