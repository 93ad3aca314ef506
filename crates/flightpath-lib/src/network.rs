//! The city/flight schedule graph.
//!
//! Cities live in an arena indexed by [`CityId`]; every cross-reference in
//! the crate (adjacency, flight destinations, search parents) is an id into
//! that arena, so nothing owns anything else cyclically. Two lookup maps key
//! the arena by unique airport code and unique display name. Cities and
//! flights are never removed once added.

use std::collections::HashMap;

use crate::clock;
use crate::error::{Error, Result};

/// Index of a city within the graph's vertex arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(usize);

impl CityId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A scheduled departure, stored on the origin city's outgoing list.
///
/// Times are GMT-normalized minutes of day; both endpoints' GMT offsets (in
/// minutes) are retained so local wall-clock times can be re-rendered for
/// display. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    dest: CityId,
    depart: i32,
    arrive: i32,
    duration: i32,
    origin_offset_minutes: i32,
    dest_offset_minutes: i32,
}

impl Flight {
    fn new(dest: CityId, depart: i32, arrive: i32, origin_offset_minutes: i32, dest_offset_minutes: i32) -> Self {
        Self {
            dest,
            depart,
            arrive,
            duration: clock::waiting_time(depart, arrive),
            origin_offset_minutes,
            dest_offset_minutes,
        }
    }

    /// Copy of this flight pointing at a different destination id, used when
    /// reattaching flights into a projected subgraph.
    pub(crate) fn reattached(&self, dest: CityId) -> Flight {
        Flight {
            dest,
            ..self.clone()
        }
    }

    pub fn dest(&self) -> CityId {
        self.dest
    }

    /// GMT-normalized departure minute.
    pub fn depart(&self) -> i32 {
        self.depart
    }

    /// GMT-normalized arrival minute.
    pub fn arrive(&self) -> i32 {
        self.arrive
    }

    /// Time in the air, computed once at construction; wraps past midnight
    /// when the arrival minute is numerically smaller than the departure.
    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// Departure rendered in the origin city's wall-clock time.
    pub fn local_depart_string(&self) -> String {
        clock::minute_to_clock_string(self.depart + self.origin_offset_minutes)
    }

    /// Arrival rendered in the destination city's wall-clock time.
    pub fn local_arrive_string(&self) -> String {
        clock::minute_to_clock_string(self.arrive + self.dest_offset_minutes)
    }

    /// One-line description, e.g. "to Chicago; 8:00 am to 8:30 am; takes
    /// 1 hrs, 30 mins".
    pub fn describe(&self, graph: &CityGraph) -> String {
        format!(
            "to {}; {} to {}; takes {}",
            graph.city(self.dest).name(),
            self.local_depart_string(),
            self.local_arrive_string(),
            clock::format_duration(self.duration)
        )
    }
}

/// A vertex: identity, time zone offset, map position, and the outgoing
/// schedule. Coordinates are for distance display only and never feed a
/// search cost.
#[derive(Debug, Clone)]
pub struct City {
    name: String,
    code: String,
    gmt_offset: i32,
    x: f64,
    y: f64,
    neighbors: Vec<CityId>,
    flights: Vec<Flight>,
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Offset from GMT in clock form (hours*100 + minutes, signed).
    pub fn gmt_offset(&self) -> i32 {
        self.gmt_offset
    }

    /// Offset from GMT in minutes.
    pub fn gmt_offset_minutes(&self) -> i32 {
        clock::clock_to_minute_of_day(self.gmt_offset)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Distinct reachable cities; each appears at most once regardless of
    /// how many flights connect the pair.
    pub fn neighbors(&self) -> &[CityId] {
        &self.neighbors
    }

    /// Outgoing flights, possibly several to the same neighboring city.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Euclidean distance between the two cities' map positions.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Directed graph of cities and scheduled flights.
#[derive(Debug, Clone, Default)]
pub struct CityGraph {
    cities: Vec<City>,
    by_code: HashMap<String, CityId>,
    by_name: HashMap<String, CityId>,
}

impl CityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Insert a new city. Codes are stored and matched ASCII-uppercased;
    /// both the code and the display name must be unique. A duplicate key is
    /// a non-fatal error the caller may skip over.
    pub fn add_city(&mut self, code: &str, name: &str, gmt_offset: i32, x: f64, y: f64) -> Result<CityId> {
        let code = code.to_ascii_uppercase();
        if self.by_code.contains_key(&code) {
            return Err(Error::DuplicateCode { code });
        }
        if self.by_name.contains_key(name) {
            return Err(Error::DuplicateName {
                name: name.to_string(),
            });
        }

        let id = CityId(self.cities.len());
        self.by_code.insert(code.clone(), id);
        self.by_name.insert(name.to_string(), id);
        self.cities.push(City {
            name: name.to_string(),
            code,
            gmt_offset,
            x,
            y,
            neighbors: Vec::new(),
            flights: Vec::new(),
        });
        Ok(id)
    }

    /// Add a flight between two cities identified by code. Departure and
    /// arrival are local 24-hour clock times, each interpreted in its own
    /// city's time zone.
    pub fn add_flight(&mut self, start_code: &str, dest_code: &str, depart_clock: i32, arrive_clock: i32) -> Result<()> {
        let start = self.city_by_code(start_code).ok_or_else(|| Error::UnknownCity {
            name: start_code.to_string(),
        })?;
        let dest = self.city_by_code(dest_code).ok_or_else(|| Error::UnknownCity {
            name: dest_code.to_string(),
        })?;
        self.add_flight_between(start, dest, depart_clock, arrive_clock);
        Ok(())
    }

    /// Id-based variant of [`CityGraph::add_flight`]; code resolution has
    /// already happened, so this cannot fail.
    pub fn add_flight_between(&mut self, start: CityId, dest: CityId, depart_clock: i32, arrive_clock: i32) {
        let origin_offset = self.cities[start.0].gmt_offset;
        let dest_offset = self.cities[dest.0].gmt_offset;
        let flight = Flight::new(
            dest,
            clock::local_clock_to_gmt_minutes(depart_clock, origin_offset),
            clock::local_clock_to_gmt_minutes(arrive_clock, dest_offset),
            clock::clock_to_minute_of_day(origin_offset),
            clock::clock_to_minute_of_day(dest_offset),
        );
        self.attach_flight(start, flight);
    }

    /// Append an already-built flight, adding the adjacency edge only when
    /// no edge to that destination code exists yet.
    pub(crate) fn attach_flight(&mut self, start: CityId, flight: Flight) {
        let dest = flight.dest();
        let dest_code = self.cities[dest.0].code.clone();
        let duplicate_edge = self.has_edge(start, &dest_code);
        let start_city = &mut self.cities[start.0];
        start_city.flights.push(flight);
        if !duplicate_edge {
            start_city.neighbors.push(dest);
        }
    }

    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.0]
    }

    pub fn city_by_code(&self, code: &str) -> Option<CityId> {
        self.by_code.get(&code.to_ascii_uppercase()).copied()
    }

    pub fn city_by_name(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    /// Resolve a user-supplied key, trying the display name first and then
    /// the code.
    pub fn resolve(&self, key: &str) -> Option<CityId> {
        self.city_by_name(key).or_else(|| self.city_by_code(key))
    }

    pub fn cities(&self) -> impl Iterator<Item = (CityId, &City)> {
        self.cities
            .iter()
            .enumerate()
            .map(|(index, city)| (CityId(index), city))
    }

    /// Whether a direct edge (at least one flight) exists from `from` to the
    /// city with the given code. Dedup and matching are by code equality.
    pub fn has_edge(&self, from: CityId, dest_code: &str) -> bool {
        self.cities[from.0]
            .neighbors
            .iter()
            .any(|&id| self.cities[id.0].code.eq_ignore_ascii_case(dest_code))
    }

    pub fn flights_from(&self, from: CityId) -> &[Flight] {
        &self.cities[from.0].flights
    }

    /// Outgoing flights from `from` restricted to a destination code.
    pub fn flights_between<'a>(&'a self, from: CityId, dest_code: &'a str) -> impl Iterator<Item = &'a Flight> {
        self.cities[from.0]
            .flights
            .iter()
            .filter(move |flight| self.cities[flight.dest().0].code.eq_ignore_ascii_case(dest_code))
    }

    /// Every flight in the graph arriving at the given destination code,
    /// paired with its origin city.
    pub fn flights_to(&self, dest_code: &str) -> Vec<(CityId, &Flight)> {
        let Some(dest) = self.city_by_code(dest_code) else {
            return Vec::new();
        };
        self.cities
            .iter()
            .enumerate()
            .flat_map(|(index, city)| {
                city.flights
                    .iter()
                    .filter(move |flight| flight.dest() == dest)
                    .map(move |flight| (CityId(index), flight))
            })
            .collect()
    }
}
