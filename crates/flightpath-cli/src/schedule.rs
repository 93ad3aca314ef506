//! Flat-file schedule ingestion and graph dump.
//!
//! The schedule format has three sections. A leading `#` comment block is
//! followed by one city per line (`CODE diffGMT x y Name...`) until a line
//! starting with `!`. Next comes a blank-line-terminated connection section,
//! which is skipped entirely: the flight section below carries the same
//! information in full. After further `#` comments, each remaining line is a
//! flight (`AIRLINE [FLIGHTNO] FROM TIME TO TIME`), where times look like
//! `805A` or `1215P` and the airline and flight number are sometimes fused
//! into a single token.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use flightpath_lib::CityGraph;

/// Read and parse a schedule file.
pub fn load_schedule(path: &Path) -> Result<CityGraph> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read schedule from {}", path.display()))?;
    let graph = parse_schedule(&text)
        .with_context(|| format!("failed to parse schedule {}", path.display()))?;
    debug!(
        cities = graph.len(),
        path = %path.display(),
        "loaded schedule"
    );
    Ok(graph)
}

enum Section {
    Cities,
    Connections,
    Flights,
}

/// Parse schedule text into a graph. Malformed city lines are fatal;
/// duplicate cities and flights naming unknown codes are reported and
/// skipped so one bad row cannot sink the whole schedule.
pub fn parse_schedule(text: &str) -> Result<CityGraph> {
    let mut graph = CityGraph::new();
    let mut section = Section::Cities;

    for line in text.lines() {
        let trimmed = line.trim();
        match section {
            Section::Cities => {
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                if trimmed.starts_with('!') {
                    section = Section::Connections;
                    continue;
                }
                parse_city_line(&mut graph, trimmed)?;
            }
            Section::Connections => {
                if trimmed.is_empty() {
                    section = Section::Flights;
                }
            }
            Section::Flights => {
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                if let Err(err) = parse_flight_line(&mut graph, trimmed) {
                    warn!(error = %err, line = trimmed, "skipping flight line");
                }
            }
        }
    }

    Ok(graph)
}

fn parse_city_line(graph: &mut CityGraph, line: &str) -> Result<()> {
    let mut tokens = line.split_whitespace();
    let code = tokens.next().context("city line missing a code")?;
    let gmt_offset: i32 = tokens
        .next()
        .context("city line missing a GMT offset")?
        .parse()
        .with_context(|| format!("bad GMT offset in city line {line:?}"))?;
    let x: f64 = tokens
        .next()
        .context("city line missing an x coordinate")?
        .parse()
        .with_context(|| format!("bad x coordinate in city line {line:?}"))?;
    let y: f64 = tokens
        .next()
        .context("city line missing a y coordinate")?
        .parse()
        .with_context(|| format!("bad y coordinate in city line {line:?}"))?;
    let name = tokens.collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        bail!("city line missing a name: {line:?}");
    }

    if let Err(err) = graph.add_city(code, &name, gmt_offset, x, y) {
        warn!(error = %err, "skipping duplicate city line");
    }
    Ok(())
}

fn parse_flight_line(graph: &mut CityGraph, line: &str) -> Result<()> {
    let mut tokens = line.split_whitespace();
    let airline = tokens.next().context("flight line missing an airline")?;
    // Airline codes are two characters, so a longer first token means the
    // airline and flight number were fused (e.g. "CO1594") and there is no
    // separate number token to skip.
    if airline.len() <= 2 {
        tokens.next().context("flight line missing a flight number")?;
    }
    let from = tokens.next().context("flight line missing an origin code")?;
    let depart = clock_from_12h(tokens.next().context("flight line missing a departure time")?)?;
    let to = tokens.next().context("flight line missing a destination code")?;
    let arrive = clock_from_12h(tokens.next().context("flight line missing an arrival time")?)?;

    graph.add_flight(from, to, depart, arrive)?;
    Ok(())
}

/// Convert an `805A` / `1215P` style time into a 24-hour clock integer.
fn clock_from_12h(token: &str) -> Result<i32> {
    if token.len() < 2 || !token.is_ascii() {
        bail!("malformed time {token:?}");
    }
    let (digits, suffix) = token.split_at(token.len() - 1);
    let clock: i32 = digits
        .parse()
        .with_context(|| format!("malformed time {token:?}"))?;
    let hours = clock / 100;
    match suffix {
        "A" | "a" => Ok(if hours == 12 { clock - 1200 } else { clock }),
        "P" | "p" => Ok(if hours == 12 { clock } else { clock + 1200 }),
        _ => bail!("time {token:?} must end in A or P"),
    }
}

/// Render the graph for listing or writing back out to a file. The terse
/// form is one `Name, CODE` line per city; the verbose form includes each
/// city's offset, position, adjacency (with map distances), and departing
/// flights in local wall-clock time.
pub fn dump_graph(graph: &CityGraph, verbose: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Num cities = {}", graph.len());
    for (_, city) in graph.cities() {
        if !verbose {
            let _ = writeln!(out, "{}, {}", city.name(), city.code());
            continue;
        }
        let _ = writeln!(out, "\nname = {}", city.name());
        let _ = writeln!(out, "code = {}", city.code());
        let _ = writeln!(out, "diffGMT = {}", city.gmt_offset());
        let _ = writeln!(out, "x = {}, y = {}", city.x(), city.y());
        let _ = writeln!(out, "adjacent cities:");
        for &neighbor in city.neighbors() {
            let other = graph.city(neighbor);
            let _ = writeln!(out, "  {}, distance = {:.1}", other.name(), city.distance_to(other));
        }
        let _ = writeln!(out, "departing flights:");
        for flight in city.flights() {
            let _ = writeln!(out, "  {}", flight.describe(graph));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# tiny schedule
AAA 0 0 0 Alpha
BBB -100 3 4 Bravo Town
!
AAA BBB

# airline flight from depart to arrive
AA 1 AAA 805A BBB 1215P
CO1594 AAA 1200A BBB 100A
XX 9 AAA 900A ZZZ 1000A
";

    #[test]
    fn parses_cities_flights_and_fused_airline_tokens() {
        let graph = parse_schedule(SAMPLE).unwrap();
        assert_eq!(graph.len(), 2);

        let aaa = graph.city_by_code("AAA").unwrap();
        assert_eq!(graph.city_by_name("Bravo Town"), graph.city_by_code("BBB"));
        // The unknown-destination line was skipped, the other two kept.
        assert_eq!(graph.flights_from(aaa).len(), 2);
    }

    #[test]
    fn twelve_hour_times_convert_to_24_hour_clock() {
        assert_eq!(clock_from_12h("805A").unwrap(), 805);
        assert_eq!(clock_from_12h("805P").unwrap(), 2005);
        assert_eq!(clock_from_12h("1215P").unwrap(), 1215);
        assert_eq!(clock_from_12h("1200A").unwrap(), 0);
        assert!(clock_from_12h("805").is_err());
        assert!(clock_from_12h("X").is_err());
    }

    #[test]
    fn duplicate_city_lines_are_skipped_not_fatal() {
        let text = "AAA 0 0 0 Alpha\nAAA 0 0 0 Alpha Again\n!\n\n";
        let graph = parse_schedule(text).unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn dump_round_trips_the_terse_listing() {
        let graph = parse_schedule(SAMPLE).unwrap();
        let terse = dump_graph(&graph, false);
        assert!(terse.starts_with("Num cities = 2\n"));
        assert!(terse.contains("Alpha, AAA"));
        assert!(terse.contains("Bravo Town, BBB"));

        let verbose = dump_graph(&graph, true);
        assert!(verbose.contains("diffGMT = -100"));
        assert!(verbose.contains("departing flights:"));
        assert!(verbose.contains("to Bravo Town;"));
    }
}
