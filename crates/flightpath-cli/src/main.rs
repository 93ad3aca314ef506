use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightpath_lib::{plan_route, CityGraph, CityId, Error as LibError, RouteMode, RouteRequest};

mod schedule;

#[derive(Parser, Debug)]
#[command(version, about = "Flight schedule queries and itinerary planning")]
struct Cli {
    /// Schedule file describing the cities and flights.
    #[arg(long)]
    schedule: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the cities in the schedule.
    Cities {
        /// Include adjacency and departing flights per city.
        #[arg(long)]
        verbose: bool,
    },
    /// Check whether any direct flight connects two cities.
    Direct {
        /// Origin city name or code.
        from: String,
        /// Destination city name or code.
        to: String,
    },
    /// List all flights departing from a city.
    Departures {
        /// City name or code.
        city: String,
    },
    /// List all flights arriving at a city.
    Arrivals {
        /// City name or code.
        city: String,
    },
    /// Plan an itinerary between two cities.
    Route {
        /// Origin city name or code.
        from: String,
        /// Destination city name or code.
        to: String,
        /// Local 24-hour departure time, e.g. 0700.
        #[arg(long)]
        depart: i32,
        /// Planning mode.
        #[arg(long, value_enum, default_value = "fewest-stops")]
        mode: ModeArg,
        /// Emit the itinerary as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Write the graph out to a file.
    Dump {
        /// Output file path.
        path: PathBuf,
        /// Include adjacency and departing flights per city.
        #[arg(long)]
        verbose: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    /// Fewest connecting flights, then the fastest timing on that sequence.
    FewestStops,
    /// Fastest elapsed time over the whole network.
    ShortestTime,
}

impl From<ModeArg> for RouteMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::FewestStops => RouteMode::FewestStops,
            ModeArg::ShortestTime => RouteMode::ShortestTime,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let graph = schedule::load_schedule(&cli.schedule)?;

    match cli.command {
        Command::Cities { verbose } => {
            print!("{}", schedule::dump_graph(&graph, verbose));
            Ok(())
        }
        Command::Direct { from, to } => handle_direct(&graph, &from, &to),
        Command::Departures { city } => handle_departures(&graph, &city),
        Command::Arrivals { city } => handle_arrivals(&graph, &city),
        Command::Route {
            from,
            to,
            depart,
            mode,
            json,
        } => handle_route(&graph, &from, &to, depart, mode, json),
        Command::Dump { path, verbose } => {
            fs::write(&path, schedule::dump_graph(&graph, verbose))
                .with_context(|| format!("failed to write graph to {}", path.display()))?;
            println!("Wrote graph to {}", path.display());
            Ok(())
        }
    }
}

fn handle_direct(graph: &CityGraph, from: &str, to: &str) -> Result<()> {
    let from_id = resolve(graph, from)?;
    let to_id = resolve(graph, to)?;
    let to_code = graph.city(to_id).code();

    if graph.has_edge(from_id, to_code) {
        println!("Yes, there is at least one direct flight:");
        for flight in graph.flights_between(from_id, to_code) {
            println!("  {}", flight.describe(graph));
        }
    } else {
        println!("No direct flight.");
    }
    Ok(())
}

fn handle_departures(graph: &CityGraph, city: &str) -> Result<()> {
    let id = resolve(graph, city)?;
    let flights = graph.flights_from(id);
    if flights.is_empty() {
        println!("No flights depart from {}.", graph.city(id).name());
        return Ok(());
    }
    println!("Flights from {}:", graph.city(id).name());
    for flight in flights {
        println!("  {}", flight.describe(graph));
    }
    Ok(())
}

fn handle_arrivals(graph: &CityGraph, city: &str) -> Result<()> {
    let id = resolve(graph, city)?;
    let arrivals = graph.flights_to(graph.city(id).code());
    if arrivals.is_empty() {
        println!("No flights go to {}.", graph.city(id).name());
        return Ok(());
    }
    println!("Flights to {}:", graph.city(id).name());
    for (origin, flight) in arrivals {
        println!("  from {}: {}", graph.city(origin).name(), flight.describe(graph));
    }
    Ok(())
}

fn handle_route(graph: &CityGraph, from: &str, to: &str, depart: i32, mode: ModeArg, json: bool) -> Result<()> {
    let request = RouteRequest {
        start: from.to_string(),
        finish: to.to_string(),
        depart_clock: depart,
        mode: mode.into(),
    };
    let itinerary = plan_route(graph, &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&itinerary)?);
    } else {
        print!("{}", itinerary.render());
    }
    Ok(())
}

fn resolve(graph: &CityGraph, key: &str) -> Result<CityId> {
    Ok(graph.resolve(key).ok_or_else(|| LibError::UnknownCity {
        name: key.to_string(),
    })?)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
