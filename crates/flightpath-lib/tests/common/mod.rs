#![allow(dead_code)]

use flightpath_lib::CityGraph;

/// Three-city chain ALB -> CHI -> LAX plus an isolated NYC.
pub fn sample_network() -> CityGraph {
    let mut graph = CityGraph::new();
    graph.add_city("ALB", "Albuquerque", -500, 10.0, 20.0).unwrap();
    graph.add_city("CHI", "Chicago", -600, 30.0, 40.0).unwrap();
    graph.add_city("LAX", "Los Angeles", -800, 50.0, 60.0).unwrap();
    graph.add_city("NYC", "New York", -500, 70.0, 80.0).unwrap();
    graph.add_flight("ALB", "CHI", 800, 830).unwrap();
    graph.add_flight("CHI", "LAX", 1200, 1400).unwrap();
    graph
}

/// Diamond in a single time zone: A reaches D both through B (listed first,
/// slow timing) and through C (fast timing).
pub fn diamond_network() -> CityGraph {
    let mut graph = CityGraph::new();
    graph.add_city("AAA", "Alpha", 0, 0.0, 0.0).unwrap();
    graph.add_city("BBB", "Bravo", 0, 1.0, 0.0).unwrap();
    graph.add_city("CCC", "Charlie", 0, 0.0, 1.0).unwrap();
    graph.add_city("DDD", "Delta", 0, 1.0, 1.0).unwrap();
    graph.add_flight("AAA", "BBB", 600, 700).unwrap();
    graph.add_flight("AAA", "CCC", 600, 630).unwrap();
    graph.add_flight("BBB", "DDD", 2000, 2100).unwrap();
    graph.add_flight("CCC", "DDD", 800, 830).unwrap();
    graph
}
