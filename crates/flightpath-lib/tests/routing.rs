mod common;

use common::{diamond_network, sample_network};
use flightpath_lib::{plan_route, Error, RouteMode, RouteRequest};

#[test]
fn fewest_stops_plan_times_the_whole_journey() {
    let graph = sample_network();
    let request = RouteRequest::fewest_stops("ALB", "LAX", 700);
    let itinerary = plan_route(&graph, &request).expect("route exists");

    assert_eq!(itinerary.start, "ALB");
    assert_eq!(itinerary.finish, "LAX");
    assert_eq!(itinerary.hop_count(), 2);
    assert_eq!(itinerary.total_minutes, 600);

    let legs = &itinerary.legs;
    assert_eq!(legs[0].arrive_local, "7:00 am");
    assert_eq!(legs[0].depart_local, None);
    assert_eq!(legs[1].depart_local.as_deref(), Some("8:00 am"));
    assert_eq!(legs[1].arrive_local, "8:30 am");
    assert_eq!(legs[1].leg_minutes, 150);
    assert_eq!(legs[2].depart_local.as_deref(), Some("12:00 pm"));
    assert_eq!(legs[2].arrive_local, "2:00 pm");
    // 210 minute layover (well over the 30 minute minimum) plus 240 flying.
    assert_eq!(legs[2].leg_minutes, 450);
}

#[test]
fn rendered_itinerary_reads_in_travel_order() {
    let graph = sample_network();
    let itinerary = plan_route(&graph, &RouteRequest::fewest_stops("ALB", "LAX", 700)).unwrap();
    let text = itinerary.render();

    assert!(text.starts_with("Start at Albuquerque at 7:00 am\n"));
    assert!(text.contains("depart at 8:00 am to Chicago, arriving at 8:30 am"));
    assert!(text.contains("depart at 12:00 pm to Los Angeles, arriving at 2:00 pm"));
    assert!(text.ends_with("Total cost = 10 hrs, 0 mins\n"));
}

#[test]
fn requests_accept_display_names() {
    let graph = sample_network();
    let request = RouteRequest::fewest_stops("Albuquerque", "Los Angeles", 700);
    let itinerary = plan_route(&graph, &request).expect("route exists");
    assert_eq!(itinerary.total_minutes, 600);
}

#[test]
fn unreachable_finish_is_a_route_not_found() {
    let graph = sample_network();
    let err = plan_route(&graph, &RouteRequest::fewest_stops("ALB", "NYC", 700)).unwrap_err();
    assert!(matches!(err, Error::RouteNotFound { .. }));
    assert!(err.to_string().contains("no route found"));

    let err = plan_route(&graph, &RouteRequest::shortest_time("ALB", "NYC", 700)).unwrap_err();
    assert!(matches!(err, Error::RouteNotFound { .. }));
}

#[test]
fn unknown_city_is_reported_before_searching() {
    let graph = sample_network();
    let err = plan_route(&graph, &RouteRequest::fewest_stops("ALB", "ZZZ", 700)).unwrap_err();
    assert!(matches!(err, Error::UnknownCity { .. }));
}

#[test]
fn path_restricted_plan_never_leaves_the_hop_count_chain() {
    let graph = diamond_network();

    // Breadth-first search records the Bravo branch, so the fewest-stops
    // plan must take it even though the Charlie branch is far faster.
    let restricted = plan_route(&graph, &RouteRequest::fewest_stops("AAA", "DDD", 600)).unwrap();
    let codes: Vec<&str> = restricted.legs.iter().map(|leg| leg.code.as_str()).collect();
    assert_eq!(codes, ["AAA", "BBB", "DDD"]);
    assert_eq!(restricted.total_minutes, 900);

    let unrestricted = plan_route(&graph, &RouteRequest::shortest_time("AAA", "DDD", 600)).unwrap();
    let codes: Vec<&str> = unrestricted.legs.iter().map(|leg| leg.code.as_str()).collect();
    assert_eq!(codes, ["AAA", "CCC", "DDD"]);
    assert_eq!(unrestricted.total_minutes, 150);
}

#[test]
fn itinerary_to_the_start_city_is_a_bare_starting_row() {
    let graph = sample_network();
    let itinerary = plan_route(&graph, &RouteRequest::fewest_stops("ALB", "ALB", 700)).unwrap();
    assert_eq!(itinerary.hop_count(), 0);
    assert_eq!(itinerary.total_minutes, 0);
    assert_eq!(itinerary.render(), "Start at Albuquerque at 7:00 am\nTotal cost = 0 hrs, 0 mins\n");
}

#[test]
fn itineraries_serialize_for_machine_consumers() {
    let graph = sample_network();
    let itinerary = plan_route(&graph, &RouteRequest::fewest_stops("ALB", "LAX", 700)).unwrap();
    let json = serde_json::to_value(&itinerary).unwrap();

    assert_eq!(json["total_minutes"], 600);
    assert_eq!(json["legs"][0]["code"], "ALB");
    assert!(json["legs"][0].get("depart_local").is_none());
    assert_eq!(json["legs"][2]["depart_local"], "12:00 pm");
    assert_eq!(serde_json::to_value(RouteMode::FewestStops).unwrap(), "fewest-stops");
}
