use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/flights.txt")
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("flightpath-cli").expect("binary builds");
    cmd.arg("--schedule").arg(fixture_path());
    cmd
}

#[test]
fn cities_lists_every_city() {
    cmd()
        .arg("cities")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Num cities = 4")
                .and(predicate::str::contains("Albuquerque, ALB"))
                .and(predicate::str::contains("Los Angeles, LAX")),
        );
}

#[test]
fn verbose_cities_includes_flights() {
    cmd()
        .args(["cities", "--verbose"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("departing flights:")
                .and(predicate::str::contains("to Chicago; 8:00 am to 8:30 am")),
        );
}

#[test]
fn direct_flight_is_found_and_listed() {
    cmd()
        .args(["direct", "ALB", "CHI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("at least one direct flight"));
}

#[test]
fn missing_direct_flight_is_reported() {
    cmd()
        .args(["direct", "ALB", "LAX"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No direct flight."));
}

#[test]
fn departures_and_arrivals_use_local_times() {
    cmd()
        .args(["departures", "Chicago"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to Los Angeles; 12:00 pm to 2:00 pm"));

    cmd()
        .args(["arrivals", "LAX"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from Chicago:"));
}

#[test]
fn route_plans_the_fewest_stops_itinerary() {
    cmd()
        .args(["route", "ALB", "LAX", "--depart", "0700"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Start at Albuquerque at 7:00 am")
                .and(predicate::str::contains("Total cost = 10 hrs, 0 mins")),
        );
}

#[test]
fn route_emits_json_on_request() {
    cmd()
        .args(["route", "ALB", "LAX", "--depart", "0700", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"total_minutes\": 600")
                .and(predicate::str::contains("\"finish\": \"LAX\"")),
        );
}

#[test]
fn unreachable_destination_fails_with_no_route() {
    cmd()
        .args(["route", "ALB", "NYC", "--depart", "0700"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route found"));
}

#[test]
fn unknown_city_fails_loudly() {
    cmd()
        .args(["route", "ALB", "ZZZ", "--depart", "0700"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown city"));
}

#[test]
fn dump_writes_the_graph_to_a_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out = dir.path().join("graph.txt");

    cmd()
        .arg("dump")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote graph to"));

    let written = std::fs::read_to_string(&out).expect("dump file exists");
    assert!(written.contains("Albuquerque, ALB"));
    assert!(written.contains("New York, NYC"));
}
