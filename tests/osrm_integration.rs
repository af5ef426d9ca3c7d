//! Live checks against a running OSRM server.
//!
//! Ignored by default. Run with
//! `OSRM_BASE_URL=https://router.project-osrm.org cargo test -- --ignored`
//! or point the variable at a local `osrm-routed`.

mod fixtures;

use std::env;

use waypoint_router::osrm::{OsrmClient, OsrmConfig, TravelProfile};

use fixtures::LANDMARKS;

fn live_client() -> OsrmClient {
    env::var("OSRM_BASE_URL").expect("OSRM_BASE_URL must point at a running OSRM server");
    OsrmClient::new(OsrmConfig::from_env()).expect("build OSRM client")
}

#[test]
#[ignore = "needs a running OSRM server at OSRM_BASE_URL"]
fn osrm_table_returns_square_matrix() {
    let client = live_client();
    let locations: Vec<_> = LANDMARKS.iter().take(3).map(|l| l.coords()).collect();

    let matrix = client
        .compute_matrix(&locations, TravelProfile::Driving)
        .expect("table request");

    assert_eq!(matrix.len(), locations.len());
    for row in matrix.rows() {
        assert_eq!(row.len(), locations.len());
    }
    for i in 0..locations.len() {
        assert_eq!(matrix.get(i, i), Some(0.0));
    }
}

#[test]
#[ignore = "needs a running OSRM server at OSRM_BASE_URL"]
fn osrm_trip_visits_every_stop() {
    let client = live_client();
    let locations: Vec<_> = LANDMARKS.iter().map(|l| l.coords()).collect();

    let trip = client
        .compute_trip(&locations, TravelProfile::Driving)
        .expect("trip request");

    assert!(trip.distance > 0.0);
    assert!(trip.duration > 0.0);
    assert!(!trip.geometry.is_empty());

    let mut originals: Vec<_> = trip.visits.iter().map(|v| v.original_index).collect();
    originals.sort_unstable();
    assert_eq!(originals, (0..locations.len()).collect::<Vec<_>>());

    let mut positions: Vec<_> = trip.visits.iter().map(|v| v.visit_index).collect();
    positions.sort_unstable();
    assert_eq!(positions, (0..locations.len()).collect::<Vec<_>>());
}
