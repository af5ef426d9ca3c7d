//! Canned OSRM bodies shaped like real `table` and `trip` responses.

pub const TABLE_OK: &str = r#"{
    "code": "Ok",
    "durations": [[0, 120], [130, 0]],
    "sources": [
        {"hint": "", "distance": 3.1, "name": "Jalan Medan Merdeka", "location": [106.827153, -6.175392]},
        {"hint": "", "distance": 1.2, "name": "Jalan M.H. Thamrin", "location": [106.823, -6.195]}
    ],
    "destinations": [
        {"hint": "", "distance": 3.1, "name": "Jalan Medan Merdeka", "location": [106.827153, -6.175392]},
        {"hint": "", "distance": 1.2, "name": "Jalan M.H. Thamrin", "location": [106.823, -6.195]}
    ]
}"#;

pub const TABLE_UNREACHABLE: &str = r#"{"code": "Ok", "durations": [[0, null], [null, 0]]}"#;

pub const TABLE_REJECTED: &str =
    r#"{"code": "TooBig", "message": "Too many table coordinates"}"#;

/// Three stops; OSRM lists waypoints in input order with their tour position.
pub const TRIP_OK: &str = r#"{
    "code": "Ok",
    "trips": [{
        "distance": 18234.7,
        "duration": 2460.2,
        "weight": 2460.2,
        "weight_name": "routability",
        "legs": [],
        "geometry": {
            "type": "LineString",
            "coordinates": [[106.8, -6.2], [106.805, -6.205], [106.81, -6.21], [106.82, -6.22], [106.8, -6.2]]
        }
    }],
    "waypoints": [
        {"waypoint_index": 2, "trips_index": 0, "hint": "", "distance": 4.2, "name": "Jalan Sudirman", "location": [106.8, -6.2]},
        {"waypoint_index": 0, "trips_index": 0, "hint": "", "distance": 0.8, "name": "Jalan Thamrin", "location": [106.81, -6.21]},
        {"waypoint_index": 1, "trips_index": 0, "hint": "", "distance": 2.0, "name": "", "location": [106.82, -6.22]}
    ]
}"#;

pub const TRIP_EMPTY: &str = r#"{"code": "Ok", "trips": [], "waypoints": []}"#;

pub const TRIP_REJECTED: &str =
    r#"{"code": "NoTrips", "message": "No trip visiting all destinations possible."}"#;
