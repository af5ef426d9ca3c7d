//! Projections of stops and routing results into display structures.
//!
//! Everything here is a pure function of its input. Hosts copy the output into
//! their own widgets.

use std::fmt;

use serde::Serialize;

use crate::error::RoutingError;
use crate::osrm::{DurationMatrix, TripResult, VisitRecord};
use crate::session::{RequestKind, Status};
use crate::waypoint::{Waypoint, stop_label};

/// Marker shown for origin/destination pairs without a route.
pub const UNREACHABLE: &str = "-";

pub fn format_duration_minutes(seconds: f64) -> String {
    format!("{:.1}", seconds / 60.0)
}

pub fn format_duration_hours(seconds: f64) -> String {
    format!("{:.2}", seconds / 3600.0)
}

pub fn format_distance_km(meters: f64) -> String {
    format!("{:.2}", meters / 1000.0)
}

/// One line per stop: `Stop 1: (-6.20000, 106.80000)`.
pub fn render_waypoint_list<M>(waypoints: &[Waypoint<M>]) -> Vec<String> {
    waypoints
        .iter()
        .enumerate()
        .map(|(index, waypoint)| {
            format!(
                "{}: ({:.5}, {:.5})",
                stop_label(index),
                waypoint.lat,
                waypoint.lng
            )
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MatrixCell {
    /// Travel time in seconds, shown in minutes.
    Duration(f64),
    Unreachable,
}

impl fmt::Display for MatrixCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixCell::Duration(seconds) => f.write_str(&format_duration_minutes(*seconds)),
            MatrixCell::Unreachable => f.write_str(UNREACHABLE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub header: String,
    pub cells: Vec<MatrixCell>,
}

/// Duration table in minutes with 1-based stop numbers on both axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixTable {
    pub column_headers: Vec<String>,
    pub rows: Vec<MatrixRow>,
}

impl fmt::Display for MatrixTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for header in &self.column_headers {
            write!(f, "\t{}", header)?;
        }
        for row in &self.rows {
            write!(f, "\n{}", row.header)?;
            for cell in &row.cells {
                write!(f, "\t{}", cell)?;
            }
        }
        Ok(())
    }
}

pub fn render_matrix(matrix: &DurationMatrix) -> MatrixTable {
    let n = matrix.len();
    let column_headers = (1..=n).map(|number| number.to_string()).collect();
    let rows = matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| MatrixRow {
            header: (i + 1).to_string(),
            cells: (0..n)
                .map(|j| match row.get(j).copied().flatten() {
                    Some(seconds) => MatrixCell::Duration(seconds),
                    None => MatrixCell::Unreachable,
                })
                .collect(),
        })
        .collect();

    MatrixTable {
        column_headers,
        rows,
    }
}

/// Visits ordered by the service's `waypoint_index`, one line per stop.
pub fn render_trip_order(visits: &[VisitRecord]) -> Vec<String> {
    let mut sorted: Vec<&VisitRecord> = visits.iter().collect();
    sorted.sort_by_key(|visit| visit.original_index);

    sorted
        .into_iter()
        .map(|visit| {
            format!(
                "Visit Stop {} at ({:.5}, {:.5})",
                visit.original_index + 1,
                visit.location.0,
                visit.location.1
            )
        })
        .collect()
}

pub fn render_trip_summary(trip: &TripResult) -> String {
    trip_summary(trip.distance, trip.duration)
}

fn trip_summary(distance: f64, duration: f64) -> String {
    format!(
        "Trip found! Total distance: {} km, total duration: {} hours",
        format_distance_km(distance),
        format_duration_hours(duration)
    )
}

/// Text of the status line.
pub fn render_status(status: &Status) -> String {
    match status {
        Status::Idle => String::new(),
        Status::InProgress(RequestKind::Matrix) => "Computing OD matrix...".to_string(),
        Status::InProgress(RequestKind::Trip) => "Optimizing trip...".to_string(),
        Status::MatrixComputed => "OD matrix computed.".to_string(),
        Status::TripFound { distance, duration } => trip_summary(*distance, *duration),
        Status::Failed { kind, error } => render_failure(*kind, error),
    }
}

fn render_failure(kind: RequestKind, error: &RoutingError) -> String {
    match (kind, error) {
        (RequestKind::Matrix, RoutingError::InsufficientPoints { required, .. }) => {
            format!("Add at least {} stops to compute the OD matrix.", required)
        }
        (RequestKind::Trip, RoutingError::InsufficientPoints { required, .. }) => {
            format!("Add at least {} stops to optimize a trip.", required)
        }
        (_, RoutingError::TooManyPoints { count, max }) => {
            format!("Too many stops: {} placed, the limit is {}.", count, max)
        }
        (_, RoutingError::ServiceRejected(message)) => format!("Error from OSRM: {}", message),
        (_, RoutingError::NoTripFound) => "No trip found.".to_string(),
        (_, RoutingError::IncompleteResponse(field)) => {
            format!("Incomplete response from OSRM (missing {}).", field)
        }
        (RequestKind::Matrix, RoutingError::Transport(_)) => "Failed to fetch table.".to_string(),
        (RequestKind::Trip, RoutingError::Transport(_)) => "Failed to fetch trip.".to_string(),
    }
}
