//! waypoint-router
//!
//! Turns user-placed map stops into OSRM duration-matrix and round-trip
//! queries, and projects the results into displayable views.

pub mod error;
pub mod traits;
pub mod waypoint;
pub mod polyline;
pub mod osrm;
pub mod render;
pub mod session;
