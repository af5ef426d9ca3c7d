//! Test fixtures for waypoint-router.
//!
//! Provides:
//! - Real Jakarta locations (from OpenStreetMap)
//! - Canned OSRM response bodies
//! - A scripted transport and a recording map surface

pub mod jakarta_locations;
pub mod mocks;
pub mod responses;

pub use jakarta_locations::*;
pub use mocks::*;
