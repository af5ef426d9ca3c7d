//! Real Jakarta locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. These are routable points on the
//! public OSRM demo server.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

pub const LANDMARKS: &[Location] = &[
    Location::new("Monas", -6.1753924, 106.8271528),
    Location::new("Bundaran HI", -6.1950, 106.8230),
    Location::new("Gelora Bung Karno", -6.2183, 106.8020),
    Location::new("Kota Tua", -6.1352, 106.8133),
    Location::new("Blok M", -6.2443, 106.7982),
];
