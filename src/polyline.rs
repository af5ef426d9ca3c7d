//! Polyline representation for route geometries.
//!
//! Points are stored in map-native (latitude, longitude) order. The routing
//! service speaks [longitude, latitude], so the swap happens once, when the
//! geometry is read off the wire.

use serde::{Deserialize, Serialize};

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

/// Axis-aligned box around a set of (lat, lng) points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: (f64, f64),
    pub north_east: (f64, f64),
}

impl Polyline {
    /// Creates a new Polyline from (latitude, longitude) points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Builds a polyline from service-order `[longitude, latitude]` pairs.
    pub fn from_lng_lat(coordinates: &[[f64; 2]]) -> Self {
        Self {
            points: coordinates.iter().map(|[lng, lat]| (*lat, *lng)).collect(),
        }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box of the polyline, `None` when it has no points.
    pub fn bounds(&self) -> Option<Bounds> {
        let (first, rest) = self.points.split_first()?;
        let init = Bounds {
            south_west: *first,
            north_east: *first,
        };
        Some(rest.iter().fold(init, |bounds, &(lat, lng)| Bounds {
            south_west: (bounds.south_west.0.min(lat), bounds.south_west.1.min(lng)),
            north_east: (bounds.north_east.0.max(lat), bounds.north_east.1.max(lng)),
        }))
    }
}
