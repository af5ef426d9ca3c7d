//! In-memory ordered store of user-placed stops.
//!
//! Insertion order is the stop number shown to the user and the index space
//! of every routing query. Each waypoint also gets a [`WaypointId`] that never
//! changes, so drag updates keep hitting the right stop even if positions in
//! the order ever shift.

use serde::Serialize;

/// Stable identifier for a waypoint, independent of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WaypointId(u64);

impl WaypointId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A user-placed stop and the handle of its map marker.
#[derive(Debug, Clone)]
pub struct Waypoint<M> {
    id: WaypointId,
    pub lat: f64,
    pub lng: f64,
    marker: M,
}

impl<M> Waypoint<M> {
    pub fn id(&self) -> WaypointId {
        self.id
    }

    /// Position as (lat, lng).
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn marker(&self) -> &M {
        &self.marker
    }
}

/// Display label of the stop at `index` (zero-based) in the order.
pub fn stop_label(index: usize) -> String {
    format!("Stop {}", index + 1)
}

#[derive(Debug)]
pub struct WaypointStore<M> {
    waypoints: Vec<Waypoint<M>>,
    next_id: u64,
}

impl<M> Default for WaypointStore<M> {
    fn default() -> Self {
        Self {
            waypoints: Vec::new(),
            next_id: 0,
        }
    }
}

impl<M> WaypointStore<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stop at the end of the order.
    pub fn add(&mut self, position: (f64, f64), marker: M) -> WaypointId {
        let id = WaypointId(self.next_id);
        self.next_id += 1;
        self.waypoints.push(Waypoint {
            id,
            lat: position.0,
            lng: position.1,
            marker,
        });
        id
    }

    /// Moves the stop at `index`. Out-of-range indices are ignored.
    pub fn update_position(&mut self, index: usize, lat: f64, lng: f64) -> bool {
        match self.waypoints.get_mut(index) {
            Some(waypoint) => {
                waypoint.lat = lat;
                waypoint.lng = lng;
                true
            }
            None => false,
        }
    }

    /// Moves the stop with the given id. Unknown ids are ignored.
    pub fn update_position_by_id(&mut self, id: WaypointId, lat: f64, lng: f64) -> bool {
        match self.index_of(id) {
            Some(index) => self.update_position(index, lat, lng),
            None => false,
        }
    }

    pub fn index_of(&self, id: WaypointId) -> Option<usize> {
        self.waypoints.iter().position(|waypoint| waypoint.id == id)
    }

    /// Removes every stop and hands back the marker handles for teardown.
    pub fn clear(&mut self) -> Vec<M> {
        self.waypoints
            .drain(..)
            .map(|waypoint| waypoint.marker)
            .collect()
    }

    pub fn list(&self) -> &[Waypoint<M>] {
        &self.waypoints
    }

    /// Positions as (lat, lng) in stop order.
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        self.waypoints.iter().map(Waypoint::coords).collect()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
