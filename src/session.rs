//! Planner session: owns the stops, the map surface, the rendered views and
//! the status line.
//!
//! Routing calls are split into `begin_*` and `finish_*` so the request itself
//! can run wherever the host likes. Each begin bumps a generation counter;
//! a finish carrying an older generation is discarded, so the latest request
//! always owns the screen.

use tracing::debug;

use crate::error::RoutingError;
use crate::osrm::{
    DurationMatrix, MATRIX_MIN_POINTS, OsrmClient, OsrmConfig, TRIP_MIN_POINTS, TravelProfile,
    TripResult, check_stop_count,
};
use crate::render::{MatrixTable, render_matrix, render_status, render_trip_order, render_waypoint_list};
use crate::traits::{MapSurface, RouteStyle, Transport};
use crate::waypoint::{WaypointId, WaypointStore, stop_label};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Initial viewport center (lat, lng).
    pub center: (f64, f64),
    pub zoom: u8,
    pub route_style: RouteStyle,
    /// Padding in pixels when fitting the viewport to a route.
    pub fit_padding: u32,
    /// Stops allowed per request; `None` disables the check.
    pub max_stops: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            center: (-6.2, 106.8),
            zoom: 12,
            route_style: RouteStyle::default(),
            fit_padding: 40,
            max_stops: OsrmConfig::default().max_coordinates,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Matrix,
    Trip,
}

impl RequestKind {
    pub fn min_points(self) -> usize {
        match self {
            RequestKind::Matrix => MATRIX_MIN_POINTS,
            RequestKind::Trip => TRIP_MIN_POINTS,
        }
    }
}

/// Outcome of the most recent routing attempt.
#[derive(Debug, Default)]
pub enum Status {
    #[default]
    Idle,
    InProgress(RequestKind),
    MatrixComputed,
    TripFound {
        /// Meters.
        distance: f64,
        /// Seconds.
        duration: f64,
    },
    Failed {
        kind: RequestKind,
        error: RoutingError,
    },
}

/// A request that has been started and awaits its result.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    generation: u64,
    kind: RequestKind,
    profile: TravelProfile,
    locations: Vec<(f64, f64)>,
}

impl PendingRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn profile(&self) -> TravelProfile {
        self.profile
    }

    /// Stop positions (lat, lng) at the time the request started.
    pub fn locations(&self) -> &[(f64, f64)] {
        &self.locations
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result (or error) is now on screen.
    Applied,
    /// A newer request or a reset happened first; nothing changed.
    Superseded,
    /// The precondition failed and no request was made.
    NotStarted,
}

/// Rendered lists and tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Views {
    pub stops: Vec<String>,
    pub matrix: Option<MatrixTable>,
    pub trip_order: Vec<String>,
}

pub struct PlannerSession<M: MapSurface> {
    config: SessionConfig,
    map: M,
    store: WaypointStore<M::Marker>,
    views: Views,
    status: Status,
    route: Option<M::Overlay>,
    generation: u64,
}

impl<M: MapSurface> PlannerSession<M> {
    pub fn new(map: M) -> Self {
        Self::with_config(map, SessionConfig::default())
    }

    pub fn with_config(mut map: M, config: SessionConfig) -> Self {
        map.set_view(config.center, config.zoom);
        Self {
            config,
            map,
            store: WaypointStore::new(),
            views: Views::default(),
            status: Status::Idle,
            route: None,
            generation: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn store(&self) -> &WaypointStore<M::Marker> {
        &self.store
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn status_line(&self) -> String {
        render_status(&self.status)
    }

    pub fn has_route(&self) -> bool {
        self.route.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Map click: place a new stop at the end of the order.
    pub fn click(&mut self, lat: f64, lng: f64) -> WaypointId {
        let label = stop_label(self.store.len());
        let marker = self.map.add_marker((lat, lng), &label);
        let id = self.store.add((lat, lng), marker);
        self.refresh_stops();
        id
    }

    /// Marker drag finished. Unknown ids are ignored.
    pub fn drag_end(&mut self, id: WaypointId, lat: f64, lng: f64) -> bool {
        let moved = self.store.update_position_by_id(id, lat, lng);
        if moved {
            self.refresh_stops();
        } else {
            debug!(id = id.get(), "drag for unknown waypoint ignored");
        }
        moved
    }

    /// Back to the initial state. Responses still in flight are discarded.
    pub fn reset(&mut self) {
        for marker in self.store.clear() {
            self.map.remove_marker(marker);
        }
        self.clear_route();
        self.views = Views::default();
        self.status = Status::Idle;
        self.generation += 1;
    }

    pub fn begin_matrix(&mut self, profile: TravelProfile) -> Option<PendingRequest> {
        self.begin(RequestKind::Matrix, profile)
    }

    pub fn begin_trip(&mut self, profile: TravelProfile) -> Option<PendingRequest> {
        self.begin(RequestKind::Trip, profile)
    }

    pub fn finish_matrix(
        &mut self,
        pending: &PendingRequest,
        outcome: Result<DurationMatrix, RoutingError>,
    ) -> Completion {
        if !self.is_current(pending, RequestKind::Matrix) {
            return Completion::Superseded;
        }
        match outcome {
            Ok(matrix) => {
                self.views.matrix = Some(render_matrix(&matrix));
                self.status = Status::MatrixComputed;
            }
            Err(error) => {
                self.status = Status::Failed {
                    kind: RequestKind::Matrix,
                    error,
                };
            }
        }
        Completion::Applied
    }

    pub fn finish_trip(
        &mut self,
        pending: &PendingRequest,
        outcome: Result<TripResult, RoutingError>,
    ) -> Completion {
        if !self.is_current(pending, RequestKind::Trip) {
            return Completion::Superseded;
        }
        match outcome {
            Ok(trip) => {
                if let Some(bounds) = trip.geometry.bounds() {
                    let overlay = self.map.draw_route(&trip.geometry, &self.config.route_style);
                    self.route = Some(overlay);
                    self.map.fit_bounds(bounds, self.config.fit_padding);
                }
                self.views.trip_order = render_trip_order(&trip.visits);
                self.status = Status::TripFound {
                    distance: trip.distance,
                    duration: trip.duration,
                };
            }
            Err(error) => {
                self.status = Status::Failed {
                    kind: RequestKind::Trip,
                    error,
                };
            }
        }
        Completion::Applied
    }

    /// Matrix request issued and applied in one step.
    pub fn compute_matrix<T: Transport>(
        &mut self,
        client: &OsrmClient<T>,
        profile: TravelProfile,
    ) -> Completion {
        let Some(pending) = self.begin_matrix(profile) else {
            return Completion::NotStarted;
        };
        let outcome = client.compute_matrix(pending.locations(), pending.profile());
        self.finish_matrix(&pending, outcome)
    }

    /// Trip request issued and applied in one step.
    pub fn compute_trip<T: Transport>(
        &mut self,
        client: &OsrmClient<T>,
        profile: TravelProfile,
    ) -> Completion {
        let Some(pending) = self.begin_trip(profile) else {
            return Completion::NotStarted;
        };
        let outcome = client.compute_trip(pending.locations(), pending.profile());
        self.finish_trip(&pending, outcome)
    }

    fn begin(&mut self, kind: RequestKind, profile: TravelProfile) -> Option<PendingRequest> {
        let count = self.store.len();
        if let Err(error) = check_stop_count(count, kind.min_points(), self.config.max_stops) {
            self.status = Status::Failed { kind, error };
            return None;
        }

        // Matrix and trip share the screen; drop whatever the last one left.
        self.views.matrix = None;
        self.views.trip_order.clear();
        self.clear_route();

        self.status = Status::InProgress(kind);
        self.generation += 1;
        debug!(?kind, generation = self.generation, stops = count, "routing request started");

        Some(PendingRequest {
            generation: self.generation,
            kind,
            profile,
            locations: self.store.coordinates(),
        })
    }

    fn is_current(&self, pending: &PendingRequest, kind: RequestKind) -> bool {
        let current = pending.kind == kind && pending.generation == self.generation;
        if !current {
            debug!(
                ?kind,
                generation = pending.generation,
                latest = self.generation,
                "discarding superseded routing response"
            );
        }
        current
    }

    fn clear_route(&mut self) {
        if let Some(overlay) = self.route.take() {
            self.map.remove_overlay(overlay);
        }
    }

    fn refresh_stops(&mut self) {
        self.views.stops = render_waypoint_list(self.store.list());
        for (index, waypoint) in self.store.list().iter().enumerate() {
            self.map.set_marker_label(waypoint.marker(), &stop_label(index));
        }
    }
}
