//! OSRM HTTP adapter for duration matrices and optimized round trips.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::{RoutingError, TransportError};
use crate::polyline::Polyline;
use crate::traits::Transport;

pub const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Fewest stops a duration matrix request accepts.
pub const MATRIX_MIN_POINTS: usize = 2;

/// Fewest stops a round-trip request accepts.
pub const TRIP_MIN_POINTS: usize = 3;

/// Mode of transport used in the request path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelProfile {
    #[default]
    Driving,
    Walking,
    Cycling,
}

impl TravelProfile {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelProfile::Driving => "driving",
            TravelProfile::Walking => "walking",
            TravelProfile::Cycling => "cycling",
        }
    }
}

impl fmt::Display for TravelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown travel profile: {0}")]
pub struct UnknownProfile(String);

impl FromStr for TravelProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driving" | "car" => Ok(TravelProfile::Driving),
            "walking" | "foot" => Ok(TravelProfile::Walking),
            "cycling" | "bike" => Ok(TravelProfile::Cycling),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    /// Request timeout; `None` keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
    /// Ceiling on coordinates per request; `None` disables the check.
    pub max_coordinates: Option<usize>,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            max_coordinates: Some(100),
        }
    }
}

impl OsrmConfig {
    /// Defaults overridden by `OSRM_BASE_URL`, `OSRM_TIMEOUT_SECS` and
    /// `OSRM_MAX_COORDINATES` (0 lifts the ceiling).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = env::var("OSRM_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = env::var("OSRM_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
        {
            config.timeout_secs = Some(secs);
        }
        if let Some(max) = env::var("OSRM_MAX_COORDINATES")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
        {
            config.max_coordinates = (max > 0).then_some(max);
        }
        config
    }
}

/// Blocking reqwest transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &OsrmConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        let response = self.client.get(url).send()?;
        debug!(status = %response.status(), "routing service responded");
        Ok(response.text()?)
    }
}

/// Square grid of travel durations in seconds, row = origin, column =
/// destination. `None` marks a pair with no known route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationMatrix {
    durations: Vec<Vec<Option<f64>>>,
}

impl DurationMatrix {
    pub fn new(durations: Vec<Vec<Option<f64>>>) -> Self {
        Self { durations }
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.durations.get(from)?.get(to).copied().flatten()
    }

    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.durations
    }
}

/// One stop of an optimized trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitRecord {
    /// Stop number (zero-based) as reported in the service's `waypoint_index`.
    pub original_index: usize,
    /// Position of the record in the service's `waypoints` list.
    pub visit_index: usize,
    /// Snapped location as (lat, lng).
    pub location: (f64, f64),
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripResult {
    pub geometry: Polyline,
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
    /// Sorted by `original_index`.
    pub visits: Vec<VisitRecord>,
}

#[derive(Debug, Deserialize)]
struct TableResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    durations: Option<Vec<Vec<Option<f64>>>>,
}

#[derive(Debug, Deserialize)]
struct TripResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    trips: Vec<TripRoute>,
    #[serde(default)]
    waypoints: Option<Vec<TripWaypoint>>,
}

#[derive(Debug, Deserialize)]
struct TripRoute {
    distance: f64,
    duration: f64,
    geometry: LineGeometry,
}

#[derive(Debug, Deserialize)]
struct LineGeometry {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct TripWaypoint {
    waypoint_index: usize,
    #[serde(default)]
    trips_index: usize,
    location: [f64; 2],
    #[serde(default)]
    name: Option<String>,
}

fn check_code(code: &str, message: Option<String>) -> Result<(), RoutingError> {
    if code == "Ok" {
        return Ok(());
    }
    let message = message
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| code.to_string());
    warn!(code, %message, "routing service rejected request");
    Err(RoutingError::ServiceRejected(message))
}

#[derive(Debug)]
pub struct OsrmClient<T = HttpTransport> {
    config: OsrmConfig,
    transport: T,
}

impl OsrmClient<HttpTransport> {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> OsrmClient<T> {
    pub fn with_transport(config: OsrmConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &OsrmConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn table_url(&self, locations: &[(f64, f64)], profile: TravelProfile) -> String {
        format!(
            "{}/table/v1/{}/{}?annotations=duration",
            self.config.base_url,
            profile,
            coordinate_list(locations)
        )
    }

    pub fn trip_url(&self, locations: &[(f64, f64)], profile: TravelProfile) -> String {
        format!(
            "{}/trip/v1/{}/{}?roundtrip=true&source=first&destination=last&geometries=geojson&overview=full",
            self.config.base_url,
            profile,
            coordinate_list(locations)
        )
    }

    /// Duration matrix between (lat, lng) locations, in input order.
    pub fn compute_matrix(
        &self,
        locations: &[(f64, f64)],
        profile: TravelProfile,
    ) -> Result<DurationMatrix, RoutingError> {
        self.check_count(locations.len(), MATRIX_MIN_POINTS)?;

        let body: TableResponse = self.fetch(&self.table_url(locations, profile))?;
        check_code(&body.code, body.message)?;
        let durations = body
            .durations
            .ok_or(RoutingError::IncompleteResponse("durations"))?;

        debug!(size = durations.len(), "duration matrix received");
        Ok(DurationMatrix::new(durations))
    }

    /// Round trip through (lat, lng) locations, pinned to start at the first
    /// and end at the last.
    pub fn compute_trip(
        &self,
        locations: &[(f64, f64)],
        profile: TravelProfile,
    ) -> Result<TripResult, RoutingError> {
        self.check_count(locations.len(), TRIP_MIN_POINTS)?;

        let body: TripResponse = self.fetch(&self.trip_url(locations, profile))?;
        check_code(&body.code, body.message)?;
        let trip = body
            .trips
            .into_iter()
            .next()
            .ok_or(RoutingError::NoTripFound)?;
        let waypoints = body
            .waypoints
            .ok_or(RoutingError::IncompleteResponse("waypoints"))?;

        let mut visits: Vec<VisitRecord> = waypoints
            .into_iter()
            .enumerate()
            .filter(|(_, waypoint)| waypoint.trips_index == 0)
            .map(|(visit_index, waypoint)| VisitRecord {
                original_index: waypoint.waypoint_index,
                visit_index,
                location: (waypoint.location[1], waypoint.location[0]),
                name: waypoint.name.filter(|name| !name.is_empty()),
            })
            .collect();
        visits.sort_by_key(|visit| visit.original_index);

        debug!(
            distance = trip.distance,
            duration = trip.duration,
            stops = visits.len(),
            "trip received"
        );
        Ok(TripResult {
            geometry: Polyline::from_lng_lat(&trip.geometry.coordinates),
            distance: trip.distance,
            duration: trip.duration,
            visits,
        })
    }

    fn check_count(&self, count: usize, required: usize) -> Result<(), RoutingError> {
        check_stop_count(count, required, self.config.max_coordinates)
    }

    fn fetch<R: DeserializeOwned>(&self, url: &str) -> Result<R, RoutingError> {
        debug!(url, "requesting routing service");
        let body = self.transport.get(url).inspect_err(|err| {
            warn!(error = %err, "routing request failed");
        })?;
        let parsed = serde_json::from_str(&body).map_err(TransportError::from)?;
        Ok(parsed)
    }
}

/// Local precondition shared by the client and the session: at least
/// `required` stops and, when set, no more than `max`.
pub fn check_stop_count(
    count: usize,
    required: usize,
    max: Option<usize>,
) -> Result<(), RoutingError> {
    if count < required {
        return Err(RoutingError::InsufficientPoints {
            required,
            actual: count,
        });
    }
    match max {
        Some(max) if count > max => Err(RoutingError::TooManyPoints { count, max }),
        _ => Ok(()),
    }
}

fn coordinate_list(locations: &[(f64, f64)]) -> String {
    locations
        .iter()
        .map(|(lat, lng)| format!("{:.6},{:.6}", lng, lat))
        .collect::<Vec<_>>()
        .join(";")
}
