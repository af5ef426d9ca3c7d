//! Collaborator doubles for the routing service and the map widget.

use std::cell::RefCell;
use std::collections::VecDeque;

use waypoint_router::error::TransportError;
use waypoint_router::polyline::{Bounds, Polyline};
use waypoint_router::traits::{MapSurface, RouteStyle, Transport};

/// Replays queued bodies in order and records every URL requested.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<String, String>>>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(body.to_string()));
        self
    }

    pub fn fail(self, reason: &str) -> Self {
        self.responses.borrow_mut().push_back(Err(reason.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.responses.borrow_mut().pop_front() {
            Some(Ok(body)) => Ok(body),
            Some(Err(reason)) => Err(TransportError::Unavailable(reason)),
            None => Err(TransportError::Unavailable("no scripted response".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub handle: u32,
    pub position: (f64, f64),
    pub label: String,
}

/// Map surface that keeps what a real widget would show.
#[derive(Debug, Default)]
pub struct RecordingMap {
    next_handle: u32,
    pub markers: Vec<PlacedMarker>,
    pub routes: Vec<(u32, Polyline, RouteStyle)>,
    pub fitted: Vec<(Bounds, u32)>,
}

impl MapSurface for RecordingMap {
    type Marker = u32;
    type Overlay = u32;

    fn set_view(&mut self, _center: (f64, f64), _zoom: u8) {}

    fn add_marker(&mut self, position: (f64, f64), label: &str) -> u32 {
        self.next_handle += 1;
        self.markers.push(PlacedMarker {
            handle: self.next_handle,
            position,
            label: label.to_string(),
        });
        self.next_handle
    }

    fn set_marker_label(&mut self, marker: &u32, label: &str) {
        if let Some(placed) = self.markers.iter_mut().find(|placed| placed.handle == *marker) {
            placed.label = label.to_string();
        }
    }

    fn remove_marker(&mut self, marker: u32) {
        self.markers.retain(|placed| placed.handle != marker);
    }

    fn draw_route(&mut self, route: &Polyline, style: &RouteStyle) -> u32 {
        self.next_handle += 1;
        self.routes.push((self.next_handle, route.clone(), style.clone()));
        self.next_handle
    }

    fn remove_overlay(&mut self, overlay: u32) {
        self.routes.retain(|(handle, _, _)| *handle != overlay);
    }

    fn fit_bounds(&mut self, bounds: Bounds, padding: u32) {
        self.fitted.push((bounds, padding));
    }
}
