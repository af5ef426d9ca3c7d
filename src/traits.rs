//! Collaborator seams for the routing workflow.
//!
//! The map widget and the HTTP stack live outside this crate. Hosts implement
//! these traits for their own rendering surface and network client.

use crate::error::TransportError;
use crate::polyline::{Bounds, Polyline};

/// Performs a single outbound GET against the routing service.
///
/// Implementations return the response body whatever the HTTP status, since
/// the service reports failures inside the body. No retries.
pub trait Transport {
    fn get(&self, url: &str) -> Result<String, TransportError>;
}

/// Visual style of the route overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            color: "#1976d2".to_string(),
            weight: 5,
            opacity: 0.9,
        }
    }
}

/// Pan/zoom/marker primitives supplied by the mapping widget.
pub trait MapSurface {
    /// Handle to a placed marker.
    type Marker;
    /// Handle to a drawn route overlay.
    type Overlay;

    /// Center the viewport (lat, lng) at the given zoom level.
    fn set_view(&mut self, center: (f64, f64), zoom: u8);

    /// Place a draggable marker with a popup label.
    fn add_marker(&mut self, position: (f64, f64), label: &str) -> Self::Marker;

    fn set_marker_label(&mut self, marker: &Self::Marker, label: &str);

    fn remove_marker(&mut self, marker: Self::Marker);

    fn draw_route(&mut self, route: &Polyline, style: &RouteStyle) -> Self::Overlay;

    fn remove_overlay(&mut self, overlay: Self::Overlay);

    /// Fit the viewport to the bounds with the given padding in pixels.
    fn fit_bounds(&mut self, bounds: Bounds, padding: u32);
}
