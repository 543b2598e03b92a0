//! Driving routes between the user and a chosen place.

use std::time::Duration;

use geo::LineString;

/// A driving route from the user to a place.
///
/// `geometry` uses WGS84 with `x = longitude` and `y = latitude`, the same
/// axis order as the GeoJSON the routing service returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Path of the route.
    pub geometry: LineString<f64>,
    /// Route length in metres.
    pub distance_m: f64,
    /// Expected travel time.
    pub duration: Duration,
}

impl Route {
    /// Construct a route.
    #[must_use]
    pub const fn new(geometry: LineString<f64>, distance_m: f64, duration: Duration) -> Self {
        Self {
            geometry,
            distance_m,
            duration,
        }
    }

    /// Number of vertices in the path.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.geometry.0.len()
    }
}
