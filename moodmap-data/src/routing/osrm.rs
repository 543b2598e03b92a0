//! OSRM API response types for the Route service.
//!
//! Requests ask for `overview=full&geometries=geojson`, so each route carries
//! its full path as a GeoJSON `LineString`.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use std::time::Duration;

use geo::LineString;
use moodmap_core::{Route, RouteError, ServiceError};
use serde::Deserialize;

/// OSRM Route API response.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"NoRoute"` - No route found between the coordinates
    /// - `"InvalidQuery"` - Invalid query parameters
    /// - `"TooBig"` - Too many coordinates
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Alternative routes, best first.
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// One route from an OSRM response.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Full route path.
    pub geometry: GeoJsonLineString,
    /// Length in metres.
    pub distance: f64,
    /// Expected travel time in seconds.
    pub duration: f64,
}

/// A GeoJSON `LineString` geometry with `[lon, lat]` positions.
#[derive(Debug, Deserialize)]
pub struct GeoJsonLineString {
    /// GeoJSON geometry type; always `"LineString"` for OSRM routes.
    #[serde(rename = "type")]
    pub kind: String,
    /// Positions as `[longitude, latitude]`.
    pub coordinates: Vec<[f64; 2]>,
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }

    /// Convert the first route into a [`Route`].
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NoRoute`] when OSRM reports `NoRoute` or returns
    /// no routes, and [`RouteError::Service`] for other failure codes or
    /// malformed routes.
    pub fn into_route(self) -> Result<Route, RouteError> {
        if self.code == "NoRoute" {
            return Err(RouteError::NoRoute);
        }
        if !self.is_ok() {
            return Err(RouteError::Service(ServiceError::Service {
                code: self.code,
                message: self.message.unwrap_or_default(),
            }));
        }
        let first = self.routes.into_iter().next().ok_or(RouteError::NoRoute)?;
        first.into_route().map_err(RouteError::Service)
    }
}

impl OsrmRoute {
    fn into_route(self) -> Result<Route, ServiceError> {
        if self.geometry.kind != "LineString" {
            return Err(ServiceError::Parse {
                message: format!(
                    "expected LineString route geometry, got {}",
                    self.geometry.kind
                ),
            });
        }
        let duration = Duration::try_from_secs_f64(self.duration).map_err(|err| {
            ServiceError::Parse {
                message: format!("invalid route duration {}: {err}", self.duration),
            }
        })?;
        if !(self.distance.is_finite() && self.distance >= 0.0) {
            return Err(ServiceError::Parse {
                message: format!("invalid route distance {}", self.distance),
            });
        }
        Ok(Route::new(
            LineString::from(self.geometry.coordinates),
            self.distance,
            duration,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_success_response() {
        let json = r#"{
            "code": "Ok",
            "routes": [{
                "geometry": {"type": "LineString",
                             "coordinates": [[77.5946, 12.9716], [77.6, 12.975], [77.61, 12.98]]},
                "distance": 1834.2,
                "duration": 241.7,
                "legs": [],
                "weight": 241.7
            }],
            "waypoints": []
        }"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");
        assert!(response.is_ok());

        let route = response.into_route().expect("should convert");
        assert_eq!(route.vertex_count(), 3);
        assert_eq!(route.geometry.0[0].x, 77.5946);
        assert_eq!(route.geometry.0[0].y, 12.9716);
        assert_eq!(route.distance_m, 1834.2);
        assert_eq!(route.duration, Duration::from_secs_f64(241.7));
    }

    #[test]
    fn empty_routes_is_no_route() {
        let json = r#"{"code": "Ok", "routes": []}"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(response.into_route(), Err(RouteError::NoRoute));
    }

    #[test]
    fn no_route_code_is_no_route() {
        let json = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(response.into_route(), Err(RouteError::NoRoute));
    }

    #[test]
    fn other_codes_are_service_errors() {
        let json = r#"{"code": "InvalidQuery", "message": "Query string malformed"}"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        match response.into_route() {
            Err(RouteError::Service(ServiceError::Service { code, message })) => {
                assert_eq!(code, "InvalidQuery");
                assert_eq!(message, "Query string malformed");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn negative_duration_is_a_parse_error() {
        let json = r#"{"code": "Ok", "routes": [{
            "geometry": {"type": "LineString", "coordinates": []},
            "distance": 10.0, "duration": -1.0
        }]}"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(matches!(
            response.into_route(),
            Err(RouteError::Service(ServiceError::Parse { .. }))
        ));
    }
}
