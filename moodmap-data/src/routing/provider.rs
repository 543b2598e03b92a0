//! HTTP-based `RouteService` using OSRM's Route API.

use moodmap_core::{Coordinate, Route, RouteError, RouteService};

use super::osrm::RouteResponse;
use crate::http::{HttpBridge, HttpServiceConfig, ServiceBuildError, http_error, parse_json};

/// Public OSRM demo server.
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

/// Driving route provider backed by an OSRM server.
///
/// OSRM answers failed lookups such as `NoRoute` with HTTP 400 and a JSON
/// body, so client-error bodies are decoded before falling back to an HTTP
/// error.
#[derive(Debug)]
pub struct OsrmRouteService {
    bridge: HttpBridge,
}

impl OsrmRouteService {
    /// Create a provider for the OSRM server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceBuildError> {
        Self::with_config(HttpServiceConfig::new(base_url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn with_config(config: HttpServiceConfig) -> Result<Self, ServiceBuildError> {
        Ok(Self {
            bridge: HttpBridge::new(config)?,
        })
    }

    /// Build the OSRM Route API URL from `from` to `to`.
    ///
    /// The URL format is
    /// `{base_url}/route/v1/driving/{lon},{lat};{lon},{lat}?overview=full&geometries=geojson`.
    fn build_route_url(&self, from: Coordinate, to: Coordinate) -> String {
        let path = format!(
            "route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
            from.longitude(),
            from.latitude(),
            to.longitude(),
            to.latitude(),
        );
        self.bridge.config().endpoint(&path)
    }

    async fn route_async(&self, from: Coordinate, to: Coordinate) -> Result<Route, RouteError> {
        let url = self.build_route_url(from, to);
        let request = self.bridge.client().get(&url);
        let (status, body) = self.bridge.fetch_text(request, &url).await?;

        if !status.is_success() {
            return match parse_json::<RouteResponse>(&body) {
                Ok(response) if status.is_client_error() => response.into_route(),
                _ => Err(http_error(&url, status, &body).into()),
            };
        }
        parse_json::<RouteResponse>(&body)?.into_route()
    }
}

impl RouteService for OsrmRouteService {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<Route, RouteError> {
        self.bridge.block_on(self.route_async(from, to))
    }
}
