//! HTTP-based `PlaceQueryService` using the Overpass interpreter.

use moodmap_core::{PlaceQuery, PlaceQueryService, RawPlace, ServiceError};
use reqwest::header::CONTENT_TYPE;

use super::response::OverpassResponse;
use crate::http::{HttpBridge, HttpServiceConfig, ServiceBuildError};

/// Public Overpass instance.
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de";

/// Path of the interpreter endpoint below the base URL.
const INTERPRETER_PATH: &str = "api/interpreter";

/// Finds places by posting Overpass QL to an Overpass interpreter.
///
/// The query text is sent verbatim as the request body. Elements without
/// coordinates are dropped; an empty element list is a valid answer.
#[derive(Debug)]
pub struct OverpassPlaceQueryService {
    bridge: HttpBridge,
}

impl OverpassPlaceQueryService {
    /// Create a service for the interpreter at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceBuildError> {
        Self::with_config(HttpServiceConfig::new(base_url))
    }

    /// Create a service with explicit configuration.
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

    fn interpreter_url(&self) -> String {
        self.bridge.config().endpoint(INTERPRETER_PATH)
    }

    async fn find_places_async(&self, query: &PlaceQuery) -> Result<Vec<RawPlace>, ServiceError> {
        let url = self.interpreter_url();
        let request = self
            .bridge
            .client()
            .post(&url)
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(query.to_overpass_ql());
        let response: OverpassResponse = self.bridge.fetch_json(request, &url).await?;
        Ok(response.into_places())
    }
}

impl PlaceQueryService for OverpassPlaceQueryService {
    fn find_places(&self, query: &PlaceQuery) -> Result<Vec<RawPlace>, ServiceError> {
        self.bridge.block_on(self.find_places_async(query))
    }
}
