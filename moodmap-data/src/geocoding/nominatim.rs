//! HTTP-based `ReverseGeocoder` using Nominatim's reverse endpoint.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Reverse/>

use log::debug;
use moodmap_core::{Coordinate, ReverseGeocoder, ServiceError};
use serde::Deserialize;
use url::Url;

use crate::http::{HttpBridge, HttpServiceConfig, ServiceBuildError};

/// Public Nominatim instance.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim reverse geocoding response in `format=json`.
///
/// A location without an address is reported with HTTP 200 and an `error`
/// field rather than a `display_name`.
#[derive(Debug, Default, Deserialize)]
pub struct ReverseResponse {
    /// Full formatted address.
    pub display_name: Option<String>,
    /// Reason no address was found, e.g. `"Unable to geocode"`.
    pub error: Option<String>,
}

impl ReverseResponse {
    /// The address, if the service found a non-empty one.
    #[must_use]
    pub fn into_address(self) -> Option<String> {
        if let Some(reason) = &self.error {
            debug!("Nominatim found no address: {reason}");
        }
        self.display_name.filter(|address| !address.is_empty())
    }
}

/// Reverse geocoder backed by a Nominatim server.
#[derive(Debug)]
pub struct NominatimReverseGeocoder {
    bridge: HttpBridge,
    reverse_url: Url,
}

impl NominatimReverseGeocoder {
    /// Create a geocoder for the Nominatim server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceBuildError> {
        Self::with_config(HttpServiceConfig::new(base_url))
    }

    /// Create a geocoder with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn with_config(config: HttpServiceConfig) -> Result<Self, ServiceBuildError> {
        let endpoint = config.endpoint("reverse");
        let reverse_url = Url::parse(&endpoint).map_err(|source| ServiceBuildError::BaseUrl {
            base_url: config.base_url.clone(),
            source,
        })?;
        Ok(Self {
            bridge: HttpBridge::new(config)?,
            reverse_url,
        })
    }

    /// Build `{base_url}/reverse?format=json&lat={lat}&lon={lon}`.
    fn build_reverse_url(&self, at: Coordinate) -> String {
        let mut url = self.reverse_url.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &at.latitude().to_string())
            .append_pair("lon", &at.longitude().to_string());
        url.into()
    }

    async fn reverse_geocode_async(&self, at: Coordinate) -> Result<Option<String>, ServiceError> {
        let url = self.build_reverse_url(at);
        let request = self.bridge.client().get(&url);
        let response: ReverseResponse = self.bridge.fetch_json(request, &url).await?;
        Ok(response.into_address())
    }
}

impl ReverseGeocoder for NominatimReverseGeocoder {
    fn reverse_geocode(&self, at: Coordinate) -> Result<Option<String>, ServiceError> {
        self.bridge.block_on(self.reverse_geocode_async(at))
    }
}
