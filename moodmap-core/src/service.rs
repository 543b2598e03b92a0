//! Contracts for the external collaborators of a search session.
//!
//! The core never talks to the network itself. Callers supply
//! implementations of these traits; `moodmap-data` provides HTTP-backed
//! ones for Overpass, OSRM and Nominatim.
//!
//! Failures are not retried and no distinction is made between transient
//! and permanent errors; they propagate to the caller unchanged.

use thiserror::Error;

use crate::{Coordinate, PlaceQuery, RawPlace, Route};

/// Address shown when reverse geocoding yields nothing.
pub const ADDRESS_NOT_AVAILABLE: &str = "Not available";

/// Failures talking to an external HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The service answered with a non-success status.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The request failed before a response arrived.
    #[error("request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Error detail.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse response: {message}")]
    Parse {
        /// Error detail.
        message: String,
    },
    /// The service reported an application-level error.
    #[error("service returned {code}: {message}")]
    Service {
        /// Service status code.
        code: String,
        /// Error detail.
        message: String,
    },
}

/// Errors from [`RouteService::route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The routing service could not be queried.
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// The service answered but returned no routes.
    #[error("no route found between the requested points")]
    NoRoute,
}

/// Errors from [`GeolocationProvider::current_location`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// The provider cannot determine a position.
    #[error("current location is unavailable: {0}")]
    Unavailable(String),
}

/// Finds raw places matching a [`PlaceQuery`].
pub trait PlaceQueryService {
    /// Return every place matching `query`, in service order.
    ///
    /// An empty vector is a valid answer, not an error.
    ///
    /// # Errors
    /// Returns [`ServiceError`] when the service cannot be reached or its
    /// response cannot be decoded.
    fn find_places(&self, query: &PlaceQuery) -> Result<Vec<RawPlace>, ServiceError>;
}

/// Computes a route between two coordinates.
pub trait RouteService {
    /// Return the first route from `from` to `to`.
    ///
    /// # Errors
    /// Returns [`RouteError::NoRoute`] when the service has no route and
    /// [`RouteError::Service`] for transport and decoding failures.
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<Route, RouteError>;
}

/// Turns a coordinate into a human-readable address.
pub trait ReverseGeocoder {
    /// Return the address at `at`, or `None` when the service has none.
    ///
    /// # Errors
    /// Returns [`ServiceError`] for transport and decoding failures.
    fn reverse_geocode(&self, at: Coordinate) -> Result<Option<String>, ServiceError>;

    /// Like [`ReverseGeocoder::reverse_geocode`], substituting
    /// [`ADDRESS_NOT_AVAILABLE`] for a missing or empty address.
    ///
    /// # Errors
    /// Propagates errors from [`ReverseGeocoder::reverse_geocode`].
    fn address_or_default(&self, at: Coordinate) -> Result<String, ServiceError> {
        Ok(self
            .reverse_geocode(at)?
            .filter(|address| !address.is_empty())
            .unwrap_or_else(|| ADDRESS_NOT_AVAILABLE.to_owned()))
    }
}

/// Supplies the user's current coordinate.
pub trait GeolocationProvider {
    /// Determine the current location.
    ///
    /// # Errors
    /// Returns [`GeolocationError`] when no position can be determined.
    fn current_location(&self) -> Result<Coordinate, GeolocationError>;
}

/// A geolocation provider that always reports the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Coordinate);

impl GeolocationProvider for FixedLocation {
    fn current_location(&self) -> Result<Coordinate, GeolocationError> {
        Ok(self.0)
    }
}
