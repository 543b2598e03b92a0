//! Service adapters for the moodmap place finder.
//!
//! Responsibilities:
//! - Implement the `moodmap-core` service traits over HTTP: Overpass for
//!   place search, OSRM for driving routes and Nominatim for reverse
//!   geocoding.
//! - Persist favourites and history as JSON files.
//!
//! Boundaries:
//! - Do not encode domain rules (live in `moodmap-core`).
//! - Failures are classified and returned, never retried.
//!
//! Invariants:
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod geocoding;
mod http;
pub mod overpass;
pub mod routing;
mod store;

pub use geocoding::{DEFAULT_NOMINATIM_URL, NominatimReverseGeocoder};
pub use http::{DEFAULT_USER_AGENT, HttpServiceConfig, ServiceBuildError};
pub use overpass::{DEFAULT_OVERPASS_URL, OverpassPlaceQueryService};
pub use routing::{DEFAULT_OSRM_URL, OsrmRouteService};
pub use store::{DEFAULT_DATA_DIR, FileKeyValueStore};
