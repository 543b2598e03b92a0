//! Driving routes from an OSRM routing service.
//!
//! [`OsrmRouteService`] implements [`moodmap_core::RouteService`] by calling
//! the OSRM Route API and converting the first route's GeoJSON geometry into
//! a [`geo::LineString`].
//!
//! # Example
//!
//! ```no_run
//! use moodmap_core::{Coordinate, RouteService};
//! use moodmap_data::HttpServiceConfig;
//! use moodmap_data::routing::OsrmRouteService;
//! use std::time::Duration;
//!
//! let config = HttpServiceConfig::new("https://router.project-osrm.org")
//!     .with_timeout(Duration::from_secs(10));
//! let routes = OsrmRouteService::with_config(config)?;
//!
//! let route = routes.route(
//!     Coordinate::new(12.9716, 77.5946)?,
//!     Coordinate::new(12.98, 77.61)?,
//! )?;
//! println!("{} m in {:?}", route.distance_m, route.duration);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod osrm;
mod provider;

pub use osrm::{GeoJsonLineString, OsrmRoute, RouteResponse};
pub use provider::{DEFAULT_OSRM_URL, OsrmRouteService};
