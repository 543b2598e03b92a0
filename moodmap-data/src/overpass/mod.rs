//! Place search against an Overpass API interpreter.
//!
//! # Example
//!
//! ```no_run
//! use moodmap_core::{Coordinate, Mood, PlaceQuery, PlaceQueryService};
//! use moodmap_data::overpass::OverpassPlaceQueryService;
//!
//! let service = OverpassPlaceQueryService::new("https://overpass-api.de")?;
//! let query = PlaceQuery::new(Mood::new("cafe")?, Coordinate::new(12.9716, 77.5946)?);
//! let places = service.find_places(&query)?;
//! println!("found {} cafes", places.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod provider;
mod response;

pub use provider::{DEFAULT_OVERPASS_URL, OverpassPlaceQueryService};
pub use response::{OverpassElement, OverpassResponse};
