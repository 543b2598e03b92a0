//! Reverse geocoding through Nominatim.

mod nominatim;

pub use nominatim::{DEFAULT_NOMINATIM_URL, NominatimReverseGeocoder, ReverseResponse};
