//! Core domain types for the moodmap place finder.
//!
//! Given the user's coordinate, a mood (an OpenStreetMap amenity value) and
//! a budget, a search asks a [`PlaceQueryService`] for nearby places, annotates
//! each with a distance, a synthetic rating and a price tier, scores them and
//! keeps the best six. [`Session`] carries the per-user state around that:
//! favourites, a bounded search history, the map overlay and the screen flow.
//!
//! Network access lives behind the traits in [`service`]; this crate is
//! synchronous and performs no I/O of its own apart from the
//! [`KeyValueStore`] it is handed.

#![forbid(unsafe_code)]

mod budget;
mod coordinate;
pub mod distance;
mod favorites;
mod history;
mod place;
mod query;
mod ranker;
mod route;
pub mod scorer;
mod screen;
pub mod service;
mod session;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use budget::{Budget, ParseBudgetError, PriceTier, PriceTierError};
pub use coordinate::{Coordinate, CoordinateError};
pub use distance::distance;
pub use favorites::Favorites;
pub use history::{HISTORY_CAPACITY, SearchHistory};
pub use place::{RankedPlace, RawPlace, Tags, UNNAMED_PLACE};
pub use query::{Mood, MoodError, PlaceQuery, SEARCH_RADIUS_M, SearchQuery};
pub use ranker::{MAX_RESULTS, Ranker, SearchOutcome};
pub use route::Route;
pub use scorer::{
    CyclingPriceTiers, FixedPriceTier, HeuristicScorer, PriceTierSource, RandomPriceTiers, Scorer,
    score, synthetic_rating,
};
pub use screen::{Screen, ScreenError};
pub use service::{
    ADDRESS_NOT_AVAILABLE, FixedLocation, GeolocationError, GeolocationProvider,
    PlaceQueryService, ReverseGeocoder, RouteError, RouteService, ServiceError,
};
pub use session::{MapOverlay, PlaceDetails, SearchTicket, Session, SessionError};
pub use store::{
    FAVORITES_KEY, HISTORY_KEY, KeyValueStore, MemoryKeyValueStore, PersistenceError, StoreError,
};
