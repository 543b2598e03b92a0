//! Facade crate for the moodmap place finder.
//!
//! This crate re-exports the core domain types and exposes the HTTP-backed
//! service adapters behind the `http` feature.

#![forbid(unsafe_code)]

pub use moodmap_core::{
    Budget, Coordinate, CoordinateError, Favorites, KeyValueStore, MapOverlay,
    MemoryKeyValueStore, Mood, PlaceDetails, PlaceQuery, PlaceQueryService, PriceTier,
    PriceTierSource, RankedPlace, Ranker, RawPlace, ReverseGeocoder, Route, RouteError,
    RouteService, Screen, SearchHistory, SearchOutcome, SearchQuery, ServiceError, Session,
    SessionError, distance,
};

#[cfg(feature = "http")]
pub use moodmap_data::{
    FileKeyValueStore, HttpServiceConfig, NominatimReverseGeocoder, OsrmRouteService,
    OverpassPlaceQueryService, ServiceBuildError,
};
