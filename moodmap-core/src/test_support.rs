//! Deterministic service doubles for tests.

use std::cell::RefCell;
use std::time::Duration;

use geo::LineString;

use crate::{
    Coordinate, PlaceQuery, PlaceQueryService, RawPlace, ReverseGeocoder, Route, RouteError,
    RouteService, ServiceError,
};

/// Returns canned places and records every query it receives.
#[derive(Debug, Default)]
pub struct StubPlaceQueryService {
    places: Vec<RawPlace>,
    queries: RefCell<Vec<PlaceQuery>>,
}

impl StubPlaceQueryService {
    /// Answer every query with `places`.
    #[must_use]
    pub fn new(places: Vec<RawPlace>) -> Self {
        Self {
            places,
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Answer every query with no places.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Queries received so far, oldest first.
    #[must_use]
    pub fn queries(&self) -> Vec<PlaceQuery> {
        self.queries.borrow().clone()
    }
}

impl PlaceQueryService for StubPlaceQueryService {
    fn find_places(&self, query: &PlaceQuery) -> Result<Vec<RawPlace>, ServiceError> {
        self.queries.borrow_mut().push(query.clone());
        Ok(self.places.clone())
    }
}

/// Fails every query with a fixed error.
#[derive(Debug, Clone)]
pub struct FailingPlaceQueryService(pub ServiceError);

impl FailingPlaceQueryService {
    /// Fail as if the service were unreachable.
    #[must_use]
    pub fn network() -> Self {
        Self(ServiceError::Network {
            url: "http://stub.invalid/api/interpreter".to_owned(),
            message: "connection refused".to_owned(),
        })
    }
}

impl PlaceQueryService for FailingPlaceQueryService {
    fn find_places(&self, _query: &PlaceQuery) -> Result<Vec<RawPlace>, ServiceError> {
        Err(self.0.clone())
    }
}

/// Answers route requests without a network.
#[derive(Debug, Clone)]
pub enum StubRouteService {
    /// A two-vertex route straight from origin to destination.
    StraightLine,
    /// Always fail with the given error.
    Failing(RouteError),
}

impl StubRouteService {
    /// Route in a straight line.
    #[must_use]
    pub const fn straight_line() -> Self {
        Self::StraightLine
    }

    /// Report that no route exists.
    #[must_use]
    pub const fn no_route() -> Self {
        Self::Failing(RouteError::NoRoute)
    }
}

impl RouteService for StubRouteService {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<Route, RouteError> {
        match self {
            Self::StraightLine => Ok(Route::new(
                LineString::from(vec![geo::Coord::from(from), geo::Coord::from(to)]),
                from.distance_km_to(to) * 1000.0,
                Duration::from_secs(60),
            )),
            Self::Failing(err) => Err(err.clone()),
        }
    }
}

/// Returns a canned reverse-geocoding answer.
#[derive(Debug, Clone)]
pub struct StubGeocoder(pub Result<Option<String>, ServiceError>);

impl StubGeocoder {
    /// Know no address anywhere.
    #[must_use]
    pub const fn none() -> Self {
        Self(Ok(None))
    }

    /// Answer every lookup with `address`.
    #[must_use]
    pub fn with_address(address: impl Into<String>) -> Self {
        Self(Ok(Some(address.into())))
    }
}

impl ReverseGeocoder for StubGeocoder {
    fn reverse_geocode(&self, _at: Coordinate) -> Result<Option<String>, ServiceError> {
        self.0.clone()
    }
}
