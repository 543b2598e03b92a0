//! Application state for one user session.
//!
//! [`Session`] owns everything the presentation layer would otherwise keep
//! in globals: the screen, the user's coordinate, favourites, history, the
//! current results and the map overlay. External services are passed into
//! the operations that need them.

use log::{info, warn};
use thiserror::Error;

use crate::store::{self, FAVORITES_KEY, HISTORY_KEY, KeyValueStore, PersistenceError};
use crate::{
    Coordinate, Favorites, GeolocationError, GeolocationProvider, PlaceQuery, PlaceQueryService,
    PriceTierSource, RankedPlace, Ranker, RawPlace, ReverseGeocoder, Route, RouteError,
    RouteService, Screen, ScreenError, SearchHistory, SearchOutcome, SearchQuery, ServiceError,
};

/// Errors raised by [`Session`] operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The operation is only available on the app screen.
    #[error("not logged in")]
    NotLoggedIn,
    /// No user coordinate has been resolved yet.
    #[error("current location is unknown")]
    LocationUnknown,
    /// An invalid screen transition was requested.
    #[error(transparent)]
    Screen(#[from] ScreenError),
    /// The geolocation provider failed.
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
    /// Favourites or history could not be loaded or saved.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    /// The place query service failed.
    #[error("place search failed")]
    PlaceQuery(#[source] ServiceError),
    /// The routing service failed.
    #[error("route lookup failed")]
    Route(#[from] RouteError),
    /// The reverse geocoder failed.
    #[error("address lookup failed")]
    Geocode(#[source] ServiceError),
    /// A newer search started before this one completed.
    #[error("search for {0} was superseded by a newer search")]
    Superseded(SearchQuery),
    /// No history entry exists at the index.
    #[error("no history entry at index {0}")]
    HistoryIndexOutOfRange(usize),
}

/// Markers and the route drawn on the map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapOverlay {
    markers: Vec<Coordinate>,
    route: Option<Route>,
}

impl MapOverlay {
    /// Coordinates of the places from the last successful search.
    #[must_use]
    pub fn markers(&self) -> &[Coordinate] {
        &self.markers
    }

    /// The route currently drawn, if any.
    #[must_use]
    pub const fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }
}

/// Handle for a search in flight.
///
/// Only the ticket from the most recent [`Session::begin_search`] may
/// publish results.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct SearchTicket {
    generation: u64,
    query: SearchQuery,
    center: Coordinate,
}

impl SearchTicket {
    /// The query being searched.
    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// The request to send to the place query service.
    pub fn place_query(&self) -> PlaceQuery {
        self.query.place_query(self.center)
    }
}

/// Everything the details panel shows for one place.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetails {
    /// Display name.
    pub name: String,
    /// Great-circle distance from the user.
    pub distance_km: f64,
    /// Synthetic rating.
    pub rating: f64,
    /// Approximate cost range for the place's price tier.
    pub approx_cost_range: String,
    /// Score rounded to a whole number.
    pub score: f64,
    /// Reverse-geocoded address or a placeholder.
    pub address: String,
    /// Driving route from the user.
    pub route: Route,
}

/// State of a single user session over a persistent store.
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    screen: Screen,
    location: Option<Coordinate>,
    favorites: Favorites,
    history: SearchHistory,
    results: Vec<RankedPlace>,
    overlay: MapOverlay,
    ranker: Ranker,
    generation: u64,
}

impl<S: KeyValueStore> Session<S> {
    /// Start a session on the intro screen. Nothing is loaded until
    /// [`Session::login`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            screen: Screen::Intro,
            location: None,
            favorites: Favorites::new(),
            history: SearchHistory::new(),
            results: Vec::new(),
            overlay: MapOverlay::default(),
            ranker: Ranker::new(),
            generation: 0,
        }
    }

    /// Replace the ranker used for searches.
    #[must_use]
    pub fn with_ranker(mut self, ranker: Ranker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Move from the intro screen to the login screen.
    ///
    /// # Errors
    /// Returns [`SessionError::Screen`] unless the session is on the intro
    /// screen.
    pub fn go_to_login(&mut self) -> Result<(), SessionError> {
        self.screen = self.screen.advance_to(Screen::Login)?;
        Ok(())
    }

    /// Enter the app screen and load favourites and history.
    ///
    /// # Errors
    /// Returns [`SessionError::Screen`] unless the session is on the login
    /// screen, and [`SessionError::Persistence`] when stored collections
    /// cannot be read. A failed load leaves the session on the login screen.
    pub fn login(&mut self) -> Result<(), SessionError> {
        let next = self.screen.advance_to(Screen::App)?;
        let favorites = store::load_collection(&self.store, FAVORITES_KEY)?;
        let history = store::load_collection(&self.store, HISTORY_KEY)?;
        self.favorites = Favorites::from_places(favorites);
        self.history = SearchHistory::from_entries(history);
        self.screen = next;
        info!(
            "logged in with {} favourites and {} history entries",
            self.favorites.len(),
            self.history.len()
        );
        Ok(())
    }

    /// Resolve the user's coordinate. The first resolved value is kept for
    /// the rest of the session.
    ///
    /// # Errors
    /// Returns [`SessionError::Geolocation`] when the provider fails.
    pub fn locate(
        &mut self,
        provider: &dyn GeolocationProvider,
    ) -> Result<Coordinate, SessionError> {
        if let Some(location) = self.location {
            return Ok(location);
        }
        let location = provider.current_location()?;
        self.location = Some(location);
        Ok(location)
    }

    /// Current screen.
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// The user's coordinate, once resolved.
    pub const fn location(&self) -> Option<Coordinate> {
        self.location
    }

    /// Saved places.
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Past searches, newest first.
    pub const fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Places from the last search that published results.
    pub fn results(&self) -> &[RankedPlace] {
        &self.results
    }

    /// Map markers and route.
    pub const fn overlay(&self) -> &MapOverlay {
        &self.overlay
    }

    /// The backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Save `place` unless a favourite shares its latitude. Returns whether
    /// it was added.
    ///
    /// # Errors
    /// Returns [`SessionError::NotLoggedIn`] before login and
    /// [`SessionError::Persistence`] when the write fails.
    pub fn add_favorite(&mut self, place: RankedPlace) -> Result<bool, SessionError> {
        self.ensure_logged_in()?;
        if !self.favorites.add(place) {
            return Ok(false);
        }
        self.save_favorites()?;
        Ok(true)
    }

    /// Remove favourites at `latitude`. Returns whether any were removed.
    ///
    /// # Errors
    /// Returns [`SessionError::NotLoggedIn`] before login and
    /// [`SessionError::Persistence`] when the write fails.
    pub fn remove_favorite(&mut self, latitude: f64) -> Result<bool, SessionError> {
        self.ensure_logged_in()?;
        let removed = self.favorites.remove_latitude(latitude);
        self.save_favorites()?;
        Ok(removed)
    }

    /// Forget every favourite and delete the stored key.
    ///
    /// # Errors
    /// Returns [`SessionError::NotLoggedIn`] before login and
    /// [`SessionError::Persistence`] when the store fails.
    pub fn clear_favorites(&mut self) -> Result<(), SessionError> {
        self.ensure_logged_in()?;
        self.store
            .remove(FAVORITES_KEY)
            .map_err(PersistenceError::from)?;
        self.favorites.clear();
        Ok(())
    }

    /// Re-read favourites from the store.
    ///
    /// # Errors
    /// Returns [`SessionError::Persistence`] when the stored value cannot be
    /// read or decoded.
    pub fn reload_favorites(&mut self) -> Result<&Favorites, SessionError> {
        let places = store::load_collection(&self.store, FAVORITES_KEY)?;
        self.favorites = Favorites::from_places(places);
        Ok(&self.favorites)
    }

    /// Record `query` as the newest history entry.
    ///
    /// # Errors
    /// Returns [`SessionError::NotLoggedIn`] before login and
    /// [`SessionError::Persistence`] when the write fails.
    pub fn add_history(&mut self, query: SearchQuery) -> Result<(), SessionError> {
        self.ensure_logged_in()?;
        self.history.push(query);
        self.save_history()
    }

    /// Remove the history entry at `index`; out of range is a no-op.
    ///
    /// # Errors
    /// Returns [`SessionError::NotLoggedIn`] before login and
    /// [`SessionError::Persistence`] when the write fails.
    pub fn remove_history(&mut self, index: usize) -> Result<Option<SearchQuery>, SessionError> {
        self.ensure_logged_in()?;
        let removed = self.history.remove(index);
        self.save_history()?;
        Ok(removed)
    }

    /// Forget every history entry and delete the stored key.
    ///
    /// # Errors
    /// Returns [`SessionError::NotLoggedIn`] before login and
    /// [`SessionError::Persistence`] when the store fails.
    pub fn clear_history(&mut self) -> Result<(), SessionError> {
        self.ensure_logged_in()?;
        self.store
            .remove(HISTORY_KEY)
            .map_err(PersistenceError::from)?;
        self.history.clear();
        Ok(())
    }

    /// Re-read history from the store.
    ///
    /// # Errors
    /// Returns [`SessionError::Persistence`] when the stored value cannot be
    /// read or decoded.
    pub fn reload_history(&mut self) -> Result<&SearchHistory, SessionError> {
        let entries = store::load_collection(&self.store, HISTORY_KEY)?;
        self.history = SearchHistory::from_entries(entries);
        Ok(&self.history)
    }

    /// Record `query` in history and start a new search, superseding any
    /// search still in flight.
    ///
    /// The query is recorded even when the location is not known yet.
    ///
    /// # Errors
    /// Returns [`SessionError::NotLoggedIn`] before login,
    /// [`SessionError::LocationUnknown`] before [`Session::locate`] and
    /// [`SessionError::Persistence`] when history cannot be saved.
    pub fn begin_search(&mut self, query: SearchQuery) -> Result<SearchTicket, SessionError> {
        self.ensure_logged_in()?;
        self.add_history(query.clone())?;
        let center = self.location.ok_or(SessionError::LocationUnknown)?;
        self.generation += 1;
        Ok(SearchTicket {
            generation: self.generation,
            query,
            center,
        })
    }

    /// Rank `raw` places for `ticket` and publish them.
    ///
    /// With no places the results view is cleared but the markers from the
    /// previous search stay on the map.
    ///
    /// # Errors
    /// Returns [`SessionError::Superseded`] when a newer search has begun;
    /// nothing is published in that case.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        raw: Vec<RawPlace>,
        tiers: &mut dyn PriceTierSource,
    ) -> Result<SearchOutcome, SessionError> {
        if ticket.generation != self.generation {
            warn!("discarding results for superseded search: {}", ticket.query);
            return Err(SessionError::Superseded(ticket.query));
        }
        let outcome = self
            .ranker
            .rank(ticket.center, ticket.query.budget, raw, tiers);
        match &outcome {
            SearchOutcome::NoResults => {
                self.results.clear();
                info!("no places found for {}", ticket.query);
            }
            SearchOutcome::Ranked(places) => {
                self.overlay.markers = places.iter().map(RankedPlace::location).collect();
                self.results = places.clone();
                info!("found {} places for {}", places.len(), ticket.query);
            }
        }
        Ok(outcome)
    }

    /// Record `query`, query `service` and publish the ranked places.
    ///
    /// History is written before the service is called, so it keeps the
    /// entry even when the search fails or finds nothing.
    ///
    /// # Errors
    /// See [`Session::begin_search`]; service failures surface as
    /// [`SessionError::PlaceQuery`].
    pub fn search(
        &mut self,
        query: SearchQuery,
        service: &dyn PlaceQueryService,
        tiers: &mut dyn PriceTierSource,
    ) -> Result<SearchOutcome, SessionError> {
        let ticket = self.begin_search(query)?;
        let raw = service
            .find_places(&ticket.place_query())
            .map_err(SessionError::PlaceQuery)?;
        self.complete_search(ticket, raw, tiers)
    }

    /// Run the history entry at `index` again. The replay is itself
    /// recorded as a new history entry.
    ///
    /// # Errors
    /// Returns [`SessionError::HistoryIndexOutOfRange`] for a missing entry,
    /// otherwise as [`Session::search`].
    pub fn replay_history(
        &mut self,
        index: usize,
        service: &dyn PlaceQueryService,
        tiers: &mut dyn PriceTierSource,
    ) -> Result<SearchOutcome, SessionError> {
        let query = self
            .history
            .get(index)
            .cloned()
            .ok_or(SessionError::HistoryIndexOutOfRange(index))?;
        self.search(query, service, tiers)
    }

    /// Route to `place`, look up its address and describe it.
    ///
    /// The previous route is removed from the map before anything else, so a
    /// failed lookup leaves no route drawn.
    ///
    /// # Errors
    /// Returns [`SessionError::NotLoggedIn`], [`SessionError::LocationUnknown`],
    /// [`SessionError::Route`] or [`SessionError::Geocode`].
    pub fn show_details(
        &mut self,
        place: &RankedPlace,
        routes: &dyn RouteService,
        geocoder: &dyn ReverseGeocoder,
    ) -> Result<PlaceDetails, SessionError> {
        self.ensure_logged_in()?;
        let origin = self.location.ok_or(SessionError::LocationUnknown)?;
        self.overlay.route = None;

        let route = routes.route(origin, place.location())?;
        self.overlay.route = Some(route.clone());

        let address = geocoder
            .address_or_default(place.location())
            .map_err(SessionError::Geocode)?;

        Ok(PlaceDetails {
            name: place.display_name().to_owned(),
            distance_km: place.distance_km,
            rating: place.rating,
            approx_cost_range: place.approx_cost_range.clone(),
            score: place.score.round(),
            address,
            route,
        })
    }

    fn ensure_logged_in(&self) -> Result<(), SessionError> {
        if self.screen == Screen::App {
            Ok(())
        } else {
            Err(SessionError::NotLoggedIn)
        }
    }

    fn save_favorites(&mut self) -> Result<(), SessionError> {
        store::save_collection(&mut self.store, FAVORITES_KEY, self.favorites.places())?;
        Ok(())
    }

    fn save_history(&mut self) -> Result<(), SessionError> {
        store::save_collection(&mut self.store, HISTORY_KEY, self.history.entries())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryKeyValueStore, StoreError};
    use crate::test_support::{
        FailingPlaceQueryService, StubGeocoder, StubPlaceQueryService, StubRouteService,
    };
    use crate::{Budget, FixedLocation, FixedPriceTier, Mood, PriceTier};
    use rstest::{fixture, rstest};

    fn here() -> Coordinate {
        Coordinate::new(12.9716, 77.5946).expect("valid coordinate")
    }

    fn query(mood: &str, budget: Budget) -> SearchQuery {
        SearchQuery::new(Mood::new(mood).expect("valid mood"), budget)
    }

    fn place(id: u64, lat: f64, lon: f64) -> RawPlace {
        RawPlace::with_empty_tags(id, Coordinate::new(lat, lon).expect("valid coordinate"))
    }

    #[fixture]
    fn session() -> Session<MemoryKeyValueStore> {
        let mut session = Session::new(MemoryKeyValueStore::new());
        session.go_to_login().expect("intro to login");
        session.login().expect("login");
        session.locate(&FixedLocation(here())).expect("locate");
        session
    }

    #[rstest]
    fn search_before_login_is_rejected() {
        let mut session = Session::new(MemoryKeyValueStore::new());
        let err = session
            .begin_search(query("cafe", Budget::Low))
            .expect_err("not logged in");
        assert!(matches!(err, SessionError::NotLoggedIn));
        assert!(!session.store().contains(HISTORY_KEY));
    }

    #[rstest]
    fn login_requires_login_screen() {
        let mut session = Session::new(MemoryKeyValueStore::new());
        let err = session.login().expect_err("skipping login screen");
        assert!(matches!(err, SessionError::Screen(_)));
        assert_eq!(session.screen(), Screen::Intro);
    }

    #[rstest]
    fn login_loads_stored_history() {
        let store = MemoryKeyValueStore::with_entry(
            HISTORY_KEY,
            r#"[{"mood":"bar","budget":"high"}]"#,
        );
        let mut session = Session::new(store);
        session.go_to_login().expect("intro to login");
        session.login().expect("login");
        assert_eq!(session.history().entries(), [query("bar", Budget::High)]);
    }

    #[rstest]
    fn corrupt_favorites_fail_login() {
        let store = MemoryKeyValueStore::with_entry(FAVORITES_KEY, "not json");
        let mut session = Session::new(store);
        session.go_to_login().expect("intro to login");
        let err = session.login().expect_err("decode fails");
        assert!(matches!(
            err,
            SessionError::Persistence(PersistenceError::Decode { .. })
        ));
        assert_eq!(session.screen(), Screen::Login);
    }

    #[rstest]
    fn locate_keeps_first_coordinate(mut session: Session<MemoryKeyValueStore>) {
        let elsewhere = Coordinate::new(0.0, 0.0).expect("valid coordinate");
        let located = session.locate(&FixedLocation(elsewhere)).expect("locate");
        assert_eq!(located, here());
    }

    #[rstest]
    fn failed_search_still_records_history(mut session: Session<MemoryKeyValueStore>) {
        let err = session
            .search(
                query("cafe", Budget::Low),
                &FailingPlaceQueryService::network(),
                &mut FixedPriceTier(PriceTier::ONE),
            )
            .expect_err("service fails");
        assert!(matches!(err, SessionError::PlaceQuery(_)));
        assert_eq!(session.history().len(), 1);
        assert!(session.store().contains(HISTORY_KEY));
    }

    #[rstest]
    fn empty_search_keeps_markers_and_clears_results(mut session: Session<MemoryKeyValueStore>) {
        let found = StubPlaceQueryService::new(vec![place(1, 12.972, 77.595)]);
        session
            .search(
                query("cafe", Budget::Low),
                &found,
                &mut FixedPriceTier(PriceTier::ONE),
            )
            .expect("search");
        assert_eq!(session.overlay().markers().len(), 1);

        let outcome = session
            .search(
                query("bar", Budget::Low),
                &StubPlaceQueryService::empty(),
                &mut FixedPriceTier(PriceTier::ONE),
            )
            .expect("search");
        assert_eq!(outcome, SearchOutcome::NoResults);
        assert!(session.results().is_empty());
        assert_eq!(session.overlay().markers().len(), 1);
        assert_eq!(session.history().len(), 2);
    }

    #[rstest]
    fn stale_ticket_cannot_publish(mut session: Session<MemoryKeyValueStore>) {
        let first = session
            .begin_search(query("cafe", Budget::Low))
            .expect("first");
        let second = session
            .begin_search(query("bar", Budget::Low))
            .expect("second");

        let err = session
            .complete_search(
                first,
                vec![place(1, 12.972, 77.595)],
                &mut FixedPriceTier(PriceTier::ONE),
            )
            .expect_err("superseded");
        assert!(matches!(err, SessionError::Superseded(q) if q == query("cafe", Budget::Low)));
        assert!(session.results().is_empty());
        assert!(session.overlay().markers().is_empty());

        session
            .complete_search(
                second,
                vec![place(2, 12.98, 77.6)],
                &mut FixedPriceTier(PriceTier::ONE),
            )
            .expect("latest ticket publishes");
        assert_eq!(session.results()[0].place.id, 2);
    }

    #[rstest]
    fn replay_adds_a_history_entry(mut session: Session<MemoryKeyValueStore>) {
        session
            .add_history(query("park", Budget::Medium))
            .expect("add history");
        let service = StubPlaceQueryService::empty();
        session
            .replay_history(0, &service, &mut FixedPriceTier(PriceTier::TWO))
            .expect("replay");
        assert_eq!(session.history().len(), 2);
        assert_eq!(service.queries()[0].amenity.as_str(), "park");
    }

    #[rstest]
    fn replay_out_of_range_is_an_error(mut session: Session<MemoryKeyValueStore>) {
        let err = session
            .replay_history(4, &StubPlaceQueryService::empty(), &mut FixedPriceTier(PriceTier::ONE))
            .expect_err("no entry");
        assert!(matches!(err, SessionError::HistoryIndexOutOfRange(4)));
        assert!(session.history().is_empty());
    }

    #[rstest]
    fn clearing_removes_stored_keys(mut session: Session<MemoryKeyValueStore>) {
        session
            .add_history(query("cafe", Budget::Low))
            .expect("add history");
        assert!(session.store().contains(HISTORY_KEY));
        session.clear_history().expect("clear");
        assert!(!session.store().contains(HISTORY_KEY));
        session.clear_favorites().expect("clear");
        assert!(!session.store().contains(FAVORITES_KEY));
    }

    #[rstest]
    fn favorites_persist_and_reload(mut session: Session<MemoryKeyValueStore>) {
        let outcome = session
            .search(
                query("cafe", Budget::Low),
                &StubPlaceQueryService::new(vec![place(1, 12.972, 77.595)]),
                &mut FixedPriceTier(PriceTier::ONE),
            )
            .expect("search");
        let best = outcome.places()[0].clone();
        assert!(session.add_favorite(best.clone()).expect("add"));
        assert!(!session.add_favorite(best).expect("duplicate"));
        let reloaded = session.reload_favorites().expect("reload");
        assert_eq!(reloaded.len(), 1);
        assert!(!session.remove_favorite(1.0).expect("remove unknown"));
        assert!(session.remove_favorite(12.972).expect("remove"));
        assert!(session.favorites().is_empty());
    }

    #[rstest]
    fn details_replace_the_route(mut session: Session<MemoryKeyValueStore>) {
        let outcome = session
            .search(
                query("cafe", Budget::Low),
                &StubPlaceQueryService::new(vec![place(1, 12.972, 77.595)]),
                &mut FixedPriceTier(PriceTier::ONE),
            )
            .expect("search");
        let target = outcome.places()[0].clone();

        let details = session
            .show_details(&target, &StubRouteService::straight_line(), &StubGeocoder::none())
            .expect("details");
        assert_eq!(details.address, crate::ADDRESS_NOT_AVAILABLE);
        assert_eq!(details.name, crate::UNNAMED_PLACE);
        assert_eq!(details.score, target.score.round());
        assert!(session.overlay().route().is_some());

        let err = session
            .show_details(&target, &StubRouteService::no_route(), &StubGeocoder::none())
            .expect_err("no route");
        assert!(matches!(err, SessionError::Route(RouteError::NoRoute)));
        assert!(session.overlay().route().is_none());
    }

    #[rstest]
    fn search_before_locate_still_records_history() {
        let mut session = Session::new(MemoryKeyValueStore::new());
        session.go_to_login().expect("intro to login");
        session.login().expect("login");

        let err = session
            .search(
                query("cafe", Budget::Low),
                &StubPlaceQueryService::empty(),
                &mut FixedPriceTier(PriceTier::ONE),
            )
            .expect_err("location unknown");
        assert!(matches!(err, SessionError::LocationUnknown));
        assert_eq!(session.history().len(), 1);
        assert!(session.store().contains(HISTORY_KEY));
    }

    /// Accepts writes but refuses to delete anything.
    #[derive(Debug, Default)]
    struct NoRemovalStore(MemoryKeyValueStore);

    impl KeyValueStore for NoRemovalStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            Err(StoreError::Backend {
                operation: "remove",
                key: key.to_owned(),
                source: Box::new(std::io::Error::other("read-only store")),
            })
        }
    }

    #[rstest]
    fn failed_clears_keep_collections_in_memory() {
        let mut session = Session::new(NoRemovalStore::default());
        session.go_to_login().expect("intro to login");
        session.login().expect("login");
        session.locate(&FixedLocation(here())).expect("locate");
        let outcome = session
            .search(
                query("cafe", Budget::Low),
                &StubPlaceQueryService::new(vec![place(1, 12.972, 77.595)]),
                &mut FixedPriceTier(PriceTier::ONE),
            )
            .expect("search");
        let best = outcome.places()[0].clone();
        session.add_favorite(best).expect("add favourite");

        let err = session.clear_favorites().expect_err("remove fails");
        assert!(matches!(
            err,
            SessionError::Persistence(PersistenceError::Store(_))
        ));
        assert_eq!(session.favorites().len(), 1);

        session.clear_history().expect_err("remove fails");
        assert_eq!(session.history().len(), 1);
    }
}
