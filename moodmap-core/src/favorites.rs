//! Saved places.
//!
//! Uniqueness is keyed on latitude alone: two distinct places sharing a
//! latitude cannot both be saved. This matches the stored data format and is
//! a known defect.

use crate::RankedPlace;

/// Favourite places in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    places: Vec<RankedPlace>,
}

impl Favorites {
    /// No favourites.
    #[must_use]
    pub const fn new() -> Self {
        Self { places: Vec::new() }
    }

    /// Rebuild from stored places, dropping later latitude duplicates.
    #[must_use]
    pub fn from_places(places: Vec<RankedPlace>) -> Self {
        let mut favorites = Self::new();
        for place in places {
            favorites.add(place);
        }
        favorites
    }

    /// Save `place` unless a favourite with the same latitude exists.
    ///
    /// Returns whether the place was added.
    pub fn add(&mut self, place: RankedPlace) -> bool {
        if self.contains_latitude(place.latitude()) {
            return false;
        }
        self.places.push(place);
        true
    }

    /// Remove every favourite at `latitude`. Returns whether any was removed.
    pub fn remove_latitude(&mut self, latitude: f64) -> bool {
        let before = self.places.len();
        self.places.retain(|place| place.latitude() != latitude);
        self.places.len() != before
    }

    /// Whether a favourite exists at exactly `latitude`.
    #[must_use]
    pub fn contains_latitude(&self, latitude: f64) -> bool {
        self.places.iter().any(|place| place.latitude() == latitude)
    }

    /// Drop every favourite.
    pub fn clear(&mut self) {
        self.places.clear();
    }

    /// Saved places in insertion order.
    #[must_use]
    pub fn places(&self) -> &[RankedPlace] {
        &self.places
    }

    /// Number of favourites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, PriceTier, RawPlace, Tags};
    use rstest::rstest;

    fn favorite(id: u64, lat: f64, lon: f64, name: &str) -> RankedPlace {
        let location = Coordinate::new(lat, lon).expect("valid coordinate");
        RankedPlace {
            place: RawPlace::new(id, location, Tags::from([("name".into(), name.into())])),
            distance_km: 0.5,
            rating: 4.8,
            price_tier: PriceTier::ONE,
            approx_cost_range: PriceTier::ONE.cost_range().to_owned(),
            score: 145.5,
        }
    }

    #[rstest]
    fn same_latitude_is_saved_once() {
        let mut favorites = Favorites::new();
        assert!(favorites.add(favorite(1, 12.97, 77.59, "A")));
        assert!(!favorites.add(favorite(1, 12.97, 77.59, "A")));
        assert_eq!(favorites.len(), 1);
    }

    #[rstest]
    fn distinct_places_on_one_latitude_collide() {
        // Known defect: uniqueness ignores longitude and identity.
        let mut favorites = Favorites::new();
        favorites.add(favorite(1, 12.97, 77.59, "A"));
        assert!(!favorites.add(favorite(2, 12.97, 77.61, "B")));
        assert_eq!(favorites.places()[0].display_name(), "A");
    }

    #[rstest]
    fn removing_unknown_latitude_is_noop() {
        let mut favorites = Favorites::from_places(vec![favorite(1, 12.97, 77.59, "A")]);
        assert!(!favorites.remove_latitude(10.0));
        assert_eq!(favorites.len(), 1);
        assert!(favorites.remove_latitude(12.97));
        assert!(favorites.is_empty());
    }

    #[rstest]
    fn from_places_drops_duplicates() {
        let favorites = Favorites::from_places(vec![
            favorite(1, 12.97, 77.59, "A"),
            favorite(2, 12.97, 77.60, "B"),
            favorite(3, 12.98, 77.60, "C"),
        ]);
        let names: Vec<&str> = favorites.places().iter().map(RankedPlace::display_name).collect();
        assert_eq!(names, vec!["A", "C"]);
    }
}
