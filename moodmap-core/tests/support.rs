use moodmap_core::{
    Coordinate, PlaceQuery, PlaceQueryService, RawPlace, ServiceError, Tags,
};

/// Central Bengaluru, the search origin used throughout the behaviour tests.
pub fn bengaluru() -> Coordinate {
    Coordinate::new(12.9716, 77.5946).expect("valid coordinate")
}

/// `count` named places spreading north-east from [`bengaluru`].
pub fn cafes(count: u32) -> Vec<RawPlace> {
    (0..count)
        .map(|i| {
            let step = f64::from(i) * 0.003;
            let location = Coordinate::new(12.9716 + step, 77.5946 + step)
                .expect("valid coordinate");
            let tags = Tags::from([("name".to_owned(), format!("Cafe {i}"))]);
            RawPlace::new(u64::from(i), location, tags)
        })
        .collect()
}

/// Answers every query with the same places.
#[derive(Debug, Default)]
pub struct CannedPlaces(pub Vec<RawPlace>);

impl PlaceQueryService for CannedPlaces {
    fn find_places(&self, _query: &PlaceQuery) -> Result<Vec<RawPlace>, ServiceError> {
        Ok(self.0.clone())
    }
}
