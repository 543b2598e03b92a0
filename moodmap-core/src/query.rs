//! Search queries and the Overpass query they expand into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Budget, Coordinate};

/// Radius of the spatial query around the user, in metres.
pub const SEARCH_RADIUS_M: u32 = 3000;

/// A mood keyword, used verbatim as an OSM `amenity` value.
///
/// Accepts lowercase ASCII letters, digits and underscores, matching the
/// shape of amenity values such as `cafe` or `ice_cream`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mood(String);

/// Errors returned by [`Mood::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoodError {
    /// The keyword was empty.
    #[error("mood must not be empty")]
    Empty,
    /// The keyword contained a character outside `[a-z0-9_]`.
    #[error("mood {0:?} may only contain lowercase letters, digits and '_'")]
    InvalidCharacter(String),
}

impl Mood {
    /// Validate and construct a mood keyword.
    ///
    /// # Errors
    /// Returns [`MoodError`] when `keyword` is empty or contains characters
    /// outside `[a-z0-9_]`.
    pub fn new(keyword: impl Into<String>) -> Result<Self, MoodError> {
        let keyword = keyword.into();
        if keyword.is_empty() {
            return Err(MoodError::Empty);
        }
        let valid = keyword
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !valid {
            return Err(MoodError::InvalidCharacter(keyword));
        }
        Ok(Self(keyword))
    }

    /// The keyword as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Mood {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl TryFrom<String> for Mood {
    type Error = MoodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Mood> for String {
    fn from(value: Mood) -> Self {
        value.0
    }
}

/// A `(mood, budget)` pair; also the unit stored in search history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Category keyword.
    pub mood: Mood,
    /// Spending preference.
    pub budget: Budget,
}

impl SearchQuery {
    /// Pair a mood with a budget.
    #[must_use]
    pub const fn new(mood: Mood, budget: Budget) -> Self {
        Self { mood, budget }
    }

    /// The spatial query this search submits for a user at `center`.
    #[must_use]
    pub fn place_query(&self, center: Coordinate) -> PlaceQuery {
        PlaceQuery::new(self.mood.clone(), center)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mood: {} | Budget: {}", self.mood, self.budget)
    }
}

/// Nodes tagged `amenity=<mood>` within a radius of a coordinate.
///
/// # Examples
/// ```
/// use moodmap_core::{Coordinate, Mood, PlaceQuery};
///
/// let query = PlaceQuery::new(Mood::new("cafe")?, Coordinate::new(12.97, 77.59)?);
/// assert_eq!(
///     query.to_overpass_ql(),
///     "[out:json];node[\"amenity\"=\"cafe\"](around:3000,12.97,77.59);out;",
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceQuery {
    /// Amenity value to match.
    pub amenity: Mood,
    /// Centre of the search circle.
    pub center: Coordinate,
    /// Search radius in metres.
    pub radius_m: u32,
}

impl PlaceQuery {
    /// Build a query with the default [`SEARCH_RADIUS_M`].
    #[must_use]
    pub const fn new(amenity: Mood, center: Coordinate) -> Self {
        Self {
            amenity,
            center,
            radius_m: SEARCH_RADIUS_M,
        }
    }

    /// Render the query in Overpass QL.
    #[must_use]
    pub fn to_overpass_ql(&self) -> String {
        format!(
            "[out:json];node[\"amenity\"=\"{}\"](around:{},{},{});out;",
            self.amenity,
            self.radius_m,
            self.center.latitude(),
            self.center.longitude(),
        )
    }
}
