//! Places as returned by the query service and as ranked for display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Coordinate, PriceTier};

/// OpenStreetMap-style free-form tags.
pub type Tags = BTreeMap<String, String>;

/// Name shown for places without a `name` tag.
pub const UNNAMED_PLACE: &str = "Unnamed Place";

/// A point of interest as returned by the place query service.
///
/// # Examples
/// ```
/// use moodmap_core::{Coordinate, RawPlace, Tags};
///
/// let place = RawPlace::new(
///     7,
///     Coordinate::new(12.97, 77.59)?,
///     Tags::from([("name".into(), "Blue Tokai".into())]),
/// );
/// assert_eq!(place.display_name(), "Blue Tokai");
/// # Ok::<(), moodmap_core::CoordinateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPlace {
    /// Opaque identifier assigned by the service.
    pub id: u64,
    /// Position of the place.
    #[serde(flatten)]
    pub location: Coordinate,
    /// Free-form tags; may or may not include `name`.
    #[serde(default)]
    pub tags: Tags,
}

impl RawPlace {
    /// Construct a place from its parts.
    #[must_use]
    pub const fn new(id: u64, location: Coordinate, tags: Tags) -> Self {
        Self { id, location, tags }
    }

    /// Construct a place without tags.
    #[must_use]
    pub const fn with_empty_tags(id: u64, location: Coordinate) -> Self {
        Self::new(id, location, Tags::new())
    }

    /// The `name` tag, or [`UNNAMED_PLACE`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.tags
            .get("name")
            .map_or(UNNAMED_PLACE, String::as_str)
    }
}

/// A [`RawPlace`] annotated with distance, synthetic attributes and a score.
///
/// Created once per search by the [`Ranker`](crate::Ranker) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlace {
    /// The underlying service record.
    #[serde(flatten)]
    pub place: RawPlace,
    /// Distance from the user in kilometres.
    pub distance_km: f64,
    /// Synthetic rating, never below 3.0.
    pub rating: f64,
    /// Synthetic price tier.
    pub price_tier: PriceTier,
    /// Spend range derived from `price_tier`.
    pub approx_cost_range: String,
    /// Heuristic desirability; higher is better.
    pub score: f64,
}

impl RankedPlace {
    /// Position of the place.
    #[must_use]
    pub const fn location(&self) -> Coordinate {
        self.place.location
    }

    /// Latitude, the key favourites are deduplicated on.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.place.location.latitude()
    }

    /// See [`RawPlace::display_name`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.place.display_name()
    }
}
