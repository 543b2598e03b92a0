//! Overpass API JSON response types.
//!
//! See: <https://dev.overpass-api.de/output_formats.html#json>

use log::{debug, warn};
use moodmap_core::{Coordinate, RawPlace, Tags};
use serde::Deserialize;

/// Overpass interpreter response in `[out:json]` format.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    /// Matching elements in server order.
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
    /// Free-text note, used by the server to report runtime problems such as
    /// query timeouts while still answering with HTTP 200.
    pub remark: Option<String>,
}

/// One node, way or relation.
#[derive(Debug, Deserialize)]
pub struct OverpassElement {
    /// Element kind: `"node"`, `"way"` or `"relation"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// OpenStreetMap identifier.
    pub id: u64,
    /// Latitude; present on nodes.
    pub lat: Option<f64>,
    /// Longitude; present on nodes.
    pub lon: Option<f64>,
    /// Element tags.
    #[serde(default)]
    pub tags: Tags,
}

impl OverpassResponse {
    /// Convert the elements into places, skipping any without a valid
    /// position.
    #[must_use]
    pub fn into_places(self) -> Vec<RawPlace> {
        if let Some(remark) = &self.remark {
            warn!("Overpass remark: {remark}");
        }
        self.elements
            .into_iter()
            .filter_map(OverpassElement::into_place)
            .collect()
    }
}

impl OverpassElement {
    fn into_place(self) -> Option<RawPlace> {
        let (Some(lat), Some(lon)) = (self.lat, self.lon) else {
            debug!("skipping {} {} without coordinates", self.kind, self.id);
            return None;
        };
        match Coordinate::new(lat, lon) {
            Ok(location) => Some(RawPlace::new(self.id, location, self.tags)),
            Err(err) => {
                warn!("skipping {} {}: {err}", self.kind, self.id);
                None
            }
        }
    }
}
