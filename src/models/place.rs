//! Place and geocoding records as returned by the Google Maps APIs.

use serde::{Deserialize, Serialize};

/// Geographic point (Google wire names)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Rectangular area bounded by two corner points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub northeast: GeoPoint,
    pub southwest: GeoPoint,
}

/// Canonical geocoding answer for a county.
///
/// Produced once per run from the first geocoding candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,

    /// Center point used as the search origin
    pub location: GeoPoint,

    /// Bounding box, present for larger features
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Viewport>,

    /// Recommended display viewport
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
}

/// One business as returned by a search call.
///
/// Serialized unchanged into the results file, so field names follow the
/// wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Unique identifier; the dedup key when merging result sets
    pub place_id: String,

    pub name: String,

    /// Full address; text search results carry this
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,

    /// Locality string; nearby search results carry this instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,

    /// Average rating, 1.0 to 5.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default)]
    pub user_ratings_total: u32,

    /// Price bracket, 0 (free) to 4 (very expensive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,

    /// Category tags in API order, e.g. ["gym", "health", "point_of_interest"]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

impl Place {
    /// Best available address string: full address, else locality.
    pub fn address(&self) -> Option<&str> {
        self.formatted_address.as_deref().or(self.vicinity.as_deref())
    }
}
