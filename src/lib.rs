//! Placescout - county-level business search against the Google Places API.
//!
//! This library provides the geocoding client, paginated place search,
//! result merging, and output formatting used by the CLI binary.

pub mod google;
pub mod merge;
pub mod models;
pub mod output;

pub use google::{PlacesClient, SearchRequest};
pub use models::{GeoPoint, GeocodeResult, Place, Viewport};
