//! Core data models for the search pipeline.

pub mod place;

pub use place::{GeoPoint, GeocodeResult, Place, Viewport};
