//! Google Maps API client.
//!
//! One client carries the API key, the HTTP connection, and the inter-page
//! delay shared by the geocoding and place-search endpoints.

pub mod geocode;
pub mod search;

pub use geocode::{county_label, GeocodeError};
pub use search::SearchRequest;

use std::time::Duration;

use reqwest::Client;

const API_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Wait before redeeming a `next_page_token`; the token takes a moment to
/// become valid on Google's side.
pub const PAGE_DELAY: Duration = Duration::from_secs(2);

/// Client for the geocoding, text-search, and nearby-search endpoints.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    page_delay: Duration,
}

impl PlacesClient {
    pub fn new(api_key: String) -> Self {
        Self::with_page_delay(api_key, PAGE_DELAY)
    }

    /// Client with a custom inter-page delay. Tests zero this out.
    pub fn with_page_delay(api_key: String, page_delay: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("placescout/0.1")
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            api_key,
            page_delay,
        }
    }
}
