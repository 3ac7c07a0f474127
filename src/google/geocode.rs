//! County geocoding via the Google Geocoding API.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::{PlacesClient, API_BASE_URL};
use crate::models::{GeoPoint, GeocodeResult, Viewport};

#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Non-OK status or an empty candidate list.
    #[error("geocoding returned status {status} ({})", .error_message.as_deref().unwrap_or("no matching place"))]
    NotFound {
        status: String,
        error_message: Option<String>,
    },

    #[error("geocoding request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Append the "County" qualifier unless the name already carries it.
pub fn county_label(county: &str) -> String {
    if county.to_lowercase().contains("county") {
        county.to_string()
    } else {
        format!("{} County", county)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeCandidate>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeCandidate {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: GeoPoint,
    bounds: Option<Viewport>,
    viewport: Option<Viewport>,
}

impl PlacesClient {
    /// Resolve a county to its formatted address and center point.
    ///
    /// The first geocoding candidate is taken as canonical. Nothing is
    /// retried; any failure is fatal for the run.
    pub async fn geocode_county(
        &self,
        county: &str,
        state: &str,
    ) -> Result<GeocodeResult, GeocodeError> {
        let address = format!("{}, {}, USA", county_label(county), state);
        debug!("Geocoding \"{}\"", address);

        let response: GeocodeResponse = self
            .client
            .get(format!("{}/geocode/json", API_BASE_URL))
            .query(&[("address", address.as_str()), ("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.status != "OK" {
            return Err(GeocodeError::NotFound {
                status: response.status,
                error_message: response.error_message,
            });
        }

        match response.results.into_iter().next() {
            Some(candidate) => Ok(GeocodeResult {
                formatted_address: candidate.formatted_address,
                location: candidate.geometry.location,
                bounds: candidate.geometry.bounds,
                viewport: candidate.geometry.viewport,
            }),
            None => Err(GeocodeError::NotFound {
                status: response.status,
                error_message: response.error_message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_appends_qualifier() {
        assert_eq!(county_label("Fulton"), "Fulton County");
    }

    #[test]
    fn test_label_keeps_existing_qualifier() {
        assert_eq!(county_label("Fulton County"), "Fulton County");
    }

    #[test]
    fn test_label_qualifier_case_insensitive() {
        assert_eq!(county_label("fulton COUNTY"), "fulton COUNTY");
        assert_eq!(county_label("DeKalb county"), "DeKalb county");
    }
}
