//! Paginated place search over the text and nearby endpoints.
//!
//! Both strategies share one pagination loop; they differ only in the
//! endpoint path and the first-page parameters.

use serde::Deserialize;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::{PlacesClient, API_BASE_URL};
use crate::models::{GeoPoint, Place};

/// First-page shape of a paginated search.
#[derive(Debug, Clone)]
pub enum SearchRequest {
    /// Free-text query, e.g. "gyms in Fulton County, Georgia".
    Text {
        query: String,
        location: GeoPoint,
        radius: u32,
    },
    /// Category keyword match around a point; the fallback strategy.
    Nearby {
        keyword: String,
        location: GeoPoint,
        radius: u32,
    },
}

impl SearchRequest {
    fn endpoint(&self) -> &'static str {
        match self {
            SearchRequest::Text { .. } => "place/textsearch/json",
            SearchRequest::Nearby { .. } => "place/nearbysearch/json",
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            SearchRequest::Text {
                query,
                location,
                radius,
            } => vec![
                ("query", query.clone()),
                ("location", format!("{},{}", location.lat, location.lng)),
                ("radius", radius.to_string()),
            ],
            SearchRequest::Nearby {
                keyword,
                location,
                radius,
            } => vec![
                ("keyword", keyword.clone()),
                ("location", format!("{},{}", location.lat, location.lng)),
                ("radius", radius.to_string()),
            ],
        }
    }

    fn describe(&self) -> &str {
        match self {
            SearchRequest::Text { query, .. } => query,
            SearchRequest::Nearby { keyword, .. } => keyword,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<Place>,
    pub next_page_token: Option<String>,
    pub error_message: Option<String>,
}

/// What the pagination loop does after absorbing one page.
#[derive(Debug, PartialEq)]
pub(crate) enum PageOutcome {
    /// More results behind this token.
    Next(String),
    /// Last page, or zero results.
    Done,
    /// Unexpected API status; keep what was accumulated.
    Failed {
        status: String,
        error_message: Option<String>,
    },
}

/// Fold one page into the accumulator and decide the next step.
pub(crate) fn collect_page(response: SearchResponse, acc: &mut Vec<Place>) -> PageOutcome {
    match response.status.as_str() {
        "OK" => {
            acc.extend(response.results);
            match response.next_page_token {
                Some(token) => PageOutcome::Next(token),
                None => PageOutcome::Done,
            }
        }
        "ZERO_RESULTS" => PageOutcome::Done,
        _ => PageOutcome::Failed {
            status: response.status,
            error_message: response.error_message,
        },
    }
}

impl PlacesClient {
    /// Run a search to exhaustion, following `next_page_token` across pages.
    ///
    /// API error statuses and transport failures end pagination with a
    /// warning; whatever was accumulated up to that point is returned.
    pub async fn search(&self, request: &SearchRequest) -> Vec<Place> {
        let url = format!("{}/{}", API_BASE_URL, request.endpoint());
        let mut places = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut params: Vec<(&str, String)> = match &page_token {
                Some(token) => vec![("pagetoken", token.clone())],
                None => request.params(),
            };
            params.push(("key", self.api_key.clone()));

            let response = match self.fetch_page(&url, &params).await {
                Ok(response) => response,
                Err(e) => {
                    warn!("Search request for \"{}\" failed: {}", request.describe(), e);
                    break;
                }
            };

            match collect_page(response, &mut places) {
                PageOutcome::Next(token) => {
                    debug!("{} results so far, following next page", places.len());
                    sleep(self.page_delay).await;
                    page_token = Some(token);
                }
                PageOutcome::Done => break,
                PageOutcome::Failed {
                    status,
                    error_message,
                } => {
                    match error_message {
                        Some(message) => warn!("Search returned status {}: {}", status, message),
                        None => warn!("Search returned status {}", status),
                    }
                    break;
                }
            }
        }

        places
    }

    async fn fetch_page(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<SearchResponse, reqwest::Error> {
        self.client
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str) -> Place {
        Place {
            place_id: id.to_string(),
            name: format!("Place {}", id),
            formatted_address: None,
            vicinity: None,
            rating: None,
            user_ratings_total: 0,
            price_level: None,
            types: Vec::new(),
        }
    }

    fn page(status: &str, ids: &[&str], token: Option<&str>) -> SearchResponse {
        SearchResponse {
            status: status.to_string(),
            results: ids.iter().map(|id| place(id)).collect(),
            next_page_token: token.map(String::from),
            error_message: None,
        }
    }

    #[test]
    fn test_ok_page_with_token_continues() {
        let mut acc = Vec::new();
        let outcome = collect_page(page("OK", &["a", "b"], Some("t1")), &mut acc);
        assert_eq!(outcome, PageOutcome::Next("t1".to_string()));
        assert_eq!(acc.len(), 2);
    }

    #[test]
    fn test_ok_page_without_token_ends() {
        let mut acc = vec![place("a")];
        let outcome = collect_page(page("OK", &["b"], None), &mut acc);
        assert_eq!(outcome, PageOutcome::Done);
        let ids: Vec<&str> = acc.iter().map(|p| p.place_id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_pages_concatenate_in_received_order() {
        let mut acc = Vec::new();
        collect_page(page("OK", &["a", "b"], Some("t1")), &mut acc);
        collect_page(page("OK", &["c", "d"], None), &mut acc);
        let ids: Vec<&str> = acc.iter().map(|p| p.place_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_zero_results_is_not_an_error() {
        let mut acc = Vec::new();
        let outcome = collect_page(page("ZERO_RESULTS", &[], None), &mut acc);
        assert_eq!(outcome, PageOutcome::Done);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_error_status_keeps_accumulated_results() {
        let mut acc = vec![place("a")];
        let outcome = collect_page(page("REQUEST_DENIED", &["b"], None), &mut acc);
        assert!(
            matches!(outcome, PageOutcome::Failed { ref status, .. } if status == "REQUEST_DENIED")
        );
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_error_status_on_first_page_yields_empty() {
        let mut acc = Vec::new();
        let outcome = collect_page(page("OVER_QUERY_LIMIT", &[], None), &mut acc);
        assert!(matches!(outcome, PageOutcome::Failed { .. }));
        assert!(acc.is_empty());
    }

    #[test]
    fn test_request_endpoints_and_params() {
        let location = GeoPoint {
            lat: 33.7,
            lng: -84.4,
        };

        let text = SearchRequest::Text {
            query: "gym in Fulton County, Georgia".to_string(),
            location,
            radius: 30000,
        };
        assert_eq!(text.endpoint(), "place/textsearch/json");
        assert!(text
            .params()
            .contains(&("query", "gym in Fulton County, Georgia".to_string())));

        let nearby = SearchRequest::Nearby {
            keyword: "gym".to_string(),
            location,
            radius: 30000,
        };
        assert_eq!(nearby.endpoint(), "place/nearbysearch/json");
        assert!(nearby.params().contains(&("keyword", "gym".to_string())));
        assert!(nearby
            .params()
            .contains(&("location", "33.7,-84.4".to_string())));
    }
}
