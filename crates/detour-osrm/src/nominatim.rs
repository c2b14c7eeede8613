//! Nominatim geocoding/search HTTP client.

use crate::error::BackendError;
use detour_core::{GeoPoint, SearchResult};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Public Nominatim instance.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Free-text queries shorter than this return no results.
const MIN_QUERY_CHARS: usize = 3;

const SEARCH_RESULT_LIMIT: usize = 5;

/// HTTP client for the Nominatim search API.
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Search for locations matching a free-text query.
    ///
    /// Returns up to five candidates; short queries and backend failures
    /// both come back as an empty list, with failures logged.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }
        match self.fetch_places(query, Some(SEARCH_RESULT_LIMIT)).await {
            Ok(results) => results,
            Err(err) => {
                tracing::warn!("location search failed: {err}");
                Vec::new()
            }
        }
    }

    /// Geocode a query to its best-matching coordinate, if any.
    pub async fn geocode(&self, query: &str) -> Option<GeoPoint> {
        match self.fetch_places(query, None).await {
            Ok(results) => results
                .first()
                .map(|place| GeoPoint::new(place.lat, place.lng)),
            Err(err) => {
                tracing::warn!("geocoding failed: {err}");
                None
            }
        }
    }

    async fn fetch_places(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<SearchResult>, BackendError> {
        let url = format!("{}/search", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("q", query)]);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit.to_string())]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let payload: Value = response.json().await?;
        let mut results = Vec::new();
        if let Some(entries) = payload.as_array() {
            for item in entries {
                let Some(lat) = coord_field(item, "lat") else {
                    continue;
                };
                let Some(lng) = coord_field(item, "lon") else {
                    continue;
                };
                results.push(SearchResult {
                    id: item
                        .get("place_id")
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                    name: item
                        .get("display_name")
                        .and_then(|v| v.as_str())
                        .unwrap_or_default()
                        .to_string(),
                    lat,
                    lng,
                });
            }
        }

        Ok(results)
    }
}

/// Nominatim serializes coordinates as strings; tolerate numbers too.
fn coord_field(item: &Value, key: &str) -> Option<f64> {
    let value = item.get(key)?;
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .or_else(|| value.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn short_queries_return_nothing_without_a_request() {
        // Unroutable base URL: proves no request is made for short input.
        let client = NominatimClient::new("http://127.0.0.1:0");
        assert!(client.search("ky").await.is_empty());
        assert!(client.search("").await.is_empty());
    }

    #[test]
    fn coord_field_parses_strings_and_numbers() {
        let item: Value = serde_json::json!({"lat": "50.4501", "lon": 30.5234});
        assert_eq!(coord_field(&item, "lat"), Some(50.4501));
        assert_eq!(coord_field(&item, "lon"), Some(30.5234));
        assert_eq!(coord_field(&item, "missing"), None);
    }

    #[test]
    fn coord_field_rejects_garbage() {
        let item: Value = serde_json::json!({"lat": "not-a-number"});
        assert_eq!(coord_field(&item, "lat"), None);
    }
}
