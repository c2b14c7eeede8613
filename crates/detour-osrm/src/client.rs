//! OSRM routing API HTTP client.

use crate::error::BackendError;
use detour_core::GeoPoint;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Public OSRM demo server, route service v1.
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org/route/v1";

/// HTTP client for the OSRM route service.
pub struct OsrmClient {
    client: Client,
    base_url: String,
}

/// Top-level OSRM route response.
#[derive(Debug, Deserialize)]
pub struct OsrmResponse {
    pub code: String,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// One route alternative with totals and per-step geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmRoute {
    pub distance: f64,
    pub duration: f64,
    pub legs: Vec<OsrmLeg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsrmLeg {
    pub steps: Vec<OsrmStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsrmStep {
    pub geometry: OsrmGeometry,
}

/// GeoJSON LineString geometry; coordinates are lng-first pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

impl OsrmClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Fetch route alternatives through start -> via -> end.
    ///
    /// Alternatives are requested with full-detail GeoJSON geometry and a
    /// per-step breakdown so the caller can stitch an exact path. An empty
    /// route list is reported as [`BackendError::NoRoute`].
    pub async fn route_alternatives(
        &self,
        start: GeoPoint,
        via: GeoPoint,
        end: GeoPoint,
    ) -> Result<Vec<OsrmRoute>, BackendError> {
        let url = format!(
            "{}/driving/{},{};{},{};{},{}",
            self.base_url, start.lng, start.lat, via.lng, via.lat, end.lng, end.lat
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("alternatives", "true"),
                ("geometries", "geojson"),
                ("overview", "full"),
                ("steps", "true"),
            ])
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let payload: OsrmResponse = response.json().await?;
        if payload.routes.is_empty() {
            return Err(BackendError::NoRoute);
        }

        Ok(payload.routes)
    }
}
