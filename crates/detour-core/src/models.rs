//! Core data models for detour routing.

use serde::{Deserialize, Serialize};

/// Extra safety distance (kilometers) added outside a hazard's raw radius
/// before any intersection test.
pub const SAFE_MARGIN_KM: f64 = 0.69;

/// A geographic coordinate in WGS84 decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A circular danger zone a route should stay clear of.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardZone {
    pub id: String,
    pub center: GeoPoint,
    /// Raw hazard radius in meters.
    pub radius_m: f64,
}

impl HazardZone {
    /// Effective danger radius in kilometers: raw radius plus the fixed
    /// safety margin. All buffered-circle construction uses this value.
    pub fn effective_radius_km(&self) -> f64 {
        self.radius_m / 1000.0 + SAFE_MARGIN_KM
    }
}

/// A complete stitched route for one (candidate waypoint, alternative) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedRoute {
    pub id: String,
    /// Path in travel order, start to end.
    pub coordinates: Vec<GeoPoint>,
    /// Whether the path clears every hazard's buffered circle.
    pub is_safe: bool,
    #[serde(default)]
    pub duration_s: Option<f64>,
    #[serde(default)]
    pub distance_m: Option<f64>,
    /// Display color, assigned by position in the aggregated result.
    pub color: String,
}

/// One geocoding candidate returned by the search backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_radius_adds_safe_margin() {
        let hazard = HazardZone {
            id: "h1".to_string(),
            center: GeoPoint::new(50.45, 30.52),
            radius_m: 500.0,
        };
        assert!((hazard.effective_radius_km() - 1.19).abs() < 1e-12);
    }

    #[test]
    fn zero_radius_hazard_still_carries_margin() {
        let hazard = HazardZone {
            id: "h2".to_string(),
            center: GeoPoint::new(0.0, 0.0),
            radius_m: 0.0,
        };
        assert!((hazard.effective_radius_km() - SAFE_MARGIN_KM).abs() < 1e-12);
    }

    #[test]
    fn resolved_route_roundtrips_through_json() {
        let route = ResolvedRoute {
            id: "route-50.4250-30.3650-0".to_string(),
            coordinates: vec![GeoPoint::new(50.45, 30.33), GeoPoint::new(50.40, 30.40)],
            is_safe: true,
            duration_s: Some(612.3),
            distance_m: Some(8420.0),
            color: "#FF5733".to_string(),
        };
        let json = serde_json::to_string(&route).unwrap();
        let back: ResolvedRoute = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, route.id);
        assert_eq!(back.coordinates.len(), 2);
        assert!(back.is_safe);
    }
}
