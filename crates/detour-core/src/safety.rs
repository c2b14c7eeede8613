//! Route safety validation against buffered hazard circles.

use crate::geometry::{circle_polygon, path_intersects_polygon};
use crate::models::{GeoPoint, HazardZone};

/// A route is safe iff its path clears every hazard's buffered circle.
///
/// Touching the buffer boundary already counts as unsafe. A hazard whose
/// buffer cannot be constructed (non-finite effective radius) fails
/// closed and marks the route unsafe.
pub fn is_route_safe(path: &[GeoPoint], hazards: &[HazardZone]) -> bool {
    hazards.iter().all(|hazard| {
        let radius_km = hazard.effective_radius_km();
        if !radius_km.is_finite() {
            return false;
        }
        let buffered = circle_polygon(hazard.center, radius_km);
        !path_intersects_polygon(path, &buffered)
    })
}
