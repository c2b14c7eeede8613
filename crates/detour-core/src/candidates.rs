//! Candidate via-point generation.
//!
//! Candidates come from two sources: a fan along the perpendicular
//! bisector of the direct start-end segment, and perimeter samples around
//! any hazard whose buffered circle crosses the direct line.

use crate::geometry::{circle_polygon, path_intersects_polygon};
use crate::models::{GeoPoint, HazardZone};
use crate::spatial::{bearing_deg, destination};

/// Perpendicular offsets (kilometers) probed along the bisector.
const BISECTOR_OFFSETS_KM: [f64; 7] = [0.0, 1.0, 2.0, 3.0, -1.0, -2.0, -3.0];

/// Via points sampled around an intersecting hazard's perimeter.
pub const PERIMETER_CANDIDATE_COUNT: usize = 10;

/// Two candidates within this tolerance on both axes are the same (~11 m).
const DEDUP_TOLERANCE_DEG: f64 = 0.0001;

/// Generate deduplicated candidate via points between `start` and `end`.
///
/// Always yields the 7 bisector candidates (pre-dedup); hazards whose
/// buffered circle crosses the direct line each add
/// [`PERIMETER_CANDIDATE_COUNT`] perimeter samples. Order of generation is
/// preserved and degenerate inputs (start == end) still produce a valid
/// set.
pub fn candidate_midpoints(
    start: GeoPoint,
    end: GeoPoint,
    hazards: &[HazardZone],
) -> Vec<GeoPoint> {
    let mut candidates: Vec<GeoPoint> = Vec::new();

    // Arithmetic midpoint, not a true great-circle midpoint. Good enough
    // at city scale and matches the dedup tolerance.
    let base_mid = GeoPoint::new((start.lat + end.lat) / 2.0, (start.lng + end.lng) / 2.0);
    let direct_bearing = bearing_deg(start, end);

    for offset in BISECTOR_OFFSETS_KM {
        if offset == 0.0 {
            candidates.push(base_mid);
        } else {
            let perp_bearing = if offset > 0.0 {
                direct_bearing + 90.0
            } else {
                direct_bearing - 90.0
            };
            candidates.push(destination(base_mid, offset.abs(), perp_bearing));
        }
    }

    let direct_line = [start, end];
    for hazard in hazards {
        let safe_radius_km = hazard.effective_radius_km();
        let buffered = circle_polygon(hazard.center, safe_radius_km);
        if path_intersects_polygon(&direct_line, &buffered) {
            for i in 0..PERIMETER_CANDIDATE_COUNT {
                let angle = i as f64 * (360.0 / PERIMETER_CANDIDATE_COUNT as f64);
                candidates.push(destination(hazard.center, safe_radius_km, angle));
            }
        }
    }

    dedup_by_proximity(candidates)
}

/// Keep the first occurrence of each candidate cluster, preserving order.
fn dedup_by_proximity(candidates: Vec<GeoPoint>) -> Vec<GeoPoint> {
    let mut unique: Vec<GeoPoint> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let seen = unique.iter().any(|u| {
            (u.lat - candidate.lat).abs() < DEDUP_TOLERANCE_DEG
                && (u.lng - candidate.lng).abs() < DEDUP_TOLERANCE_DEG
        });
        if !seen {
            unique.push(candidate);
        }
    }
    unique
}
