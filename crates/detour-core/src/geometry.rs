//! Polygon construction and intersection tests over coordinate slices.
//!
//! Shapes are plain `&[GeoPoint]` slices with free functions over them;
//! there is exactly one behavior per shape kind, so no trait layer.

use crate::models::GeoPoint;
use crate::spatial::{destination, segments_intersect_2d, to_local_xy};

/// Number of sides used when approximating a circle as a polygon.
pub const CIRCLE_STEPS: usize = 64;

/// Build a circular polygon of `radius_km` around `center`, approximated
/// with [`CIRCLE_STEPS`] vertices (open ring, wrap handled by the
/// intersection tests).
pub fn circle_polygon(center: GeoPoint, radius_km: f64) -> Vec<GeoPoint> {
    let mut vertices = Vec::with_capacity(CIRCLE_STEPS);
    for i in 0..CIRCLE_STEPS {
        let angle = i as f64 * (360.0 / CIRCLE_STEPS as f64);
        vertices.push(destination(center, radius_km, angle));
    }
    vertices
}

/// Point-in-polygon via ray casting on raw lat/lng degrees.
pub fn point_in_polygon(point: GeoPoint, polygon: &[GeoPoint]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let yi = polygon[i].lat;
        let xi = polygon[i].lng;
        let yj = polygon[j].lat;
        let xj = polygon[j].lng;

        if ((yi > point.lat) != (yj > point.lat))
            && (point.lng < (xj - xi) * (point.lat - yi) / (yj - yi) + xi)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Whether a connected path touches or crosses a polygon (boundary or
/// interior). Segment tests run in a local plane projected around the
/// polygon's first vertex; containment is checked so a path fully inside
/// the polygon still counts.
pub fn path_intersects_polygon(path: &[GeoPoint], polygon: &[GeoPoint]) -> bool {
    if path.is_empty() || polygon.len() < 3 {
        return false;
    }

    if path.iter().any(|&p| point_in_polygon(p, polygon)) {
        return true;
    }
    if path.len() < 2 {
        return false;
    }

    let reference = polygon[0];
    let path_xy: Vec<(f64, f64)> = path.iter().map(|&p| to_local_xy(p, reference)).collect();
    let poly_xy: Vec<(f64, f64)> = polygon.iter().map(|&p| to_local_xy(p, reference)).collect();

    let n = poly_xy.len();
    for seg in path_xy.windows(2) {
        let mut j = n - 1;
        for i in 0..n {
            if segments_intersect_2d(seg[0], seg[1], poly_xy[j], poly_xy[i]) {
                return true;
            }
            j = i;
        }
    }

    false
}
