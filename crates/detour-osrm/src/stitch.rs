//! Step-geometry stitching.
//!
//! OSRM steps share endpoints with their neighbours; naive concatenation
//! would double every junction point.

use crate::client::OsrmRoute;
use detour_core::GeoPoint;

/// Stitch an alternative's leg/step geometries into one continuous path,
/// flipping the wire's lng-first pairs into `GeoPoint`s.
pub fn stitch_route(route: &OsrmRoute) -> Vec<GeoPoint> {
    let mut path: Vec<GeoPoint> = Vec::new();
    for leg in &route.legs {
        for step in &leg.steps {
            append_step(&mut path, &step.geometry.coordinates);
        }
    }
    path
}

/// Append one step's coordinates, skipping the step's first point when it
/// exactly equals the last accumulated point.
fn append_step(path: &mut Vec<GeoPoint>, coordinates: &[[f64; 2]]) {
    let mut points = coordinates.iter().map(|&[lng, lat]| GeoPoint::new(lat, lng));
    if let (Some(last), Some(&[lng, lat])) = (path.last(), coordinates.first()) {
        if *last == GeoPoint::new(lat, lng) {
            points.next();
        }
    }
    path.extend(points);
}
