//! The candidate-route pipeline: generate via points, resolve each one
//! against the routing backend, stamp safety, and color the result.

use crate::client::{OsrmClient, OsrmRoute};
use crate::error::BackendError;
use crate::stitch::stitch_route;
use detour_core::candidates::candidate_midpoints;
use detour_core::palette::assign_route_colors;
use detour_core::safety::is_route_safe;
use detour_core::{GeoPoint, HazardZone, ResolvedRoute};

/// Seam over the routing backend so the pipeline can be driven by a live
/// OSRM client or an in-process test double.
pub trait RoutingBackend {
    fn route_alternatives(
        &self,
        start: GeoPoint,
        via: GeoPoint,
        end: GeoPoint,
    ) -> impl std::future::Future<Output = Result<Vec<OsrmRoute>, BackendError>> + Send;
}

impl RoutingBackend for OsrmClient {
    async fn route_alternatives(
        &self,
        start: GeoPoint,
        via: GeoPoint,
        end: GeoPoint,
    ) -> Result<Vec<OsrmRoute>, BackendError> {
        OsrmClient::route_alternatives(self, start, via, end).await
    }
}

/// Deterministic route identity for one (candidate, alternative) pair.
pub fn route_id(via: GeoPoint, alternative_index: usize) -> String {
    format!("route-{:.4}-{:.4}-{}", via.lat, via.lng, alternative_index)
}

/// Drives the full pipeline against one routing backend.
pub struct RoutePlanner<B: RoutingBackend> {
    backend: B,
}

impl<B: RoutingBackend> RoutePlanner<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Compute candidate routes between `start` and `end` around `hazards`.
    ///
    /// Candidates are resolved sequentially in generation order; a failed
    /// backend call is logged and contributes zero routes. The returned
    /// list keeps every resolved alternative, safe or not, colored by
    /// position. An empty list is a normal outcome.
    pub async fn compute_candidate_routes(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        hazards: &[HazardZone],
    ) -> Vec<ResolvedRoute> {
        let mut routes: Vec<ResolvedRoute> = Vec::new();

        for via in candidate_midpoints(start, end, hazards) {
            match self.backend.route_alternatives(start, via, end).await {
                Ok(alternatives) => {
                    let mut resolved = resolve_alternatives(via, &alternatives);
                    for route in &mut resolved {
                        route.is_safe = is_route_safe(&route.coordinates, hazards);
                    }
                    routes.extend(resolved);
                }
                Err(err) => {
                    tracing::warn!(
                        lat = via.lat,
                        lng = via.lng,
                        "candidate route fetch failed: {err}"
                    );
                }
            }
        }

        assign_route_colors(&mut routes);
        routes
    }
}

/// Turn a candidate's backend alternatives into resolved routes with the
/// safety flag left as a placeholder for the validator.
fn resolve_alternatives(via: GeoPoint, alternatives: &[OsrmRoute]) -> Vec<ResolvedRoute> {
    alternatives
        .iter()
        .enumerate()
        .map(|(index, alternative)| ResolvedRoute {
            id: route_id(via, index),
            coordinates: stitch_route(alternative),
            is_safe: true,
            duration_s: Some(alternative.duration),
            distance_m: Some(alternative.distance),
            color: String::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{OsrmGeometry, OsrmLeg, OsrmStep};
    use detour_core::palette::ROUTE_COLORS;
    use detour_core::spatial::destination;

    const START: GeoPoint = GeoPoint { lat: 50.45, lng: 30.33 };
    const END: GeoPoint = GeoPoint { lat: 50.40, lng: 30.40 };

    /// Backend double: routes every request as a straight three-point
    /// polyline through the via point, optionally failing for via points
    /// in the configured failure band.
    struct StraightLineBackend {
        fail_band: Option<(f64, f64)>,
        alternatives_per_candidate: usize,
    }

    impl StraightLineBackend {
        fn new() -> Self {
            Self {
                fail_band: None,
                alternatives_per_candidate: 1,
            }
        }

        fn failing_between(lat_min: f64, lat_max: f64) -> Self {
            Self {
                fail_band: Some((lat_min, lat_max)),
                alternatives_per_candidate: 1,
            }
        }
    }

    fn straight_route(start: GeoPoint, via: GeoPoint, end: GeoPoint) -> OsrmRoute {
        let coordinates = vec![
            [start.lng, start.lat],
            [via.lng, via.lat],
            [end.lng, end.lat],
        ];
        OsrmRoute {
            distance: 8400.0,
            duration: 610.0,
            legs: vec![OsrmLeg {
                steps: vec![OsrmStep {
                    geometry: OsrmGeometry { coordinates },
                }],
            }],
        }
    }

    impl RoutingBackend for StraightLineBackend {
        async fn route_alternatives(
            &self,
            start: GeoPoint,
            via: GeoPoint,
            end: GeoPoint,
        ) -> Result<Vec<OsrmRoute>, BackendError> {
            if let Some((lat_min, lat_max)) = self.fail_band {
                if via.lat >= lat_min && via.lat <= lat_max {
                    return Err(BackendError::NoRoute);
                }
            }
            Ok((0..self.alternatives_per_candidate)
                .map(|_| straight_route(start, via, end))
                .collect())
        }
    }

    #[tokio::test]
    async fn no_hazards_yields_seven_safe_routes() {
        let planner = RoutePlanner::new(StraightLineBackend::new());
        let routes = planner.compute_candidate_routes(START, END, &[]).await;
        assert_eq!(routes.len(), 7);
        assert!(routes.iter().all(|r| r.is_safe));
        assert!(routes.iter().all(|r| r.coordinates.len() == 3));
    }

    #[tokio::test]
    async fn failing_candidate_is_skipped_not_fatal() {
        // The 0-offset candidate sits at the arithmetic midpoint; fail a
        // narrow band around it and keep everything else.
        let planner = RoutePlanner::new(StraightLineBackend::failing_between(50.424, 50.426));
        let routes = planner.compute_candidate_routes(START, END, &[]).await;
        assert_eq!(routes.len(), 6);
        assert!(routes.iter().all(|r| !r.id.starts_with("route-50.4250")));
    }

    #[tokio::test]
    async fn result_order_follows_candidate_generation_order() {
        let planner = RoutePlanner::new(StraightLineBackend::new());
        let routes = planner.compute_candidate_routes(START, END, &[]).await;
        let expected: Vec<String> = candidate_midpoints(START, END, &[])
            .into_iter()
            .map(|via| route_id(via, 0))
            .collect();
        let actual: Vec<String> = routes.iter().map(|r| r.id.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn routes_through_a_hazard_are_marked_unsafe_but_kept() {
        // Hazard on the midpoint: the straight-line backend routes every
        // alternative through its own via point, so bisector candidates
        // near the midpoint stay inside the buffer while the 3 km ones
        // clear it.
        let base_mid = GeoPoint::new((START.lat + END.lat) / 2.0, (START.lng + END.lng) / 2.0);
        let hazards = vec![HazardZone {
            id: "hz".to_string(),
            center: base_mid,
            radius_m: 300.0,
        }];
        let planner = RoutePlanner::new(StraightLineBackend::new());
        let routes = planner.compute_candidate_routes(START, END, &hazards).await;

        assert!(routes.len() >= 7);
        let unsafe_count = routes.iter().filter(|r| !r.is_safe).count();
        assert!(unsafe_count > 0, "midpoint route must violate the buffer");
        assert!(
            routes.iter().any(|r| r.is_safe),
            "wide detours must clear the buffer"
        );
    }

    #[tokio::test]
    async fn colors_cycle_in_aggregated_order() {
        let planner = RoutePlanner::new(StraightLineBackend {
            fail_band: None,
            alternatives_per_candidate: 2,
        });
        let routes = planner.compute_candidate_routes(START, END, &[]).await;
        assert_eq!(routes.len(), 14);
        for (idx, route) in routes.iter().enumerate() {
            assert_eq!(route.color, ROUTE_COLORS[idx % ROUTE_COLORS.len()]);
        }
    }

    #[test]
    fn route_ids_are_deterministic() {
        let via = destination(START, 1.0, 40.0);
        assert_eq!(route_id(via, 0), route_id(via, 0));
        assert_ne!(route_id(via, 0), route_id(via, 1));
        assert!(route_id(via, 0).starts_with("route-"));
    }
}
