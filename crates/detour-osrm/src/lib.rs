//! OSRM-backed route resolution and geocoding for detour routing.

pub mod client;
pub mod error;
pub mod nominatim;
pub mod planner;
pub mod stitch;

pub use client::{OsrmClient, OsrmGeometry, OsrmLeg, OsrmResponse, OsrmRoute, OsrmStep, DEFAULT_OSRM_URL};
pub use error::BackendError;
pub use nominatim::{NominatimClient, DEFAULT_NOMINATIM_URL};
pub use planner::{route_id, RoutePlanner, RoutingBackend};
pub use stitch::stitch_route;
