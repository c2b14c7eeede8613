pub mod candidates;
pub mod geometry;
pub mod models;
pub mod palette;
pub mod safety;
pub mod spatial;

pub use candidates::{candidate_midpoints, PERIMETER_CANDIDATE_COUNT};
pub use models::{GeoPoint, HazardZone, ResolvedRoute, SearchResult, SAFE_MARGIN_KM};
pub use palette::{assign_route_colors, ROUTE_COLORS};
pub use safety::is_route_safe;
pub use spatial::haversine_distance;
