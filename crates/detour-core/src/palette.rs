//! Display colors for aggregated routes.

use crate::models::ResolvedRoute;

/// Fixed cyclic palette; routes are colored by position in the final list.
pub const ROUTE_COLORS: [&str; 10] = [
    "#FF5733", // red-orange
    "#33FF57", // lime green
    "#3357FF", // blue
    "#F1C40F", // yellow
    "#9B59B6", // purple
    "#E67E22", // orange
    "#1ABC9C", // teal
    "#E74C3C", // red
    "#2ECC71", // green
    "#3498DB", // light blue
];

/// Assign `palette[index % 10]` to every route, in place. Ordering and
/// membership are left untouched; unsafe routes keep their slot.
pub fn assign_route_colors(routes: &mut [ResolvedRoute]) {
    for (idx, route) in routes.iter_mut().enumerate() {
        route.color = ROUTE_COLORS[idx % ROUTE_COLORS.len()].to_string();
    }
}
