//! Flat re-export surface for tools and benches.
//!
//! Everything the CLI and the benches touch, in one place; the module tree
//! stays free to move underneath.

// Decomposition
pub use crate::decompose::{can_see, decompose_with_defaults, DecompCfg, Decomposer};
pub use crate::error::DecomposeError;
// Kernel
pub use crate::geom2::cfg::{DEFAULT_EPS, DEFAULT_MAX_VERTICES};
pub use crate::geom2::{
    area, convex_hull, float_equals, left, left_on, line_intersect, right, right_on,
    segment_intersect, square_dist, wrap, Point, Polygon,
};
// Random polygons
pub use crate::geom2::rand::{
    draw_convex_radial, draw_star_radial, RadialCfg, ReplayToken as PolygonReplay, VertexCount,
};

/// Sum of piece areas minus the input area; ~0 for a valid decomposition.
pub fn area_defect(input: &Polygon, parts: &[Polygon]) -> f64 {
    parts.iter().map(|p| p.area()).sum::<f64>() - input.area()
}
