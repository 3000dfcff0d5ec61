//! 2D geometry kernel for convex decomposition.
//!
//! Purpose
//! - Orientation predicates, squared distances and eps-aware line/segment
//!   intersection (`predicates`).
//! - A vertex-ring `Polygon` with circular indexing (`ring`).
//! - Convex hull and reproducible random polygons (`util`, `rand`).
//!
//! Everything here is a pure function of its inputs; tolerances are passed in
//! explicitly (defaults in `cfg`).

pub mod cfg;
pub mod predicates;
pub mod rand;
mod ring;
mod util;

pub use predicates::{
    area, float_equals, left, left_on, line_intersect, right, right_on, segment_intersect,
    segments_cross, square_dist,
};
pub use ring::{wrap, Polygon};
pub use util::convex_hull;

/// 2D point (column vector, `+` and `/ f64` used for midpoints).
pub type Point = nalgebra::Vector2<f64>;
