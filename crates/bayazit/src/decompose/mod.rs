//! Bayazit convex decomposition.
//!
//! Purpose
//! - Split a simple, counter-clockwise polygon into convex pieces, each with at
//!   most `DecompCfg::max_vertices` vertices.
//!
//! Algorithm (per recursion level)
//! - Find the first reflex vertex `i`. If there is none, emit the polygon, or
//!   halve it by index when it exceeds the vertex cap.
//! - Otherwise extend both edges at `i` past `i` and take the closest edge each
//!   extension hits (`search::bracket`). If both hit the same edge, cut from `i`
//!   to the midpoint of the two crossings (a Steiner point). Else cut from `i`
//!   to the best-scoring visible vertex between the two hits
//!   (`search::best_diagonal`, `visibility::can_see`).
//! - Recurse on both pieces, lower piece first; the output order is
//!   deterministic, also with the `parallel` feature.
//!
//! Layout
//! - `types.rs` (config + handle), `search.rs` (bracket and scoring),
//!   `visibility.rs` (diagonal test), `split.rs` (recursion).

mod search;
mod split;
mod types;
mod visibility;

pub use types::{DecompCfg, Decomposer};
pub use visibility::can_see;

use nalgebra::Vector2;

use crate::error::DecomposeError;
use crate::geom2::Polygon;

/// Decompose with `DecompCfg::default()` (8 vertices, eps 1e-4).
pub fn decompose_with_defaults(points: &[Vector2<f64>]) -> Result<Vec<Polygon>, DecomposeError> {
    Decomposer::default().decompose(points)
}
