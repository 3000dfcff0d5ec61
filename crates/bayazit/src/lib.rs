//! Convex decomposition of simple polygons (Bayazit's method).
//!
//! A non-convex polygon is split recursively along diagonals chosen at its
//! reflex vertices until every piece is convex and has at most
//! `DecompCfg::max_vertices` vertices (default 8, the usual limit of rigid-body
//! engines).
//!
//! Conventions
//! - Input is a simple polygon in counter-clockwise order. Winding is assumed,
//!   not checked; clockwise input yields an unspecified (but non-panicking)
//!   result. `Polygon::ensure_ccw` is available for callers that need it.
//! - Tolerances are passed explicitly (`DecompCfg::eps`, default 1e-4). The
//!   parallel-line test is absolute, so eps should match the coordinate scale;
//!   the zero-area rejection is relative to the bounding box.
//!
//! Features
//! - `parallel`: split branches run on the rayon pool; output order is unchanged.

pub mod api;
pub mod decompose;
pub mod error;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use decompose::{decompose_with_defaults, DecompCfg, Decomposer};
pub use error::DecomposeError;
pub use geom2::{Point, Polygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::decompose::{decompose_with_defaults, DecompCfg, Decomposer};
    pub use crate::error::DecomposeError;
    pub use crate::geom2::rand::{
        draw_convex_radial, draw_star_radial, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{Point, Polygon};
    pub use nalgebra::Vector2 as Vec2;
}
