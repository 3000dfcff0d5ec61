//! Tolerance and size defaults for 2D decomposition.
//!
//! Policy
//! - These are defaults only. Every routine that compares floats takes its
//!   `eps` as an argument, and `DecompCfg` carries both values per caller.
//! - `DEFAULT_EPS` is absolute, so it assumes O(1)..O(1e3) coordinates.
//!   Callers working at very different scales should pass their own.

/// Tolerance for parallel-line detection and float equality.
pub const DEFAULT_EPS: f64 = 1e-4;
/// Maximum vertices per output polygon (Box2D's polygon limit).
pub const DEFAULT_MAX_VERTICES: usize = 8;
