//! Configuration and the `Decomposer` handle.

use crate::error::DecomposeError;
use crate::geom2::cfg::{DEFAULT_EPS, DEFAULT_MAX_VERTICES};

/// Decomposition configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecompCfg {
    /// Upper bound on vertices per output polygon. Convex pieces above it are
    /// halved by index. Must be at least 3.
    pub max_vertices: usize,
    /// Absolute tolerance for parallel-line detection. The zero-area check
    /// uses it relative to the squared bounding-box extent.
    pub eps: f64,
}

impl Default for DecompCfg {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            eps: DEFAULT_EPS,
        }
    }
}

impl DecompCfg {
    pub fn validate(&self) -> Result<(), DecomposeError> {
        // Halving a triangle yields a triangle again.
        if self.max_vertices < 3 {
            return Err(DecomposeError::invalid_config(format!(
                "max_vertices must be >= 3, got {}",
                self.max_vertices
            )));
        }
        if !self.eps.is_finite() || self.eps < 0.0 {
            return Err(DecomposeError::invalid_config(format!(
                "eps must be finite and >= 0, got {}",
                self.eps
            )));
        }
        Ok(())
    }
}

/// Stateless decomposer bound to a validated `DecompCfg`.
///
/// Cheap to copy and safe to share across threads; every call owns its
/// intermediate polygons.
#[derive(Clone, Copy, Debug)]
pub struct Decomposer {
    pub(super) cfg: DecompCfg,
}

impl Decomposer {
    pub fn new(cfg: DecompCfg) -> Result<Self, DecomposeError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    #[inline]
    pub fn cfg(&self) -> DecompCfg {
        self.cfg
    }
}

impl Default for Decomposer {
    fn default() -> Self {
        Self {
            cfg: DecompCfg::default(),
        }
    }
}
