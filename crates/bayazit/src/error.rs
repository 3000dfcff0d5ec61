//! Error type for decomposition entry points.

use thiserror::Error;

/// Rejections raised before the recursion starts.
///
/// Malformed-but-plausible inputs (self-intersections, clockwise winding) are
/// not detected; they produce an unspecified, non-panicking result.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DecomposeError {
    /// Polygon cannot be decomposed (too few vertices, NaN/inf, zero area).
    #[error("invalid input polygon: {reason}")]
    InvalidInput { reason: String },
    /// `DecompCfg` values the recursion cannot honour.
    #[error("invalid decomposition config: {reason}")]
    InvalidConfig { reason: String },
}

impl DecomposeError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
