//! Recursive splitting (entry points and recursion driver).

use nalgebra::Vector2;

use super::search::{best_diagonal, bracket};
use super::types::Decomposer;
use crate::error::DecomposeError;
use crate::geom2::Polygon;

impl Decomposer {
    /// Decompose a counter-clockwise simple polygon into convex pieces with at
    /// most `max_vertices` vertices each.
    pub fn decompose(&self, points: &[Vector2<f64>]) -> Result<Vec<Polygon>, DecomposeError> {
        self.decompose_polygon(&Polygon::from(points))
    }

    pub fn decompose_polygon(&self, poly: &Polygon) -> Result<Vec<Polygon>, DecomposeError> {
        validate_input(poly, self.cfg.eps)?;
        let parts = self.split(poly.clone());
        tracing::debug!(
            vertices = poly.len(),
            parts = parts.len(),
            max_vertices = self.cfg.max_vertices,
            "decomposed"
        );
        Ok(parts)
    }

    /// One recursion level: emit `poly` or split it in two and recurse.
    fn split(&self, poly: Polygon) -> Vec<Polygon> {
        let n = poly.len();
        let Some(i) = (0..n as isize).find(|&i| poly.is_reflex(i)) else {
            if n <= self.cfg.max_vertices {
                return vec![poly];
            }
            let half = (n / 2) as isize;
            tracing::debug!(vertices = n, "halving oversized convex piece");
            let first = poly.copy_range(0, half);
            let second = poly.copy_range(half, 0);
            return self.recurse(poly, first, second);
        };
        let (lower, upper) = self.split_at_reflex(&poly, i);
        self.recurse(poly, lower, upper)
    }

    fn split_at_reflex(&self, poly: &Polygon, i: isize) -> (Polygon, Polygon) {
        let eps = self.cfg.eps;
        let b = bracket(poly, i, eps);
        if b.is_empty(poly.len()) {
            // No vertex between the two crossings: cut through a Steiner point.
            let mid = b.midpoint();
            tracing::debug!(
                reflex = i,
                lower = b.lower_index,
                upper = b.upper_index,
                x = mid.x,
                y = mid.y,
                "steiner split"
            );
            let mut lower = poly.copy_range(i, b.upper_index);
            lower.v.push(mid);
            let mut upper = poly.copy_range(b.lower_index, i);
            upper.v.push(mid);
            (lower, upper)
        } else {
            let best = best_diagonal(poly, i, b.lower_index, b.upper_index, eps);
            tracing::debug!(reflex = i, best, "diagonal split");
            (poly.copy_range(i, best), poly.copy_range(best, i))
        }
    }

    /// Recurse on both pieces (lower first) unless the split would not shrink.
    fn recurse(&self, parent: Polygon, lower: Polygon, upper: Polygon) -> Vec<Polygon> {
        let n = parent.len();
        if !shrinks(&lower, n) || !shrinks(&upper, n) {
            // Only reachable on malformed input (wrong winding, self-intersection).
            tracing::warn!(
                vertices = n,
                lower = lower.len(),
                upper = upper.len(),
                "degenerate split; emitting piece unchanged"
            );
            return vec![parent];
        }
        let (mut out, rest) = self.join(lower, upper);
        out.extend(rest);
        out
    }

    #[cfg(not(feature = "parallel"))]
    fn join(&self, lower: Polygon, upper: Polygon) -> (Vec<Polygon>, Vec<Polygon>) {
        (self.split(lower), self.split(upper))
    }

    #[cfg(feature = "parallel")]
    fn join(&self, lower: Polygon, upper: Polygon) -> (Vec<Polygon>, Vec<Polygon>) {
        rayon::join(|| self.split(lower), || self.split(upper))
    }
}

#[inline]
fn shrinks(piece: &Polygon, parent_len: usize) -> bool {
    piece.len() >= 3 && piece.len() < parent_len
}

fn validate_input(poly: &Polygon, eps: f64) -> Result<(), DecomposeError> {
    if poly.len() < 3 {
        return Err(DecomposeError::invalid_input(format!(
            "need at least 3 vertices, got {}",
            poly.len()
        )));
    }
    if let Some(k) = poly
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(DecomposeError::invalid_input(format!(
            "vertex {k} has a non-finite coordinate"
        )));
    }
    // Tolerance scales with the squared bounding-box extent.
    let (lo, hi) = poly
        .iter()
        .fold((poly.v[0], poly.v[0]), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
    let extent = (hi - lo).max();
    let a = poly.area();
    if a <= eps * extent * extent {
        return Err(DecomposeError::invalid_input(format!(
            "zero area ({a:e} for extent {extent:e})"
        )));
    }
    Ok(())
}
