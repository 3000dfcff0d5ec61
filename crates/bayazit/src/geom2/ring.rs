//! Vertex-ring polygon with circular indexing.
//!
//! Purpose
//! - Owned, ordered vertex loop (`Polygon`) shared by the decomposer, the
//!   samplers and the CLI. The closing edge `v[n-1] → v[0]` is implicit.
//!
//! Conventions
//! - Counter-clockwise winding is the convex orientation: vertex `i` is reflex
//!   iff `right(at(i-1), at(i), at(i+1))`. Nothing here reorients input
//!   implicitly; `ensure_ccw` is an explicit caller action.
//! - All neighbour access goes through `wrap`, which accepts any `isize`
//!   (negative or `>= n`) and maps it into `[0, n)` with `rem_euclid`.

use nalgebra::Vector2;

use super::predicates::right;

/// Map any integer index onto `[0, n)`. `n` must be non-zero.
#[inline]
pub fn wrap(i: isize, n: usize) -> usize {
    debug_assert!(n > 0, "wrap on empty ring");
    i.rem_euclid(n as isize) as usize
}

/// Closed polygon given by its vertex loop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub v: Vec<Vector2<f64>>,
}

impl Polygon {
    #[inline]
    pub fn new(v: Vec<Vector2<f64>>) -> Self {
        Self { v }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }

    /// Vertex at circular index `i`.
    #[inline]
    pub fn at(&self, i: isize) -> Vector2<f64> {
        self.v[wrap(i, self.v.len())]
    }

    /// Vertices `at(i) ..= at(j)`, walking forward; `j` is advanced by `n`
    /// until `j >= i`, so `copy_range(i, i)` is the single vertex `at(i)`.
    pub fn copy_range(&self, i: isize, j: isize) -> Polygon {
        let n = self.v.len() as isize;
        let mut j = j;
        while j < i {
            j += n;
        }
        Polygon {
            v: (i..=j).map(|k| self.at(k)).collect(),
        }
    }

    /// Shoelace area: positive for counter-clockwise loops.
    pub fn signed_area(&self) -> f64 {
        let n = self.v.len();
        if n < 3 {
            return 0.0;
        }
        let mut a = 0.0;
        for k in 0..n {
            let p = self.v[k];
            let q = self.v[(k + 1) % n];
            a += p.x * q.y - q.x * p.y;
        }
        0.5 * a
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Reverse in place if the loop is clockwise.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < 0.0 {
            self.v.reverse();
        }
    }

    /// Interior angle at `i` is > 180° (for counter-clockwise winding).
    #[inline]
    pub fn is_reflex(&self, i: isize) -> bool {
        right(self.at(i - 1), self.at(i), self.at(i + 1))
    }

    pub fn reflex_indices(&self) -> Vec<usize> {
        (0..self.v.len())
            .filter(|&i| self.is_reflex(i as isize))
            .collect()
    }

    /// No reflex vertex. Collinear vertices are accepted.
    pub fn is_convex(&self) -> bool {
        (0..self.v.len()).all(|i| !self.is_reflex(i as isize))
    }

    /// Even-odd point containment (boundary points may go either way).
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        let n = self.v.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.v[i];
            let b = self.v[j];
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector2<f64>> {
        self.v.iter()
    }
}

impl From<Vec<Vector2<f64>>> for Polygon {
    fn from(v: Vec<Vector2<f64>>) -> Self {
        Self { v }
    }
}

impl From<&[Vector2<f64>]> for Polygon {
    fn from(v: &[Vector2<f64>]) -> Self {
        Self { v: v.to_vec() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn l_shape() -> Polygon {
        Polygon::new(vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 2.0],
            vector![2.0, 2.0],
            vector![2.0, 4.0],
            vector![0.0, 4.0],
        ])
    }

    #[test]
    fn wrap_handles_negative_and_overflow() {
        assert_eq!(wrap(-1, 6), 5);
        assert_eq!(wrap(-7, 6), 5);
        assert_eq!(wrap(6, 6), 0);
        assert_eq!(wrap(13, 6), 1);
        let p = l_shape();
        assert_eq!(p.at(-1), vector![0.0, 4.0]);
        assert_eq!(p.at(8), vector![4.0, 2.0]);
    }

    #[test]
    fn copy_range_wraps_forward() {
        let p = l_shape();
        let fwd = p.copy_range(1, 3);
        assert_eq!(fwd.v, vec![p.v[1], p.v[2], p.v[3]]);
        let wrapped = p.copy_range(4, 1);
        assert_eq!(wrapped.v, vec![p.v[4], p.v[5], p.v[0], p.v[1]]);
        assert_eq!(p.copy_range(2, 2).len(), 1);
        // Indices past n are read circularly.
        assert_eq!(p.copy_range(3, 7).v, p.copy_range(3, 1).v);
    }

    #[test]
    fn area_reflex_and_convexity() {
        let p = l_shape();
        assert!((p.signed_area() - 12.0).abs() < 1e-12);
        assert!(p.is_ccw());
        assert_eq!(p.reflex_indices(), vec![3]);
        assert!(!p.is_convex());
        let mut cw = p.clone();
        cw.v.reverse();
        assert!((cw.signed_area() + 12.0).abs() < 1e-12);
        let mut fixed = cw.clone();
        fixed.ensure_ccw();
        assert!(fixed.is_ccw());
    }

    #[test]
    fn contains_even_odd() {
        let p = l_shape();
        assert!(p.contains(vector![1.0, 1.0]));
        assert!(p.contains(vector![1.0, 3.0]));
        assert!(!p.contains(vector![3.0, 3.0]));
        assert!(!p.contains(vector![-1.0, 1.0]));
    }
}
