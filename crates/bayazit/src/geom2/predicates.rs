//! Orientation predicates and line/segment intersection.
//!
//! Conventions
//! - `area(a, b, c) = (b - a) × (c - a)`: positive when `c` lies left of the
//!   directed line `a → b`, i.e. `(a, b, c)` turns counter-clockwise.
//! - `left`/`right` are strict, `left_on`/`right_on` include the collinear case.
//!   They compare the raw cross product against zero (no eps); only the
//!   intersection routines are eps-aware.

use nalgebra::Vector2;

/// Twice the signed area of triangle `(a, b, c)`.
#[inline]
pub fn area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

#[inline]
pub fn left(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    area(a, b, c) > 0.0
}

#[inline]
pub fn left_on(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    area(a, b, c) >= 0.0
}

#[inline]
pub fn right(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    area(a, b, c) < 0.0
}

#[inline]
pub fn right_on(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    area(a, b, c) <= 0.0
}

/// Squared Euclidean distance (no sqrt; only used for comparisons).
#[inline]
pub fn square_dist(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm_squared()
}

#[inline]
pub fn float_equals(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Intersection of the infinite lines through `(p1, p2)` and `(q1, q2)`.
///
/// Solves `a x + b y = c` for both lines by Cramer's rule. Parallel lines
/// (`|det| <= eps`) yield the zero vector; callers must rule that case out
/// themselves (the decomposer's orientation gates do).
pub fn line_intersect(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    q1: Vector2<f64>,
    q2: Vector2<f64>,
    eps: f64,
) -> Vector2<f64> {
    let a1 = p2.y - p1.y;
    let b1 = p1.x - p2.x;
    let c1 = a1 * p1.x + b1 * p1.y;
    let a2 = q2.y - q1.y;
    let b2 = q1.x - q2.x;
    let c2 = a2 * q1.x + b2 * q1.y;
    let det = a1 * b2 - a2 * b1;
    if float_equals(det, 0.0, eps) {
        return Vector2::zeros();
    }
    Vector2::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det)
}

/// Intersection of `p1 → p2` with `p3 → p4`, each side either a bounded
/// segment or an infinite line.
///
/// Returns `None` when
/// - the directions are parallel (`|denom| <= eps`),
/// - the parameter `ua` (resp. `ub`) leaves `[0, 1]` on a bounded side,
/// - both parameters are exactly zero (the two start points coincide).
pub fn segment_intersect(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
    first_is_segment: bool,
    second_is_segment: bool,
    eps: f64,
) -> Option<Vector2<f64>> {
    let a = p4.y - p3.y;
    let b = p2.x - p1.x;
    let c = p4.x - p3.x;
    let d = p2.y - p1.y;

    let denom = a * b - c * d;
    if denom.abs() <= eps {
        return None;
    }

    let e = p1.y - p3.y;
    let f = p1.x - p3.x;
    let inv = 1.0 / denom;

    let ua = (c * e - a * f) * inv;
    if first_is_segment && !(0.0..=1.0).contains(&ua) {
        return None;
    }
    let ub = (b * e - d * f) * inv;
    if second_is_segment && !(0.0..=1.0).contains(&ub) {
        return None;
    }
    if ua == 0.0 && ub == 0.0 {
        return None;
    }
    Some(Vector2::new(p1.x + ua * b, p1.y + ua * d))
}

/// Bounded-segment intersection on both sides.
#[inline]
pub fn segments_cross(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
    eps: f64,
) -> bool {
    segment_intersect(p1, p2, p3, p4, true, true, eps).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::cfg::DEFAULT_EPS;
    use nalgebra::vector;

    #[test]
    fn orientation_signs() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert!((area(a, b, vector![0.0, 1.0]) - 1.0).abs() < 1e-12);
        assert!(left(a, b, vector![0.5, 0.1]));
        assert!(right(a, b, vector![0.5, -0.1]));
        let on = vector![2.0, 0.0];
        assert!(!left(a, b, on) && !right(a, b, on));
        assert!(left_on(a, b, on) && right_on(a, b, on));
    }

    #[test]
    fn square_dist_is_not_rooted() {
        assert_eq!(square_dist(vector![1.0, 1.0], vector![4.0, 5.0]), 25.0);
    }

    #[test]
    fn line_intersect_crossing_and_parallel() {
        let p = line_intersect(
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 2.0],
            vector![2.0, 0.0],
            DEFAULT_EPS,
        );
        assert!((p - vector![1.0, 1.0]).norm() < 1e-12);
        // Lines, not segments: the crossing may lie outside both inputs.
        let far = line_intersect(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![5.0, 1.0],
            vector![5.0, 2.0],
            DEFAULT_EPS,
        );
        assert!((far - vector![5.0, 0.0]).norm() < 1e-12);
        let parallel = line_intersect(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            DEFAULT_EPS,
        );
        assert_eq!(parallel, Vector2::zeros());
    }

    #[test]
    fn segment_intersect_bounds_per_side() {
        let (p1, p2) = (vector![0.0, 0.0], vector![1.0, 0.0]);
        let (p3, p4) = (vector![2.0, -1.0], vector![2.0, 1.0]);
        // x = 2 is beyond the first segment.
        assert!(segment_intersect(p1, p2, p3, p4, true, true, DEFAULT_EPS).is_none());
        let hit = segment_intersect(p1, p2, p3, p4, false, true, DEFAULT_EPS).unwrap();
        assert!((hit - vector![2.0, 0.0]).norm() < 1e-12);
        // Second side bounded and missed.
        let (q3, q4) = (vector![0.5, 1.0], vector![0.5, 2.0]);
        assert!(segment_intersect(p1, p2, q3, q4, true, true, DEFAULT_EPS).is_none());
        assert!(segment_intersect(p1, p2, q3, q4, true, false, DEFAULT_EPS).is_some());
    }

    #[test]
    fn segment_intersect_rejects_parallel_and_shared_start() {
        let p1 = vector![0.0, 0.0];
        assert!(segment_intersect(
            p1,
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            true,
            true,
            DEFAULT_EPS
        )
        .is_none());
        // Both parameters zero: the segments only touch at their common start.
        assert!(segment_intersect(
            p1,
            vector![1.0, 0.0],
            p1,
            vector![0.0, 1.0],
            true,
            true,
            DEFAULT_EPS
        )
        .is_none());
        // Touching at the end of both segments still counts.
        assert!(segments_cross(
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![2.0, 0.0],
            vector![1.0, 1.0],
            DEFAULT_EPS
        ));
    }

    #[test]
    fn eps_controls_parallel_detection() {
        // denom = 1e-3: parallel under a loose eps, crossing under the default.
        let p1 = vector![0.0, 0.0];
        let p2 = vector![1.0, 0.0];
        let p3 = vector![0.0, 1.0];
        let p4 = vector![1.0, 1.001];
        assert!(segment_intersect(p1, p2, p3, p4, false, false, 1e-2).is_none());
        assert!(segment_intersect(p1, p2, p3, p4, false, false, DEFAULT_EPS).is_some());
        assert!(float_equals(1.0, 1.0 + 5e-5, DEFAULT_EPS));
        assert!(!float_equals(1.0, 1.0 + 5e-4, DEFAULT_EPS));
    }
}
