//! Mutual visibility of two ring vertices.

use crate::geom2::{left_on, right_on, segments_cross, wrap, Polygon};

/// `true` iff the diagonal `(i, j)` lies inside the polygon.
///
/// Two stages: the diagonal must leave both endpoints through their interior
/// angle, and it must not meet any edge other than the (up to four) edges
/// incident to `i` or `j`. Indices may be any integer; they are wrapped first.
pub fn can_see(poly: &Polygon, i: isize, j: isize, eps: f64) -> bool {
    let n = poly.len();
    let i = wrap(i, n) as isize;
    let j = wrap(j, n) as isize;
    if leaves_angle(poly, i, j) || leaves_angle(poly, j, i) {
        return false;
    }
    let a = poly.at(i);
    let b = poly.at(j);
    for k in 0..n as isize {
        let k1 = wrap(k + 1, n) as isize;
        if k == i || k == j || k1 == i || k1 == j {
            continue;
        }
        if segments_cross(a, b, poly.at(k), poly.at(k + 1), eps) {
            return false;
        }
    }
    true
}

/// Does the direction `v → w` fall outside the interior angle at `v`?
fn leaves_angle(poly: &Polygon, v: isize, w: isize) -> bool {
    let pv = poly.at(v);
    let prev = poly.at(v - 1);
    let next = poly.at(v + 1);
    let pw = poly.at(w);
    if poly.is_reflex(v) {
        // Reflex: only the wedge on-or-outside both edges is excluded.
        left_on(pv, prev, pw) && right_on(pv, next, pw)
    } else {
        right_on(pv, next, pw) || left_on(pv, prev, pw)
    }
}
