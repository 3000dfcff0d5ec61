//! Diagonal search around a reflex vertex.
//!
//! `bracket` shoots the two edges incident to reflex vertex `i` forward past
//! `i` and records the closest edge each ray hits. The vertices between the
//! two hit edges (`lower_index ..= upper_index`) are the split candidates;
//! `best_diagonal` scores the visible ones.

use nalgebra::Vector2;

use super::visibility::can_see;
use crate::geom2::{left, left_on, line_intersect, right, right_on, square_dist, wrap, Polygon};

/// Closest crossings of the rays `(i-1 → i)` and `(i+1 → i)` beyond `i`.
///
/// Indices/points stay at `0` / origin when a ray hits nothing (only possible
/// on malformed input).
#[derive(Clone, Copy, Debug)]
pub(super) struct Bracket {
    /// Endpoint `j` of the edge `(j-1, j)` hit by the lower ray.
    pub lower_index: isize,
    pub lower_int: Vector2<f64>,
    /// Start `j` of the edge `(j, j+1)` hit by the upper ray.
    pub upper_index: isize,
    pub upper_int: Vector2<f64>,
}

impl Bracket {
    /// Both rays hit the same edge: no vertex lies between the crossings.
    #[inline]
    pub fn is_empty(&self, n: usize) -> bool {
        self.lower_index == wrap(self.upper_index + 1, n) as isize
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<f64> {
        (self.lower_int + self.upper_int) / 2.0
    }
}

pub(super) fn bracket(poly: &Polygon, i: isize, eps: f64) -> Bracket {
    let n = poly.len() as isize;
    let prev = poly.at(i - 1);
    let cur = poly.at(i);
    let next = poly.at(i + 1);
    let mut lower_dist = f64::MAX;
    let mut upper_dist = f64::MAX;
    let mut b = Bracket {
        lower_index: 0,
        lower_int: Vector2::zeros(),
        upper_index: 0,
        upper_int: Vector2::zeros(),
    };
    for j in 0..n {
        if left(prev, cur, poly.at(j)) && right_on(prev, cur, poly.at(j - 1)) {
            let p = line_intersect(prev, cur, poly.at(j), poly.at(j - 1), eps);
            // beyond i, not behind it
            if right(next, cur, p) {
                let d = square_dist(cur, p);
                if d < lower_dist {
                    lower_dist = d;
                    b.lower_index = j;
                    b.lower_int = p;
                }
            }
        }
        if left(next, cur, poly.at(j + 1)) && right_on(next, cur, poly.at(j)) {
            let p = line_intersect(next, cur, poly.at(j), poly.at(j + 1), eps);
            if left(prev, cur, p) {
                let d = square_dist(cur, p);
                if d < upper_dist {
                    upper_dist = d;
                    b.upper_index = j;
                    b.upper_int = p;
                }
            }
        }
    }
    b
}

/// Highest-scoring vertex in `lower ..= upper` (circular) visible from `i`.
///
/// Ties keep the first index reaching the maximum; falls back to `lower` when
/// nothing is visible. The result is wrapped into `[0, n)`.
pub(super) fn best_diagonal(
    poly: &Polygon,
    i: isize,
    lower: isize,
    upper: isize,
    eps: f64,
) -> isize {
    let n = poly.len();
    let mut upper = upper;
    while upper < lower {
        upper += n as isize;
    }
    let mut best = lower;
    let mut highest = 0.0;
    for j in lower..=upper {
        if !can_see(poly, i, j, eps) {
            continue;
        }
        let s = score(poly, i, j);
        if s > highest {
            best = j;
            highest = s;
        }
    }
    wrap(best, n) as isize
}

/// Closeness term in (0, 1] plus a bonus: +3 for a reflex `j` with `i`
/// right-on `(j-1 → j)` and left-on `(j+1 → j)`, +2 for any other reflex `j`,
/// +1 for convex `j`.
fn score(poly: &Polygon, i: isize, j: isize) -> f64 {
    let pi = poly.at(i);
    let pj = poly.at(j);
    let closeness = 1.0 / (square_dist(pi, pj) + 1.0);
    let bonus = if poly.is_reflex(j) {
        if right_on(poly.at(j - 1), pj, pi) && left_on(poly.at(j + 1), pj, pi) {
            3.0
        } else {
            2.0
        }
    } else {
        1.0
    };
    closeness + bonus
}
