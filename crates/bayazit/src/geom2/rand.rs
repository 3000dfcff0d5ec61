//! Random simple polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide small, deterministic samplers for decomposition inputs used by the
//!   property tests, the benches and `cli sample`.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and connect the points in angle order. The result is a
//!   simple, counter-clockwise polygon that is star-shaped about the origin;
//!   radial jitter is what creates reflex vertices.
//! - `draw_convex_radial` returns the convex hull of the same samples.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ring::Polygon;
use super::util::convex_hull;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped so that
    /// consecutive vertices stay less than π apart (keeps the loop simple).
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 10.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn radial_points(cfg: RadialCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng).max(3);
    // Largest gap is (1 + 2 aj) Δ; keep it below π.
    let aj_max = (0.45 * (n as f64 / 2.0 - 1.0)).min(0.49);
    let aj = cfg.angle_jitter_frac.clamp(0.0, aj_max);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Draw a random star-shaped polygon (counter-clockwise, usually non-convex).
pub fn draw_star_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    let poly = Polygon::new(radial_points(cfg, tok));
    if poly.signed_area() > 0.0 {
        Some(poly)
    } else {
        None
    }
}

/// Draw a random convex polygon: the hull of the star sampler's points.
pub fn draw_convex_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    convex_hull(&radial_points(cfg, tok))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::predicates::segments_cross;

    fn is_simple(p: &Polygon) -> bool {
        let n = p.len() as isize;
        for a in 0..n {
            for b in (a + 2)..n {
                if a == 0 && b == n - 1 {
                    continue;
                }
                if segments_cross(p.at(a), p.at(a + 1), p.at(b), p.at(b + 1), 1e-12) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            base_radius: 1.0,
            random_phase: true,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_star_radial(cfg, tok).expect("poly");
        let p2 = draw_star_radial(cfg, tok).expect("poly");
        assert_eq!(p1, p2);
        let p3 = draw_star_radial(cfg, ReplayToken { seed: 42, index: 8 }).expect("poly");
        assert_ne!(p1, p3);
    }

    #[test]
    fn star_is_simple_ccw_and_contains_origin() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 3, max: 40 },
            ..RadialCfg::default()
        };
        for index in 0..50 {
            let p = draw_star_radial(cfg, ReplayToken { seed: 9, index }).expect("poly");
            assert!(p.len() >= 3 && p.len() <= 40);
            assert!(p.is_ccw());
            assert!(p.contains(Vector2::zeros()));
            assert!(is_simple(&p), "self-intersecting sample {index}");
        }
    }

    #[test]
    fn convex_draw_is_convex() {
        let cfg = RadialCfg::default();
        for index in 0..20 {
            let p = draw_convex_radial(cfg, ReplayToken { seed: 3, index }).expect("hull");
            assert!(p.is_convex());
            assert!(p.is_ccw());
        }
    }
}
