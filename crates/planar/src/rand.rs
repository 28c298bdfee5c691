//! Random star-shaped polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Small, deterministic sampler of simple polygons for property tests and
//!   benchmarks. Output may be concave; it is star-shaped around `center`.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 360), add bounded angular and
//!   radial jitter, sort by angle, and place each vertex with `Point::position`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;
use crate::shape::Polygon;

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
    /// Angular jitter as a fraction of the base spacing `360/n`. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point,
    /// Random global phase in [0, 360)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 10.0,
            center: Point::ORIGIN,
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
        // SplitMix64 finalizer.
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

/// Draw a random star-shaped polygon as an `Irregular` shape, counterclockwise
/// in a y-up frame.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 360.0 / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 360.0
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            (phase + (k as f64) * delta + jitter).rem_euclid(360.0)
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let vertices = angles
        .into_iter()
        .map(|deg| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center.position(deg, r, r)
        })
        .collect();
    Polygon::irregular(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{metrics, ShapeKind};

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            ..RadialCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let mut p1 = draw_polygon_radial(cfg, tok);
        let mut p2 = draw_polygon_radial(cfg, tok);
        assert_eq!(p1.kind(), ShapeKind::Irregular);
        assert_eq!(p1.points().len(), 10);
        assert_eq!(p1.points(), p2.points());
        let mut p3 = draw_polygon_radial(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1.points(), p3.points());
    }

    #[test]
    fn draws_wind_counterclockwise() {
        for index in 0..20 {
            let mut p = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed: 5, index });
            assert!(metrics::shoelace(p.points()) > 0.0);
        }
    }

    #[test]
    fn without_jitter_draws_are_convex() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(8),
            angle_jitter_frac: 0.0,
            radial_jitter: 0.0,
            random_phase: false,
            ..RadialCfg::default()
        };
        let mut p = draw_polygon_radial(cfg, ReplayToken { seed: 0, index: 0 });
        assert!(p.is_convex());
        let r = cfg.base_radius;
        let expected = 0.5 * 8.0 * r * r * (45f64).to_radians().sin();
        assert!((p.area() - expected).abs() < 1e-9);
    }
}
