//! Random eddy-like rings and contour collections (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic synthetic inputs for tests, benches and CLI demos: closed
//!   rings that look like SSH contours around an eddy core, and multi-level
//!   collections in the CSR layout consumed by `contour`.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   jitter (angles stay sorted, so the ring is star-shaped and simple) and
//!   relative radial jitter, then translate to the requested center.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::contour::ContourCollection;
use crate::GeomError;

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

/// Jittered-ring sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Vector2<f64>,
    /// Rotate the ring by a random phase drawn from [0, 2π).
    pub random_phase: bool,
    /// Repeat the first vertex at the end, as contour extraction does.
    pub closed: bool,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(32),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.05,
            base_radius: 1.0,
            center: Vector2::zeros(),
            random_phase: true,
            closed: false,
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

/// Draw one jittered ring as parallel `(x, y)` arrays.
pub fn draw_ring(cfg: RingCfg, tok: ReplayToken) -> (Vec<f64>, Vec<f64>) {
    let mut rng = tok.to_std_rng();
    ring_with_rng(&cfg, &mut rng)
}

fn ring_with_rng<R: Rng>(cfg: &RingCfg, rng: &mut R) -> (Vec<f64>, Vec<f64>) {
    let n = cfg.vertex_count.sample(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / n as f64;
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let cap = n + usize::from(cfg.closed);
    let mut x = Vec::with_capacity(cap);
    let mut y = Vec::with_capacity(cap);
    for k in 0..n {
        let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
        let th = phase + k as f64 * delta + jitter;
        let r = r0 * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
        x.push(cfg.center.x + r * th.cos());
        y.push(cfg.center.y + r * th.sin());
    }
    if cfg.closed {
        x.push(x[0]);
        y.push(y[0]);
    }
    (x, y)
}

/// Multi-level collection sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CollectionCfg {
    pub levels: usize,
    /// Contours per level; `Uniform { min: 0, .. }` yields empty levels.
    pub contours_per_level: (usize, usize),
    /// Ring shape; `center` is replaced by a uniform draw in `domain`.
    pub ring: RingCfg,
    /// Half-extent of the square domain around the origin.
    pub domain: f64,
}

impl Default for CollectionCfg {
    fn default() -> Self {
        Self {
            levels: 8,
            contours_per_level: (0, 12),
            ring: RingCfg::default(),
            domain: 50.0,
        }
    }
}

/// Draw a multi-level contour collection in the CSR layout.
pub fn draw_collection(cfg: CollectionCfg, tok: ReplayToken) -> Result<ContourCollection, GeomError> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = cfg.contours_per_level;
    let hi = hi.max(lo);
    let dom = cfg.domain.abs().max(1e-9);
    let mut levels = Vec::with_capacity(cfg.levels);
    for _ in 0..cfg.levels {
        let count = rng.gen_range(lo..=hi);
        let mut contours = Vec::with_capacity(count);
        for _ in 0..count {
            let ring = RingCfg {
                center: Vector2::new(rng.gen_range(-dom..dom), rng.gen_range(-dom..dom)),
                ..cfg.ring
            };
            contours.push(ring_with_rng(&ring, &mut rng));
        }
        levels.push(contours);
    }
    ContourCollection::from_levels(levels)
}
