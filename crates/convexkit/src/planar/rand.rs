//! Random convex polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sampler for right-handed convex polygons, used by property
//!   tests and benchmarks of hull reduction and clipping.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, reduce to the convex hull, then translate to `center`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::hull::convex_hull_in_place;

/// Error type for sampler configuration and degenerate draws.
#[derive(Debug)]
pub enum SampleError {
    InvalidParams { reason: String },
    DegenerateSample { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateSample {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
            Self::DegenerateSample { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n,
            VertexCount::Uniform { min, max } => rng.gen_range(min..=max),
        }
    }

    fn min(&self) -> usize {
        match *self {
            VertexCount::Fixed(n) => n,
            VertexCount::Uniform { min, .. } => min,
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n, in [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Relative radial jitter: radii are `base_radius * (1 + u)`, `|u| <= radial_jitter < 1`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Vector2<f64>,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Vector2::zeros(),
            random_phase: true,
        }
    }
}

impl RadialCfg {
    pub fn validate(&self) -> Result<(), SampleError> {
        if self.vertex_count.min() < 3 {
            return Err(SampleError::invalid("vertex count must be >= 3"));
        }
        if let VertexCount::Uniform { min, max } = self.vertex_count {
            if min > max {
                return Err(SampleError::invalid("vertex count min <= max required"));
            }
        }
        if !(0.0..=0.49).contains(&self.angle_jitter_frac) {
            return Err(SampleError::invalid("angle_jitter_frac must be in [0, 0.49]"));
        }
        if !(0.0..1.0).contains(&self.radial_jitter) {
            return Err(SampleError::invalid("radial_jitter must be in [0, 1)"));
        }
        if !(self.base_radius.is_finite() && self.base_radius > 0.0) {
            return Err(SampleError::invalid("base_radius must be finite and > 0"));
        }
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(SampleError::invalid("center must be finite"));
        }
        Ok(())
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
    pub fn to_std_rng(self) -> StdRng {
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

/// Draw a right-handed convex polygon.
///
/// The hull of the jittered points can drop vertices, so the result may have
/// fewer vertices than requested (never fewer than 3).
pub fn draw_convex_polygon(
    cfg: RadialCfg,
    tok: ReplayToken,
) -> Result<Vec<Vector2<f64>>, SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut pts: Vec<Vector2<f64>> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * cfg.angle_jitter_frac * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * cfg.radial_jitter;
            let r = (1.0 + u) * cfg.base_radius;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    convex_hull_in_place(&mut pts);
    if pts.len() < 3 {
        return Err(SampleError::degenerate("hull collapsed below 3 vertices"));
    }
    Ok(pts)
}
