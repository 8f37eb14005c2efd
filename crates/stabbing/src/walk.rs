//! Random disk walks (bounded turning + replay tokens).
//!
//! Purpose
//! - Provide reproducible disk-center sequences for property tests, benches
//!   and the CLI. Consecutive centers are always more than `2r` apart, so a
//!   walk never trips the consecutive-overlap check of the tunnel.
//!
//! Model
//! - Start at the origin heading along +x. Each step turns the heading by a
//!   uniform angle in `[-max_turn, max_turn]` and advances by a uniform length
//!   in `[step_min, step_max]`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point2;

/// Error type for generator parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid walk params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Random walk configuration.
#[derive(Clone, Copy, Debug)]
pub struct WalkCfg {
    /// Disk radius the walk is drawn for.
    pub radius: f64,
    /// Minimum step length; must exceed `2 * radius`.
    pub step_min: f64,
    /// Maximum step length.
    pub step_max: f64,
    /// Maximum heading change per step, radians in `[0, π]`.
    pub max_turn: f64,
}

impl Default for WalkCfg {
    fn default() -> Self {
        Self {
            radius: 1.0,
            step_min: 3.0,
            step_max: 6.0,
            max_turn: 0.3,
        }
    }
}

impl WalkCfg {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GeneratorError::invalid("radius must be positive and finite"));
        }
        if !(self.step_min.is_finite() && self.step_max.is_finite()) {
            return Err(GeneratorError::invalid("step bounds must be finite"));
        }
        if self.step_min <= 2.0 * self.radius {
            return Err(GeneratorError::invalid(format!(
                "step_min {} must exceed 2 * radius = {}",
                self.step_min,
                2.0 * self.radius
            )));
        }
        if self.step_max < self.step_min {
            return Err(GeneratorError::invalid("step_max must be >= step_min"));
        }
        if !(0.0..=std::f64::consts::PI).contains(&self.max_turn) {
            return Err(GeneratorError::invalid("max_turn must lie in [0, pi]"));
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

/// Draw `len` disk centers.
pub fn draw_walk(
    cfg: WalkCfg,
    len: usize,
    tok: ReplayToken,
) -> Result<Vec<Point2>, GeneratorError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let mut out = Vec::with_capacity(len);
    let mut p = Vector2::zeros();
    let mut heading = 0.0f64;
    for k in 0..len {
        if k > 0 {
            heading += rng.gen_range(-cfg.max_turn..=cfg.max_turn);
            let step = rng.gen_range(cfg.step_min..=cfg.step_max);
            p += Vector2::new(heading.cos(), heading.sin()) * step;
        }
        out.push(p);
    }
    Ok(out)
}

/// Centers alternating above and below the x-axis with geometrically
/// shrinking amplitude: `(k * spacing, ±amplitude * decay^k)`.
pub fn zigzag(len: usize, spacing: f64, amplitude: f64, decay: f64) -> Vec<Point2> {
    (0..len)
        .map(|k| {
            let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
            Vector2::new(k as f64 * spacing, sign * amplitude * decay.powi(k as i32))
        })
        .collect()
}
