//! Resource generation strategies
//!
//! Two strategies, selected by `SimulationConfig::generation_mode`:
//! a one-shot middle-biased layout, and a time-varying noise field that is
//! recomputed every tick so the gold drifts under the agents.

use crate::core::rng::UniformRng;
use crate::core::types::Tick;
use crate::world::grid::Grid;
use crate::world::noise::SimplexNoise;

/// Parameters of the time-varying noise field
#[derive(Debug, Clone, Copy)]
pub struct NoiseParams {
    pub scale: f64,
    pub speed: f64,
    pub threshold: f64,
}

impl NoiseParams {
    pub fn from_config(config: &crate::core::config::SimulationConfig) -> Self {
        Self {
            scale: config.noise_scale,
            speed: config.noise_speed,
            threshold: config.noise_threshold,
        }
    }
}

/// Middle-biased static generation, run once at setup
///
/// Each cell becomes a resource with probability `1 / (d + 2)` where `d` is
/// half the truncated Manhattan distance to the grid center: a draw over
/// `[0, d + 1]` tested against exactly 1. Intentionally noisy, not a clean
/// radial falloff.
pub fn middle_bias(grid: &mut Grid, rng: &mut UniformRng) {
    let size = grid.size();
    let centre = size as f32 / 2.0;
    for x in 0..size {
        for y in 0..size {
            let dx = (centre - x as f32).abs() as usize;
            let dy = (centre - y as f32).abs() as usize;
            let dist = ((dx + dy) as f32 / 2.0) as usize;
            grid.set_resource(x, y, rng.next_in(dist + 1) == 1);
        }
    }
}

/// Time-varying generation, run every tick while active
///
/// A cell is a resource iff the noise field at `(x * scale, y * scale,
/// t * speed)` exceeds the threshold.
pub fn time_varying(grid: &mut Grid, noise: &SimplexNoise, tick: Tick, params: &NoiseParams) {
    let size = grid.size();
    let t = tick as f64 * params.speed;
    for x in 0..size {
        for y in 0..size {
            let sample = noise.sample01(x as f64 * params.scale, y as f64 * params.scale, t);
            grid.set_resource(x, y, sample > params.threshold);
        }
    }
}
