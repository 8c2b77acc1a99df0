//! Simulation configuration with documented constants
//!
//! The historical rule variants (occupancy tracking, time-varying resources,
//! bounded runs, reset semantics) are collapsed into one engine; this struct
//! is the switchboard that selects which behaviors are active.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// How the resource layout of the grid is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// One-shot noisy generation biased toward the grid center, fixed for the
    /// lifetime of the run
    StaticBiased,
    /// Resource blobs drift over time: the layout is recomputed from 3-D
    /// simplex noise every tick
    TimeVarying,
}

/// Configuration for one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Edge length of the square grid, in cells
    ///
    /// Must be evenly divisible by `partial_size` so the grid partitions into
    /// complete hills; anything else is a fatal configuration error.
    pub grid_size: usize,

    /// Edge length of a hill (the unit of spatial aggregation)
    pub partial_size: usize,

    /// Number of agents spawned at setup
    pub agent_count: usize,

    /// Resource generation strategy
    pub generation_mode: GenerationMode,

    /// Track per-cell occupancy and reject quadrant placements onto cells
    /// another agent already sits on
    pub occupancy_tracking: bool,

    /// Bounded run length: the driver reports `finished()` once the tick
    /// counter exceeds this, and further ticks no-op. `None` runs forever.
    pub max_ticks: Option<u64>,

    /// Whether `reset` carries the run/pause flag across the re-setup
    ///
    /// Both behaviors existed historically (some variants kept running after a
    /// reset, others forced a pause), so the choice is exposed rather than
    /// hard-coded.
    pub reset_preserves_run: bool,

    /// Spatial frequency of the time-varying noise field
    ///
    /// Smaller values stretch the resource blobs over more cells.
    pub noise_scale: f64,

    /// Temporal frequency of the time-varying noise field
    ///
    /// At 0.005 per tick the blobs drift slowly enough to chase.
    pub noise_speed: f64,

    /// Cutoff above which a noise sample (in `[0, 1]`) marks a resource cell
    ///
    /// At 0.9 roughly the top few percent of the field is gold, producing
    /// sparse islands rather than broad plains.
    pub noise_threshold: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: 200,
            partial_size: 20,
            agent_count: 100,
            generation_mode: GenerationMode::StaticBiased,
            occupancy_tracking: false,
            max_ticks: None,
            reset_preserves_run: true,
            noise_scale: 0.01,
            noise_speed: 0.005,
            noise_threshold: 0.9,
        }
    }
}

impl SimulationConfig {
    /// Validate the configuration
    ///
    /// We need complete hills, so `grid_size % partial_size == 0` is enforced
    /// here rather than discovered later as a malformed hill-indexing scheme.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(SimError::InvalidConfig("grid_size must be >= 1".into()));
        }
        if self.partial_size == 0 || self.partial_size > self.grid_size {
            return Err(SimError::InvalidConfig(format!(
                "partial_size must be in 1..={}, got {}",
                self.grid_size, self.partial_size
            )));
        }
        if self.grid_size % self.partial_size != 0 {
            return Err(SimError::IndivisibleGrid {
                grid_size: self.grid_size,
                partial_size: self.partial_size,
            });
        }
        Ok(())
    }

    /// Number of hills along one grid edge
    pub fn quad_count(&self) -> usize {
        self.grid_size / self.partial_size
    }

    /// Load and validate a configuration from a TOML file
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_indivisible_grid_rejected() {
        let config = SimulationConfig {
            grid_size: 10,
            partial_size: 3,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::IndivisibleGrid {
                grid_size: 10,
                partial_size: 3
            })
        ));
    }

    #[test]
    fn test_zero_partial_size_rejected() {
        let config = SimulationConfig {
            partial_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_toml() {
        let config: SimulationConfig = toml::from_str(
            r#"
            grid_size = 100
            partial_size = 10
            agent_count = 50
            generation_mode = "time_varying"
            occupancy_tracking = true
            max_ticks = 2000
            "#,
        )
        .unwrap();
        assert_eq!(config.grid_size, 100);
        assert_eq!(config.generation_mode, GenerationMode::TimeVarying);
        assert!(config.occupancy_tracking);
        assert_eq!(config.max_ticks, Some(2000));
        assert!(config.validate().is_ok());
    }
}
