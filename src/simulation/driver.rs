//! Simulation driver - the tick state machine and the host contract
//!
//! The driver owns all mutable state (grid, population, RNG, tally) and runs
//! the whole tick body to completion before returning, so a host that
//! serializes its calls needs no locking. Hosts drive it from a per-frame
//! callback: `tick()` while running, `toggle_run()` / `reset()` on input
//! events, and the query methods after each tick for rendering.

use crate::core::config::{GenerationMode, SimulationConfig};
use crate::core::error::Result;
use crate::core::rng::UniformRng;
use crate::core::types::{CellPos, HillIndex, Tick};
use crate::simulation::hills::{hill_index, hill_origin, HillTally};
use crate::simulation::population::{Agent, Population};
use crate::simulation::relocation::relocate_unhappy;
use crate::world::generation;
use crate::world::grid::Grid;
use crate::world::noise::SimplexNoise;
use crate::world::NoiseParams;

/// Run/pause flag of the driver, toggled by an external input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

/// What one tick did, returned to the host for display and frame export
///
/// `tick` is the stable frame identifier: strictly increasing between resets.
#[derive(Debug, Clone, Copy)]
pub struct TickSummary {
    pub tick: Tick,
    pub happy: usize,
    pub unhappy: usize,
    pub relocated: usize,
    pub best_hill: CellPos,
}

/// The simulation state machine
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    population: Population,
    noise: SimplexNoise,
    rng: UniformRng,
    run_state: RunState,
    tick: Tick,
    best_hill: HillIndex,
}

impl Simulation {
    /// Set up a simulation from system entropy
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Self::with_rng(config, UniformRng::from_entropy())
    }

    /// Set up a deterministic simulation for tests and reproducible runs
    pub fn new_seeded(config: SimulationConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, UniformRng::seeded(seed))
    }

    fn with_rng(config: SimulationConfig, mut rng: UniformRng) -> Result<Self> {
        config.validate()?;

        let noise = SimplexNoise::new(rng.next_u64());
        let mut grid = Grid::new(config.grid_size);
        Self::generate(&mut grid, &config, &noise, 0, &mut rng);
        let population = Population::spawn(config.agent_count, config.grid_size, &mut rng);

        tracing::debug!(
            grid_size = config.grid_size,
            partial_size = config.partial_size,
            agents = population.len(),
            resources = grid.resource_count(),
            "simulation set up"
        );

        Ok(Self {
            config,
            grid,
            population,
            noise,
            rng,
            run_state: RunState::Paused,
            tick: 0,
            best_hill: HillIndex(0),
        })
    }

    fn generate(
        grid: &mut Grid,
        config: &SimulationConfig,
        noise: &SimplexNoise,
        tick: Tick,
        rng: &mut UniformRng,
    ) {
        match config.generation_mode {
            GenerationMode::StaticBiased => generation::middle_bias(grid, rng),
            GenerationMode::TimeVarying => {
                generation::time_varying(grid, noise, tick, &NoiseParams::from_config(config))
            }
        }
    }

    /// Advance the simulation by one step
    ///
    /// No-ops (returns `None`) while paused or after a bounded run has
    /// finished. Tick body: world refresh (if time-varying), occupancy
    /// refresh (if tracked), happiness classification, hill aggregation,
    /// relocation of the unhappy, counter increment.
    pub fn tick(&mut self) -> Option<TickSummary> {
        if self.run_state != RunState::Running || self.finished() {
            return None;
        }

        if self.config.generation_mode == GenerationMode::TimeVarying {
            generation::time_varying(
                &mut self.grid,
                &self.noise,
                self.tick,
                &NoiseParams::from_config(&self.config),
            );
        }

        if self.config.occupancy_tracking {
            // Occupancy must reflect the previous tick's relocations before
            // anyone is evaluated
            self.grid
                .refresh_occupancy(self.population.agents().iter().map(|a| (a.x, a.y)));
        }

        let classification = self.population.classify(&self.grid);

        let mut tally = HillTally::new();
        for &index in &classification.happy {
            let agent = self.population.agent(index);
            tally.record(hill_index(
                agent.x,
                agent.y,
                self.config.partial_size,
                self.config.grid_size,
            ));
        }
        // An empty tally keeps the stale best hill on purpose: the displayed
        // overlay may lag an all-unhappy tick
        if let Some(best) = tally.best() {
            self.best_hill = best;
        }

        let relocated = relocate_unhappy(
            &mut self.population,
            &classification,
            &mut self.grid,
            &self.config,
            &mut self.rng,
        );

        self.tick += 1;

        let summary = TickSummary {
            tick: self.tick,
            happy: classification.happy.len(),
            unhappy: classification.unhappy.len(),
            relocated,
            best_hill: self.best_hill_origin(),
        };

        tracing::debug!(
            tick = summary.tick,
            happy = summary.happy,
            unhappy = summary.unhappy,
            "tick complete"
        );

        if self.finished() {
            tracing::info!(tick = self.tick, "bounded run finished");
        }

        Some(summary)
    }

    /// Flip between `Paused` and `Running`
    pub fn toggle_run(&mut self) {
        self.run_state = match self.run_state {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        };
    }

    /// Re-run setup with the same config: fresh resources, fresh random agent
    /// positions, tick counter back to zero
    ///
    /// The run/pause flag survives the reset iff `reset_preserves_run` is
    /// set; otherwise the driver comes back paused.
    pub fn reset(&mut self) {
        let noise = SimplexNoise::new(self.rng.next_u64());
        let mut grid = Grid::new(self.config.grid_size);
        Self::generate(&mut grid, &self.config, &noise, 0, &mut self.rng);

        self.noise = noise;
        self.grid = grid;
        self.population =
            Population::spawn(self.config.agent_count, self.config.grid_size, &mut self.rng);
        self.tick = 0;
        self.best_hill = HillIndex(0);
        if !self.config.reset_preserves_run {
            self.run_state = RunState::Paused;
        }

        tracing::info!(preserved_run = self.config.reset_preserves_run, "simulation reset");
    }

    /// True once a bounded run's tick counter has exceeded `max_ticks`
    pub fn finished(&self) -> bool {
        match self.config.max_ticks {
            Some(max) => self.tick > max,
            None => false,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agents(&self) -> &[Agent] {
        self.population.agents()
    }

    /// Top-left cell of the current best hill
    pub fn best_hill_origin(&self) -> CellPos {
        hill_origin(self.best_hill, self.config.partial_size, self.config.grid_size)
    }

    pub fn tick_count(&self) -> Tick {
        self.tick
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }
}
