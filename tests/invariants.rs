//! Property tests for the engine invariants
//!
//! Random configurations, seeds and run lengths; the invariants must hold for
//! every combination: positions never escape the grid, classification always
//! partitions the population, and hill indexing round-trips.

use goldrush::core::config::{GenerationMode, SimulationConfig};
use goldrush::simulation::{hill_index, hill_origin, Simulation};
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = SimulationConfig> {
    (
        1usize..=6,
        2usize..=8,
        1usize..=40,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(partial_size, multiplier, agent_count, occupancy, time_varying)| SimulationConfig {
                grid_size: partial_size * multiplier,
                partial_size,
                agent_count,
                occupancy_tracking: occupancy,
                generation_mode: if time_varying {
                    GenerationMode::TimeVarying
                } else {
                    GenerationMode::StaticBiased
                },
                // Keep the noise field coarse and generous so both happy and
                // unhappy agents occur on tiny grids
                noise_scale: 0.1,
                noise_threshold: 0.55,
                ..Default::default()
            },
        )
}

proptest! {
    #[test]
    fn agents_never_escape_grid(config in arb_config(), seed: u64, ticks in 1usize..30) {
        let grid_size = config.grid_size;
        let mut sim = Simulation::new_seeded(config, seed).unwrap();
        sim.toggle_run();
        for _ in 0..ticks {
            sim.tick();
            for agent in sim.agents() {
                prop_assert!(agent.x < grid_size && agent.y < grid_size);
            }
        }
    }

    #[test]
    fn classification_partitions_population(config in arb_config(), seed: u64) {
        let agent_count = config.agent_count;
        let mut sim = Simulation::new_seeded(config, seed).unwrap();
        sim.toggle_run();
        for _ in 0..10 {
            let summary = sim.tick().unwrap();
            prop_assert_eq!(summary.happy + summary.unhappy, agent_count);
            prop_assert_eq!(summary.relocated, summary.unhappy);
        }
    }

    #[test]
    fn hill_index_round_trips(
        partial_size in 1usize..=10,
        multiplier in 1usize..=10,
        cell in (0usize..100, 0usize..100),
    ) {
        let grid_size = partial_size * multiplier;
        let (x, y) = (cell.0 % grid_size, cell.1 % grid_size);

        let index = hill_index(x, y, partial_size, grid_size);
        prop_assert!(index.0 < multiplier * multiplier);

        let origin = hill_origin(index, partial_size, grid_size);
        prop_assert_eq!(origin.x, x - x % partial_size);
        prop_assert_eq!(origin.y, y - y % partial_size);
    }

    #[test]
    fn best_hill_origin_is_always_a_hill_corner(config in arb_config(), seed: u64) {
        let partial_size = config.partial_size;
        let grid_size = config.grid_size;
        let mut sim = Simulation::new_seeded(config, seed).unwrap();
        sim.toggle_run();
        for _ in 0..10 {
            sim.tick();
            let best = sim.best_hill_origin();
            prop_assert_eq!(best.x % partial_size, 0);
            prop_assert_eq!(best.y % partial_size, 0);
            prop_assert!(best.x < grid_size && best.y < grid_size);
        }
    }
}
