//! Integration tests for the simulation driver
//!
//! These tests verify the full tick state machine end to end:
//! - setup validation and the fatal indivisible-grid case
//! - the happy/unhappy partition and position bounds over long runs
//! - bounded-run termination
//! - reset semantics, including the run-flag preservation switch
//! - occupancy bookkeeping against the agent set

use goldrush::core::config::{GenerationMode, SimulationConfig};
use goldrush::core::error::SimError;
use goldrush::simulation::Simulation;

fn base_config() -> SimulationConfig {
    SimulationConfig {
        grid_size: 20,
        partial_size: 5,
        agent_count: 30,
        ..Default::default()
    }
}

#[test]
fn test_setup_rejects_indivisible_grid() {
    let config = SimulationConfig {
        grid_size: 20,
        partial_size: 7,
        ..Default::default()
    };
    let result = Simulation::new_seeded(config, 1);
    assert!(matches!(
        result,
        Err(SimError::IndivisibleGrid {
            grid_size: 20,
            partial_size: 7
        })
    ));
}

#[test]
fn test_partition_and_bounds_over_long_run() {
    for occupancy in [false, true] {
        let config = SimulationConfig {
            occupancy_tracking: occupancy,
            ..base_config()
        };
        let mut sim = Simulation::new_seeded(config, 42).unwrap();
        sim.toggle_run();

        for _ in 0..200 {
            let summary = sim.tick().unwrap();
            assert_eq!(summary.happy + summary.unhappy, 30);
            for agent in sim.agents() {
                assert!(
                    agent.x < 20 && agent.y < 20,
                    "agent escaped grid at ({}, {})",
                    agent.x,
                    agent.y
                );
            }
            // The best hill origin always names a real hill corner
            let best = sim.best_hill_origin();
            assert_eq!(best.x % 5, 0);
            assert_eq!(best.y % 5, 0);
            assert!(best.x < 20 && best.y < 20);
        }
    }
}

#[test]
fn test_time_varying_run_stays_legal() {
    let config = SimulationConfig {
        generation_mode: GenerationMode::TimeVarying,
        // Lower threshold so some agents actually find gold
        noise_threshold: 0.6,
        ..base_config()
    };
    let mut sim = Simulation::new_seeded(config, 7).unwrap();
    sim.toggle_run();

    for _ in 0..100 {
        let summary = sim.tick().unwrap();
        assert_eq!(summary.happy + summary.unhappy, 30);
        for agent in sim.agents() {
            assert!(agent.x < 20 && agent.y < 20);
        }
    }
}

#[test]
fn test_bounded_run_signals_termination() {
    let config = SimulationConfig {
        max_ticks: Some(10),
        ..base_config()
    };
    let mut sim = Simulation::new_seeded(config, 5).unwrap();
    sim.toggle_run();

    let mut completed = 0;
    while sim.tick().is_some() {
        completed += 1;
        assert!(completed <= 11, "driver ignored max_ticks");
    }
    assert_eq!(completed, 11);
    assert!(sim.finished());
    assert_eq!(sim.tick_count(), 11);
}

#[test]
fn test_reset_produces_structurally_identical_state() {
    let mut sim = Simulation::new_seeded(base_config(), 9).unwrap();
    sim.toggle_run();
    for _ in 0..20 {
        sim.tick();
    }

    sim.reset();
    assert_eq!(sim.tick_count(), 0);
    assert_eq!(sim.agents().len(), 30);
    assert_eq!(sim.grid().size(), 20);
    for agent in sim.agents() {
        assert!(agent.x < 20 && agent.y < 20);
    }

    // A second reset holds the same invariants on fresh randomness
    sim.reset();
    assert_eq!(sim.tick_count(), 0);
    assert_eq!(sim.agents().len(), 30);
    for agent in sim.agents() {
        assert!(agent.x < 20 && agent.y < 20);
    }

    // The reset driver still ticks
    let summary = sim.tick().unwrap();
    assert_eq!(summary.tick, 1);
}

#[test]
fn test_reset_run_flag_follows_config() {
    let preserving = SimulationConfig {
        reset_preserves_run: true,
        ..base_config()
    };
    let mut sim = Simulation::new_seeded(preserving, 3).unwrap();
    sim.toggle_run();
    sim.reset();
    assert!(sim.is_running(), "preserving config must keep the run flag");

    let pausing = SimulationConfig {
        reset_preserves_run: false,
        ..base_config()
    };
    let mut sim = Simulation::new_seeded(pausing, 3).unwrap();
    sim.toggle_run();
    sim.reset();
    assert!(!sim.is_running(), "pausing config must force a pause");
}

#[test]
fn test_occupancy_flags_never_point_at_empty_cells() {
    // Within a tick the relocation pass updates flags in-flight, and a mover
    // leaving a shared cell can un-flag a cell that still hosts someone; the
    // refresh at the next tick start repairs that. What must always hold
    // after a tick is the other direction: a flagged cell hosts an agent.
    let config = SimulationConfig {
        occupancy_tracking: true,
        ..base_config()
    };
    let mut sim = Simulation::new_seeded(config, 17).unwrap();
    sim.toggle_run();

    for _ in 0..50 {
        sim.tick().unwrap();
        for x in 0..20 {
            for y in 0..20 {
                if sim.grid().is_occupied(x, y) {
                    assert!(
                        sim.agents().iter().any(|a| a.x == x && a.y == y),
                        "cell ({}, {}) flagged occupied but hosts no agent",
                        x,
                        y
                    );
                }
            }
        }
    }
}

#[test]
fn test_static_world_does_not_change_between_ticks() {
    let mut sim = Simulation::new_seeded(base_config(), 23).unwrap();
    sim.toggle_run();

    let before: Vec<bool> = (0..20)
        .flat_map(|x| (0..20).map(move |y| (x, y)))
        .map(|(x, y)| sim.grid().is_resource(x, y))
        .collect();

    for _ in 0..30 {
        sim.tick();
    }

    let after: Vec<bool> = (0..20)
        .flat_map(|x| (0..20).map(move |y| (x, y)))
        .map(|(x, y)| sim.grid().is_resource(x, y))
        .collect();

    assert_eq!(before, after, "static resource layout drifted");
}
