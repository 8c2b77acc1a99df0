//! Relocation policy for unhappy agents
//!
//! Each unhappy agent tries to mirror a randomly drawn member of the whole
//! population: if the draw happens to land on a happy agent, the mover is
//! placed somewhere in that agent's quadrant; a draw that misses (hits an
//! unhappy agent) silently degrades to a full-grid random placement. The miss
//! is a specified behavior of the policy, not a defect to repair.

use crate::core::config::SimulationConfig;
use crate::core::rng::UniformRng;
use crate::simulation::population::{Classification, Population};
use crate::world::grid::Grid;

/// Uniform draw over the whole grid, both axes independent
fn random_cell(grid_size: usize, rng: &mut UniformRng) -> (usize, usize) {
    (rng.next_in(grid_size - 1), rng.next_in(grid_size - 1))
}

/// Random position in the quadrant of a happy agent at `(hx, hy)`
///
/// Offsets are drawn inclusive over `[0, partial_size]` and the result is
/// clamped to `grid_size - 1` on each axis, so a quadrant in the last
/// row/column can never place an agent outside the grid.
fn quadrant_target(
    hx: usize,
    hy: usize,
    partial_size: usize,
    grid_size: usize,
    rng: &mut UniformRng,
) -> (usize, usize) {
    let start_x = hx - hx % partial_size;
    let start_y = hy - hy % partial_size;
    let x = (start_x + rng.next_in(partial_size)).min(grid_size - 1);
    let y = (start_y + rng.next_in(partial_size)).min(grid_size - 1);
    (x, y)
}

/// Relocate every unhappy agent, in population order
///
/// Returns the number of agents moved. Happy agents are never touched. With
/// occupancy tracking on, a quadrant candidate landing on a cell some other
/// agent occupies is discarded in favor of a full-grid random placement, and
/// the occupancy flags of the old and new cells are updated as each agent
/// commits its move.
pub fn relocate_unhappy(
    population: &mut Population,
    classification: &Classification,
    grid: &mut Grid,
    config: &SimulationConfig,
    rng: &mut UniformRng,
) -> usize {
    let grid_size = config.grid_size;
    let any_happy = !classification.happy.is_empty();

    for &index in &classification.unhappy {
        let (old_x, old_y) = {
            let agent = population.agent(index);
            (agent.x, agent.y)
        };

        let (new_x, new_y) = if !any_happy {
            // Nobody knows where the gold is: scatter
            random_cell(grid_size, rng)
        } else {
            let pick = rng.next_in(population.len() - 1);
            let candidate = *population.agent(pick);
            if candidate.happy {
                let (tx, ty) = quadrant_target(
                    candidate.x,
                    candidate.y,
                    config.partial_size,
                    grid_size,
                    rng,
                );
                let blocked = config.occupancy_tracking
                    && grid.is_occupied(tx, ty)
                    && (tx, ty) != (old_x, old_y);
                if blocked {
                    random_cell(grid_size, rng)
                } else {
                    (tx, ty)
                }
            } else {
                random_cell(grid_size, rng)
            }
        };

        if config.occupancy_tracking {
            grid.set_occupied(old_x, old_y, false);
            grid.set_occupied(new_x, new_y, true);
        }

        let agent = population.agent_mut(index);
        agent.x = new_x;
        agent.y = new_y;
    }

    classification.unhappy.len()
}
