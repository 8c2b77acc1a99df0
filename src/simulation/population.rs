//! Agent population and per-tick happiness classification

use crate::core::rng::UniformRng;
use crate::world::grid::Grid;

/// One agent: a grid position plus its happiness from the last evaluation
#[derive(Debug, Clone, Copy)]
pub struct Agent {
    pub x: usize,
    pub y: usize,
    pub happy: bool,
}

impl Agent {
    /// An agent is happy iff it stands on a resource cell; stores and returns
    /// the result
    pub fn evaluate(&mut self, grid: &Grid) -> bool {
        self.happy = grid.is_resource(self.x, self.y);
        self.happy
    }
}

/// Per-tick partition of the population into happy and unhappy index lists
///
/// Indices point into the owning [`Population`] and are valid only for the
/// tick they were built in. List order follows population order, which is
/// part of the observable contract: it decides which agent a random
/// population index denotes during relocation.
#[derive(Debug, Default)]
pub struct Classification {
    pub happy: Vec<usize>,
    pub unhappy: Vec<usize>,
}

/// The single owning container for all agents
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Spawn `count` agents at uniformly random grid positions, all unhappy
    /// until first evaluated
    pub fn spawn(count: usize, grid_size: usize, rng: &mut UniformRng) -> Self {
        let mut agents = Vec::with_capacity(count);
        for _ in 0..count {
            agents.push(Agent {
                x: rng.next_in(grid_size - 1),
                y: rng.next_in(grid_size - 1),
                happy: false,
            });
        }
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, index: usize) -> &Agent {
        &self.agents[index]
    }

    pub fn agent_mut(&mut self, index: usize) -> &mut Agent {
        &mut self.agents[index]
    }

    /// Evaluate every agent exactly once, in population order, and partition
    /// the indices into happy and unhappy lists
    pub fn classify(&mut self, grid: &Grid) -> Classification {
        let mut classification = Classification {
            happy: Vec::with_capacity(self.agents.len()),
            unhappy: Vec::with_capacity(self.agents.len()),
        };
        for (index, agent) in self.agents.iter_mut().enumerate() {
            if agent.evaluate(grid) {
                classification.happy.push(index);
            } else {
                classification.unhappy.push(index);
            }
        }
        classification
    }
}
