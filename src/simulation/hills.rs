//! Hill aggregation - finding the plurality sub-region
//!
//! A hill is a `partial_size x partial_size` square of the grid. Every tick
//! the happy agents are tallied per hill and the plurality hill wins, with a
//! first-seen tie-break: a later hill that merely equals the current maximum
//! never displaces it.

use std::collections::HashMap;

use crate::core::types::{CellPos, HillIndex};

/// Canonical (quadrant-normalized) hill index for a cell
pub fn hill_index(x: usize, y: usize, partial_size: usize, grid_size: usize) -> HillIndex {
    let quad_x = x / partial_size;
    let quad_y = y / partial_size;
    HillIndex(quad_x + quad_y * (grid_size / partial_size))
}

/// Top-left cell of a hill, the coordinate hosts use to draw the overlay
pub fn hill_origin(index: HillIndex, partial_size: usize, grid_size: usize) -> CellPos {
    let quads = grid_size / partial_size;
    CellPos::new((index.0 % quads) * partial_size, (index.0 / quads) * partial_size)
}

/// Per-tick tally of happy agents per hill, rebuilt from scratch every tick
#[derive(Debug, Default)]
pub struct HillTally {
    counts: HashMap<HillIndex, usize>,
    best: Option<HillIndex>,
    max: usize,
}

impl HillTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one happy agent in the given hill
    pub fn record(&mut self, index: HillIndex) {
        let count = self.counts.entry(index).or_insert(0);
        *count += 1;
        // Strictly greater: equal counts keep the first-seen hill
        if *count > self.max {
            self.max = *count;
            self.best = Some(index);
        }
    }

    /// The plurality hill, or `None` if nothing was recorded this tick
    pub fn best(&self) -> Option<HillIndex> {
        self.best
    }

    pub fn count(&self, index: HillIndex) -> usize {
        self.counts.get(&index).copied().unwrap_or(0)
    }
}
