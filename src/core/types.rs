//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation tick counter (simulation time unit)
///
/// Also doubles as the frame identifier hosts use when naming exported frames:
/// it is stable and strictly increasing between resets.
pub type Tick = u64;

/// Identifier of a hill, a `partial_size x partial_size` sub-square of the grid
///
/// Canonical encoding: `quad_x + quad_y * (grid_size / partial_size)`, where
/// `quad_x = x / partial_size` and `quad_y = y / partial_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HillIndex(pub usize);

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub x: usize,
    pub y: usize,
}

impl CellPos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}
