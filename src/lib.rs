//! Goldrush - Schelling-style gold foraging simulation on a 2-D grid
//!
//! Agents seek resource ("gold") cells; unhappy agents relocate toward the
//! most popular gold-bearing sub-region ("hill") discovered by the currently
//! happy. The engine is single-threaded and host-driven: a front end calls
//! [`simulation::Simulation::tick`] per frame and queries the state for
//! rendering afterwards.

pub mod core;
pub mod simulation;
pub mod world;
