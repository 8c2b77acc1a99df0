pub mod generation;
pub mod grid;
pub mod noise;

pub use generation::NoiseParams;
pub use grid::{Cell, Grid};
pub use noise::SimplexNoise;
