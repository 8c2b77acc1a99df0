pub mod driver;
pub mod hills;
pub mod population;
pub mod relocation;

pub use driver::{RunState, Simulation, TickSummary};
pub use hills::{hill_index, hill_origin, HillTally};
pub use population::{Agent, Classification, Population};
pub use relocation::relocate_unhappy;
