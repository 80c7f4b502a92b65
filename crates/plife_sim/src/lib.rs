pub mod pipeline;
pub mod state;
pub mod step;

pub use pipeline::{ActiveParams, SimulationPlugin};
pub use state::SimulationState;
