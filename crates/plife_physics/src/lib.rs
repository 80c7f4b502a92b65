pub mod forces;
pub mod particle;
pub mod stats;

pub use forces::{ForceRule, Interaction};
pub use particle::ParticleGroup;
pub use stats::GroupStats;
