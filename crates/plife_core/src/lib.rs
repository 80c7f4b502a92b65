pub mod config;
pub mod constants;
pub mod params;
pub mod presets;
pub mod types;

pub use config::SimConfig;
pub use constants::*;
pub use params::{ParamKey, ParameterSet};
pub use presets::Preset;
pub use types::*;
