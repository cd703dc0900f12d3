pub mod analysis;
pub mod config;
pub mod constants;
pub mod models;
pub mod physics;

pub use models::{AirframeConfig, MissionProfile, ParameterError, PerformanceResult};
pub use physics::evaluate;
