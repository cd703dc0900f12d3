pub mod dataset;
pub mod trade_study;

pub use dataset::{sample_missions, EnergySample};
pub use trade_study::{min_energy_point, sweep_cruise_speed, SweepPoint};
