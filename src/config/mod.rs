pub mod sampling;
pub mod sweep;

pub use sampling::SamplingRanges;
pub use sweep::SpeedSweep;
