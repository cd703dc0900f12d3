mod airframe;
mod error;
mod mission;
mod performance;

pub use airframe::AirframeConfig;
pub use error::ParameterError;
pub use mission::MissionProfile;
pub use performance::PerformanceResult;

pub(crate) use error::{check_finite, check_positive};
