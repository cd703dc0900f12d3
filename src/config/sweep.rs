use crate::models::ParameterError;
use crate::models::{check_finite, check_positive};

/// Closed cruise-speed interval walked with a fixed step by the
/// trade-study sweeper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedSweep {
    pub start_mps: f64,
    pub end_mps: f64,
    pub step_mps: f64,
}

impl Default for SpeedSweep {
    /// 30–90 m/s in 2 m/s steps.
    fn default() -> Self {
        Self {
            start_mps: 30.0,
            end_mps: 90.0,
            step_mps: 2.0,
        }
    }
}

impl SpeedSweep {
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_positive("start_mps", self.start_mps)?;
        check_finite("end_mps", self.end_mps)?;
        check_positive("step_mps", self.step_mps)?;
        Ok(())
    }

    /// Sample speeds from start to end inclusive. The end point survives
    /// accumulated floating-point error thanks to a small tolerance on
    /// the upper bound.
    pub fn speeds(&self) -> Vec<f64> {
        let mut speeds = Vec::new();
        let mut v = self.start_mps;
        while v <= self.end_mps + 1e-9 {
            speeds.push(v);
            v += self.step_mps;
        }
        speeds
    }
}
