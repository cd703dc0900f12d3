use serde::{Deserialize, Serialize};

use super::error::{check_non_negative, check_positive, ParameterError};

/// Fixed aerodynamic and propulsion parameters of one airframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirframeConfig {
    /// All-up mass (kg).
    pub mass_kg: f64,
    /// Reference wing area (m²).
    pub wing_area_m2: f64,
    /// Zero-lift drag coefficient of the parabolic drag polar.
    pub cd0: f64,
    /// Induced-drag factor of the parabolic drag polar.
    pub k: f64,
    /// Lumped propeller + motor/ESC efficiency, in (0, 1].
    pub propulsive_efficiency: f64,
}

impl Default for AirframeConfig {
    /// Two-seat electric trainer baseline.
    fn default() -> Self {
        Self {
            mass_kg: 650.0,
            wing_area_m2: 12.0,
            cd0: 0.025,
            k: 0.045,
            propulsive_efficiency: 0.85,
        }
    }
}

impl AirframeConfig {
    /// Checks every field against its constraint. The performance model
    /// itself trusts its inputs, so callers that accept external values
    /// should run this first (or filter non-finite results afterwards).
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_positive("mass_kg", self.mass_kg)?;
        check_positive("wing_area_m2", self.wing_area_m2)?;
        check_non_negative("cd0", self.cd0)?;
        check_non_negative("k", self.k)?;
        check_positive("propulsive_efficiency", self.propulsive_efficiency)?;
        if self.propulsive_efficiency > 1.0 {
            return Err(ParameterError::AboveUnity {
                field: "propulsive_efficiency",
                value: self.propulsive_efficiency,
            });
        }
        Ok(())
    }
}
