use serde::{Deserialize, Serialize};

use super::error::{check_finite, check_non_negative, check_positive, ParameterError};

/// One cruise-only mission: constant speed and altitude over a fixed
/// ground distance, supplied by a battery of the given energy density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionProfile {
    /// Cruise true airspeed (m/s).
    pub cruise_speed_mps: f64,
    /// Mission ground distance (statute miles).
    pub distance_miles: f64,
    /// Cruise altitude (ft). Negative values mean below the sea-level
    /// reference datum and are valid.
    pub altitude_ft: f64,
    /// Pack-level battery energy density (Wh/kg).
    pub battery_wh_per_kg: f64,
}

impl Default for MissionProfile {
    /// 100-mile sea-level cruise at 60 m/s on a 250 Wh/kg pack.
    fn default() -> Self {
        Self {
            cruise_speed_mps: 60.0,
            distance_miles: 100.0,
            altitude_ft: 0.0,
            battery_wh_per_kg: 250.0,
        }
    }
}

impl MissionProfile {
    /// Checks every field against its constraint. See
    /// [`AirframeConfig::validate`](super::AirframeConfig::validate) for
    /// the division of responsibility with the performance model.
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_positive("cruise_speed_mps", self.cruise_speed_mps)?;
        check_non_negative("distance_miles", self.distance_miles)?;
        check_finite("altitude_ft", self.altitude_ft)?;
        check_positive("battery_wh_per_kg", self.battery_wh_per_kg)?;
        Ok(())
    }
}
