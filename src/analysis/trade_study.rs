use serde::{Deserialize, Serialize};

use crate::config::SpeedSweep;
use crate::models::{AirframeConfig, MissionProfile};
use crate::physics;

/// One finite sample from a cruise-speed sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub speed_mps: f64,
    pub power_kw: f64,
    pub energy_kwh: f64,
}

/// Evaluate the mission at each speed in the sweep, holding distance,
/// altitude, and pack density fixed. Samples whose results are not
/// finite (degenerate airframes, zero speed) are dropped so downstream
/// plotting and min-search see clean data.
pub fn sweep_cruise_speed(
    airframe: &AirframeConfig,
    sweep: &SpeedSweep,
    distance_miles: f64,
    altitude_ft: f64,
    battery_wh_per_kg: f64,
) -> Vec<SweepPoint> {
    sweep
        .speeds()
        .into_iter()
        .filter_map(|speed_mps| {
            let mission = MissionProfile {
                cruise_speed_mps: speed_mps,
                distance_miles,
                altitude_ft,
                battery_wh_per_kg,
            };
            let result = physics::evaluate(airframe, &mission);
            result.is_finite().then(|| SweepPoint {
                speed_mps,
                power_kw: result.power_w / 1000.0,
                energy_kwh: result.energy_kwh,
            })
        })
        .collect()
}

/// Sample with the lowest mission energy, if the sweep produced any.
pub fn min_energy_point(points: &[SweepPoint]) -> Option<&SweepPoint> {
    points
        .iter()
        .min_by(|a, b| a.energy_kwh.total_cmp(&b.energy_kwh))
}
