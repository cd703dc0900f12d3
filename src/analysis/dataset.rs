use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SamplingRanges;
use crate::models::{AirframeConfig, MissionProfile};
use crate::physics;

/// One labelled row of the mission-energy dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergySample {
    pub mass_kg: f64,
    pub speed_mps: f64,
    pub distance_miles: f64,
    pub altitude_ft: f64,
    pub energy_kwh: f64,
}

/// Draw `n` missions uniformly from the given ranges and evaluate each.
/// Mass overrides the baseline airframe; geometry, drag polar, and pack
/// density keep their baseline values.
pub fn sample_missions(
    rng: &mut impl Rng,
    ranges: &SamplingRanges,
    baseline: &AirframeConfig,
    n: usize,
) -> Vec<EnergySample> {
    (0..n)
        .map(|_| {
            let mass_kg = rng.gen_range(ranges.mass_kg.clone());
            let speed_mps = rng.gen_range(ranges.speed_mps.clone());
            let distance_miles = rng.gen_range(ranges.distance_miles.clone());
            let altitude_ft = rng.gen_range(ranges.altitude_ft.clone());

            let airframe = AirframeConfig {
                mass_kg,
                ..*baseline
            };
            let mission = MissionProfile {
                cruise_speed_mps: speed_mps,
                distance_miles,
                altitude_ft,
                ..Default::default()
            };

            EnergySample {
                mass_kg,
                speed_mps,
                distance_miles,
                altitude_ft,
                energy_kwh: physics::evaluate(&airframe, &mission).energy_kwh,
            }
        })
        .collect()
}
