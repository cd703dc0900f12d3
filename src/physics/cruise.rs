use crate::constants::{FEET_TO_METERS, MILES_TO_METERS, WH_PER_KWH};
use crate::models::{AirframeConfig, MissionProfile, PerformanceResult};
use crate::physics::{aero, atmosphere, energy};

/// Evaluates the closed-form cruise performance model for one airframe
/// flying one mission and returns every derived quantity.
///
/// The computation is a pure function of the two records with no state
/// and no I/O. Identical inputs always produce identical outputs, so
/// callers may sweep parameters across threads freely.
///
/// Inputs are trusted, not validated. A non-positive wing area, cruise
/// speed, propulsive efficiency, or battery energy density divides by
/// zero and surfaces as ±inf/NaN fields in the result; nothing is
/// clamped or raised here. Run [`AirframeConfig::validate`] /
/// [`MissionProfile::validate`] first when the values come from outside,
/// or gate on [`PerformanceResult::is_finite`] afterwards.
pub fn evaluate(airframe: &AirframeConfig, mission: &MissionProfile) -> PerformanceResult {
    let rho = atmosphere::air_density(mission.altitude_ft * FEET_TO_METERS);
    let v = mission.cruise_speed_mps;

    let q = aero::dynamic_pressure(rho, v);
    let cl = aero::level_flight_lift_coefficient(airframe.mass_kg, q, airframe.wing_area_m2);
    let cd = aero::drag_polar(airframe.cd0, airframe.k, cl);
    let drag_n = aero::drag_force(q, airframe.wing_area_m2, cd);

    let power_w = energy::cruise_power(drag_n, v, airframe.propulsive_efficiency);
    let time_s = energy::mission_time(mission.distance_miles * MILES_TO_METERS, v);
    let energy_wh = energy::mission_energy_wh(power_w, time_s);

    PerformanceResult {
        air_density_kg_m3: rho,
        lift_coefficient: cl,
        drag_coefficient: cd,
        drag_n,
        power_w,
        time_s,
        energy_wh,
        energy_kwh: energy_wh / WH_PER_KWH,
        battery_mass_kg: energy::battery_mass(energy_wh, mission.battery_wh_per_kg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn trainer_baseline_scenario() {
        let result = evaluate(&AirframeConfig::default(), &MissionProfile::default());

        assert_eq!(result.air_density_kg_m3, 1.225);
        assert_abs_diff_eq!(result.lift_coefficient, 0.240904, epsilon = 1e-6);
        assert_abs_diff_eq!(result.drag_coefficient, 0.0276116, epsilon = 1e-6);
        assert_abs_diff_eq!(result.drag_n, 730.60, epsilon = 0.01);
        assert_abs_diff_eq!(result.power_w, 51_571.9, epsilon = 0.5);
        assert_abs_diff_eq!(result.time_s, 2682.24, epsilon = 1e-6);
        assert_abs_diff_eq!(result.energy_wh, 38_424.5, epsilon = 0.5);
        assert_abs_diff_eq!(result.energy_kwh, 38.4245, epsilon = 5e-4);
        assert_abs_diff_eq!(result.battery_mass_kg, 153.70, epsilon = 0.01);
    }

    #[test]
    fn lift_coefficient_falls_as_speed_rises() {
        let airframe = AirframeConfig::default();
        let cl_at = |v: f64| {
            let mission = MissionProfile {
                cruise_speed_mps: v,
                ..Default::default()
            };
            evaluate(&airframe, &mission).lift_coefficient
        };
        assert!(cl_at(40.0) > cl_at(60.0));
        assert!(cl_at(60.0) > cl_at(80.0));

        // CL ∝ 1/v²: doubling speed should quarter CL
        assert_relative_eq!(cl_at(40.0), 4.0 * cl_at(80.0), max_relative = 1e-12);
    }

    #[test]
    fn drag_coefficient_never_below_cd0() {
        let airframe = AirframeConfig::default();
        for v in [25.0, 40.0, 60.0, 90.0, 150.0] {
            let mission = MissionProfile {
                cruise_speed_mps: v,
                ..Default::default()
            };
            assert!(evaluate(&airframe, &mission).drag_coefficient >= airframe.cd0);
        }
    }

    #[test]
    fn energy_is_linear_in_distance() {
        let airframe = AirframeConfig::default();
        let near = evaluate(
            &airframe,
            &MissionProfile {
                distance_miles: 75.0,
                ..Default::default()
            },
        );
        let far = evaluate(
            &airframe,
            &MissionProfile {
                distance_miles: 150.0,
                ..Default::default()
            },
        );
        assert_relative_eq!(far.energy_kwh, 2.0 * near.energy_kwh, max_relative = 1e-12);
    }

    #[test]
    fn doubling_battery_density_halves_battery_mass() {
        let airframe = AirframeConfig::default();
        let base = evaluate(&airframe, &MissionProfile::default());
        let dense = evaluate(
            &airframe,
            &MissionProfile {
                battery_wh_per_kg: 500.0,
                ..Default::default()
            },
        );
        assert_relative_eq!(
            base.battery_mass_kg,
            2.0 * dense.battery_mass_kg,
            max_relative = 1e-12
        );
    }

    #[test]
    fn altitude_thins_air_and_raises_lift_coefficient() {
        let airframe = AirframeConfig::default();
        let sea_level = evaluate(&airframe, &MissionProfile::default());
        let high = evaluate(
            &airframe,
            &MissionProfile {
                altitude_ft: 10_000.0,
                ..Default::default()
            },
        );
        assert!(high.air_density_kg_m3 < sea_level.air_density_kg_m3);
        assert!(high.lift_coefficient > sea_level.lift_coefficient);
        assert!(high.is_finite());
    }

    #[test]
    fn below_datum_cruise_is_finite_and_denser() {
        let result = evaluate(
            &AirframeConfig::default(),
            &MissionProfile {
                altitude_ft: -1000.0,
                ..Default::default()
            },
        );
        assert!(result.air_density_kg_m3 > 1.225);
        assert!(result.is_finite());
    }

    #[test]
    fn zero_distance_mission_needs_no_energy() {
        let result = evaluate(
            &AirframeConfig::default(),
            &MissionProfile {
                distance_miles: 0.0,
                ..Default::default()
            },
        );
        assert_eq!(result.time_s, 0.0);
        assert_eq!(result.energy_wh, 0.0);
        assert_eq!(result.battery_mass_kg, 0.0);
        assert!(result.is_finite());
    }

    #[test]
    fn zero_efficiency_surfaces_as_infinite_power() {
        let airframe = AirframeConfig {
            propulsive_efficiency: 0.0,
            ..Default::default()
        };
        let result = evaluate(&airframe, &MissionProfile::default());
        assert!(result.power_w.is_infinite());
        assert!(!result.is_finite());
    }

    #[test]
    fn evaluation_is_deterministic() {
        let airframe = AirframeConfig::default();
        let mission = MissionProfile {
            cruise_speed_mps: 72.5,
            altitude_ft: 6500.0,
            ..Default::default()
        };
        assert_eq!(evaluate(&airframe, &mission), evaluate(&airframe, &mission));
    }
}
