use crate::constants::G0;

/// Dynamic pressure q = ½ρv² (Pa).
pub fn dynamic_pressure(air_density: f64, speed_mps: f64) -> f64 {
    0.5 * air_density * speed_mps * speed_mps
}

/// Lift coefficient required to hold steady level flight, where lift
/// exactly balances weight: CL = W / (q·S). No climb, no bank.
pub fn level_flight_lift_coefficient(mass_kg: f64, dynamic_pressure: f64, wing_area_m2: f64) -> f64 {
    let weight_n = mass_kg * G0;
    weight_n / (dynamic_pressure * wing_area_m2)
}

/// Parabolic drag polar: CD = CD0 + k·CL².
pub fn drag_polar(cd0: f64, k: f64, lift_coefficient: f64) -> f64 {
    cd0 + k * lift_coefficient * lift_coefficient
}

/// Drag force D = q·S·CD (N).
pub fn drag_force(dynamic_pressure: f64, wing_area_m2: f64, drag_coefficient: f64) -> f64 {
    dynamic_pressure * wing_area_m2 * drag_coefficient
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test]
    fn dynamic_pressure_at_sea_level_cruise() {
        assert_abs_diff_eq!(dynamic_pressure(1.225, 60.0), 2205.0, epsilon = 1e-9);
    }

    #[test]
    fn trainer_baseline_lift_coefficient() {
        let cl = level_flight_lift_coefficient(650.0, 2205.0, 12.0);
        assert_abs_diff_eq!(cl, 0.240904, epsilon = 1e-6);
    }

    #[test_case(0.025, 0.045, 0.0, 0.025; "zero lift gives cd0")]
    #[test_case(0.025, 0.045, 0.240904, 0.0276116; "trainer baseline")]
    #[test_case(0.025, 0.0, 2.0, 0.025; "zero induced factor")]
    fn drag_polar_values(cd0: f64, k: f64, cl: f64, expected: f64) {
        assert_abs_diff_eq!(drag_polar(cd0, k, cl), expected, epsilon = 1e-6);
    }

    #[test]
    fn drag_polar_never_below_cd0() {
        for cl in [-2.0, -0.5, 0.0, 0.3, 1.2, 4.0] {
            assert!(drag_polar(0.025, 0.045, cl) >= 0.025);
        }
    }

    #[test]
    fn trainer_baseline_drag() {
        let drag = drag_force(2205.0, 12.0, 0.0276116);
        assert_abs_diff_eq!(drag, 730.60, epsilon = 0.01);
    }
}
