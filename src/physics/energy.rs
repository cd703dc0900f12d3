use crate::constants::JOULES_PER_WH;

/// Electrical input power (W) to sustain cruise: drag·v divided by the
/// lumped propulsive efficiency. An efficiency of zero yields +inf; the
/// value is propagated as-is, never clamped.
pub fn cruise_power(drag_n: f64, speed_mps: f64, propulsive_efficiency: f64) -> f64 {
    drag_n * speed_mps / propulsive_efficiency
}

pub fn mission_time(distance_m: f64, speed_mps: f64) -> f64 {
    distance_m / speed_mps
}

pub fn mission_energy_wh(power_w: f64, time_s: f64) -> f64 {
    power_w * time_s / JOULES_PER_WH
}

pub fn battery_mass(energy_wh: f64, battery_wh_per_kg: f64) -> f64 {
    energy_wh / battery_wh_per_kg
}
