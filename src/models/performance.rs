use serde::Serialize;

/// Derived quantities for one evaluated cruise mission. Every field is a
/// closed-form function of the input records; a fresh record is produced
/// per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceResult {
    /// Ambient air density at cruise altitude (kg/m³).
    pub air_density_kg_m3: f64,
    /// Lift coefficient required for level flight.
    pub lift_coefficient: f64,
    /// Total drag coefficient from the drag polar.
    pub drag_coefficient: f64,
    /// Cruise drag force (N).
    pub drag_n: f64,
    /// Electrical input power required (W).
    pub power_w: f64,
    /// Time to cover the mission distance (s).
    pub time_s: f64,
    /// Mission energy (Wh).
    pub energy_wh: f64,
    /// Mission energy (kWh).
    pub energy_kwh: f64,
    /// Battery mass supplying exactly the mission energy (kg).
    pub battery_mass_kg: f64,
}

impl PerformanceResult {
    /// True when every derived quantity is a finite number. Inputs that
    /// violate the model constraints (zero wing area, zero efficiency,
    /// ...) surface here as infinities or NaNs rather than as errors.
    pub fn is_finite(&self) -> bool {
        self.air_density_kg_m3.is_finite()
            && self.lift_coefficient.is_finite()
            && self.drag_coefficient.is_finite()
            && self.drag_n.is_finite()
            && self.power_w.is_finite()
            && self.time_s.is_finite()
            && self.energy_wh.is_finite()
            && self.energy_kwh.is_finite()
            && self.battery_mass_kg.is_finite()
    }
}
