use crate::constants::{DENSITY_SCALE_HEIGHT, RHO_SEA_LEVEL};

/// Ambient air density (kg/m³) at a geometric altitude in meters.
///
/// Simple exponential atmospheric model: sea-level density decaying with
/// one fixed scale height, no temperature lapse and no layer table. Good
/// for cruise altitudes well below the stratosphere; altitudes below the
/// sea-level datum are valid and give densities above 1.225.
pub fn air_density(altitude_m: f64) -> f64 {
    RHO_SEA_LEVEL * (-altitude_m / DENSITY_SCALE_HEIGHT).exp()
}
