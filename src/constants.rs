pub const G0: f64 = 9.80665; // Standard gravity (m/s²)

// Atmosphere (exponential ISA approximation)
pub const RHO_SEA_LEVEL: f64 = 1.225; // Sea-level air density (kg/m³)
pub const DENSITY_SCALE_HEIGHT: f64 = 8500.0; // Density e-folding altitude (m)

// Unit conversions
pub const FEET_TO_METERS: f64 = 0.3048;
pub const MILES_TO_METERS: f64 = 1609.344;
pub const JOULES_PER_WH: f64 = 3600.0;
pub const WH_PER_KWH: f64 = 1000.0;
