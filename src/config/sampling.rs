use std::ops::Range;

/// Mission-parameter ranges sampled uniformly by the dataset generator.
/// Airframe geometry stays at its baseline; only loading and mission
/// variables move.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingRanges {
    pub mass_kg: Range<f64>,
    pub speed_mps: Range<f64>,
    pub distance_miles: Range<f64>,
    pub altitude_ft: Range<f64>,
}

impl Default for SamplingRanges {
    /// Light-aircraft envelope: 500–800 kg, 35–85 m/s, 50–150 mi,
    /// surface to 10 000 ft.
    fn default() -> Self {
        Self {
            mass_kg: 500.0..800.0,
            speed_mps: 35.0..85.0,
            distance_miles: 50.0..150.0,
            altitude_ft: 0.0..10_000.0,
        }
    }
}
