//! Performance-capability and C-state residency series.

use serde::Serialize;

use crate::synth::unit;

/// Samples per series.
pub const SAMPLE_COUNT: usize = 60;

const CAPABILITY_BASE: f64 = 80_000.0;
const C0_BASE: f64 = 81_000.0;
const C1_BASE: f64 = 82_000.0;
const C6_BASE: f64 = 83_000.0;

/// Capability index plus C-state occupancy at one timestep.
///
/// The occupancy channels are independently drawn around distinct
/// centers; they are chart lines, not a partition summing to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityPoint {
    /// Timestep index
    pub index: usize,
    /// Performance-capability index percentage
    pub capability_percent: f64,
    /// C0 (active) occupancy percentage
    pub c0_percent: f64,
    /// C1 (halt) occupancy percentage
    pub c1_percent: f64,
    /// C6 (deep sleep) occupancy percentage
    pub c6_percent: f64,
}

/// Generate the capability/C-state series for a seed.
pub fn series(seed: i64) -> Vec<CapabilityPoint> {
    let s = seed as f64;

    (0..SAMPLE_COUNT)
        .map(|i| {
            let fi = i as f64;
            CapabilityPoint {
                index: i,
                capability_percent: 70.0 + 20.0 * unit(s + CAPABILITY_BASE + fi),
                c0_percent: 35.0 + 25.0 * unit(s + C0_BASE + fi),
                c1_percent: 8.0 + 10.0 * unit(s + C1_BASE + fi),
                c6_percent: 25.0 + 20.0 * unit(s + C6_BASE + fi),
            }
        })
        .collect()
}
