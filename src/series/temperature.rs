//! Per-core temperature series.

use serde::Serialize;

use crate::catalog::CoreTopology;
use crate::synth::unit;

/// Samples per series.
pub const SAMPLE_COUNT: usize = 120;

/// Charting more lines than this stops being readable.
pub const MAX_CHARTED_CORES: usize = 24;

/// Package sensor reads this much above the hottest core.
pub const PACKAGE_OFFSET_C: f64 = 2.0;

const BASELINE_BASE: f64 = 40_000.0;
const CORE_BASE: f64 = 41_000.0;
const SPIKE_TRIGGER_OFFSET: f64 = 30.0;
const SPIKE_MAGNITUDE_OFFSET: f64 = 60.0;

/// Core and package temperatures at one timestep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureSample {
    /// Timestep index
    pub index: usize,
    /// Per-core temperature in Celsius
    pub core_c: Vec<f64>,
    /// Package temperature; always above the hottest core
    pub package_c: f64,
}

/// Per-core temperature series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreTemperatureSeries {
    /// Cores charted (topology total capped at [`MAX_CHARTED_CORES`])
    pub cores: usize,
    pub samples: Vec<TemperatureSample>,
}

/// Generate the per-core temperature series for a topology and seed.
///
/// All cores share a per-timestep baseline so the bundle moves together;
/// per-core jitter and the occasional thermal spike separate the lines.
pub fn series(topology: CoreTopology, seed: i64) -> CoreTemperatureSeries {
    let s = seed as f64;
    let cores = topology.total().min(MAX_CHARTED_CORES);

    let samples = (0..SAMPLE_COUNT)
        .map(|i| {
            let baseline = 55.0 + 15.0 * unit(s + BASELINE_BASE + i as f64);
            let step = CORE_BASE + (i as f64) * 100.0;

            let core_c: Vec<f64> = (0..cores)
                .map(|c| {
                    let fc = c as f64;
                    let jitter = 8.0 * unit(s + step + fc);
                    let spike = if unit(s + step + fc + SPIKE_TRIGGER_OFFSET) > 0.98 {
                        10.0 + 8.0 * unit(s + step + fc + SPIKE_MAGNITUDE_OFFSET)
                    } else {
                        0.0
                    };
                    baseline + jitter + spike
                })
                .collect();

            let hottest = core_c.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            TemperatureSample {
                index: i,
                core_c,
                package_c: hottest + PACKAGE_OFFSET_C,
            }
        })
        .collect();

    CoreTemperatureSeries { cores, samples }
}
