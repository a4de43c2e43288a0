//! CPU residency series.

use std::f64::consts::TAU;

use serde::Serialize;

use crate::synth::unit;

/// Samples per series, one per second over a 60 s window.
pub const SAMPLE_COUNT: usize = 60;

const CHANNEL_BASE: f64 = 60_000.0;
const SPIKE_TRIGGER_BASE: f64 = 61_000.0;
const SPIKE_MAGNITUDE_BASE: f64 = 62_000.0;
const JITTER_BASE: f64 = 63_000.0;
const PHASE_OFFSET: f64 = 60_500.0;

/// One residency sample with its trend-overlay value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidencyPoint {
    /// Sample time in milliseconds from window start
    pub time_ms: u32,
    /// Busy residency percentage, clamped to [0, 100]
    pub busy_percent: f64,
    /// Smooth sinusoidal reference curve drawn over the noisy series.
    /// Independently defined, not a fit of `busy_percent`.
    pub trend_percent: f64,
}

/// Generate the residency series for a seed.
pub fn series(seed: i64) -> Vec<ResidencyPoint> {
    let s = seed as f64;
    let phase = TAU * unit(s + PHASE_OFFSET);

    (0..SAMPLE_COUNT)
        .map(|i| {
            let fi = i as f64;
            let baseline = 30.0 + 20.0 * unit(s + CHANNEL_BASE + fi);
            let spike = if unit(s + SPIKE_TRIGGER_BASE + fi) > 0.95 {
                25.0 + 15.0 * unit(s + SPIKE_MAGNITUDE_BASE + fi)
            } else {
                0.0
            };
            let jitter = 4.0 * unit(s + JITTER_BASE + fi) - 2.0;

            ResidencyPoint {
                time_ms: (i * 1000) as u32,
                busy_percent: (baseline + spike + jitter).clamp(0.0, 100.0),
                trend_percent: 40.0 + 12.0 * (TAU * fi / SAMPLE_COUNT as f64 + phase).sin(),
            }
        })
        .collect()
}
