//! Per-core frequency series.

use serde::Serialize;

use crate::catalog::CoreTopology;
use crate::synth::unit;

/// Samples per series.
pub const SAMPLE_COUNT: usize = 120;

const CHANNEL_BASE: f64 = 20_000.0;

/// Frequencies of every core at one timestep, P-cores first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencySample {
    /// Timestep index
    pub index: usize,
    /// Per-core clock in MHz, ordered P-cores then E-cores
    pub core_mhz: Vec<f64>,
}

/// Per-core frequency series plus the core-count split the chart labels
/// its lines with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreFrequencySeries {
    pub performance_cores: usize,
    pub efficiency_cores: usize,
    pub samples: Vec<FrequencySample>,
}

/// Generate the per-core frequency series for a topology and seed.
///
/// P-cores jitter around 5000 MHz, E-cores around 3800 MHz; each core
/// draws from its own seed offset so the lines decorrelate.
pub fn series(topology: CoreTopology, seed: i64) -> CoreFrequencySeries {
    let s = seed as f64;
    let p_cores = topology.performance_cores;
    let e_cores = topology.efficiency_cores;

    let samples = (0..SAMPLE_COUNT)
        .map(|i| {
            let step = CHANNEL_BASE + (i as f64) * 100.0;
            let mut core_mhz = Vec::with_capacity(p_cores + e_cores);

            for c in 0..p_cores {
                core_mhz.push(4900.0 + 200.0 * unit(s + step + c as f64));
            }
            for c in 0..e_cores {
                core_mhz.push(3700.0 + 200.0 * unit(s + step + (p_cores + c) as f64));
            }

            FrequencySample { index: i, core_mhz }
        })
        .collect();

    CoreFrequencySeries {
        performance_cores: p_cores,
        efficiency_cores: e_cores,
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::{series, SAMPLE_COUNT};
    use crate::catalog::CoreTopology;

    fn topology() -> CoreTopology {
        CoreTopology {
            performance_cores: 8,
            efficiency_cores: 16,
            threads: 24,
        }
    }

    #[test]
    fn series_is_deterministic() {
        assert_eq!(series(topology(), 10748), series(topology(), 10748));
    }

    #[test]
    fn every_sample_carries_all_cores() {
        let freq = series(topology(), 99);
        assert_eq!(freq.samples.len(), SAMPLE_COUNT);
        assert_eq!(freq.performance_cores, 8);
        assert_eq!(freq.efficiency_cores, 16);
        assert!(freq.samples.iter().all(|s| s.core_mhz.len() == 24));
    }

    #[test]
    fn core_types_occupy_distinct_bands() {
        let freq = series(topology(), 4242);
        for sample in &freq.samples {
            for (c, mhz) in sample.core_mhz.iter().enumerate() {
                if c < freq.performance_cores {
                    assert!((4900.0..5100.0).contains(mhz), "P-core {c}: {mhz}");
                } else {
                    assert!((3700.0..3900.0).contains(mhz), "E-core {c}: {mhz}");
                }
            }
        }
    }

    #[test]
    fn cores_do_not_mirror_each_other() {
        let freq = series(topology(), 7);
        let first = &freq.samples[0].core_mhz;
        assert!(first.windows(2).any(|w| (w[0] - w[1]).abs() > 1.0));
    }
}
