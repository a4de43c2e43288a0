//! Package and IA power series.

use std::f64::consts::TAU;

use serde::Serialize;

use crate::synth::unit;

/// Samples per series.
pub const SAMPLE_COUNT: usize = 120;

/// Package rail always reads at least this far above the IA rail.
pub const PACKAGE_MARGIN_W: f64 = 15.0;

const IA_BASE: f64 = 120_000.0;
const SPIKE_TRIGGER_BASE: f64 = 121_000.0;
const SPIKE_MAGNITUDE_BASE: f64 = 122_000.0;
const PACKAGE_NOISE_BASE: f64 = 123_000.0;
const LOAD_PHASE_OFFSET: f64 = 120_500.0;
const IA_TREND_PHASE_OFFSET: f64 = 120_600.0;
const PACKAGE_TREND_PHASE_OFFSET: f64 = 120_700.0;

/// IA and package power at one timestep, with trend overlays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerPoint {
    /// Timestep index
    pub index: usize,
    /// IA-core rail draw in watts
    pub ia_watts: f64,
    /// Package rail draw in watts; exceeds IA by a fixed margin plus noise
    pub package_watts: f64,
    /// Smooth reference curve over the IA channel
    pub ia_trend_watts: f64,
    /// Smooth reference curve over the package channel
    pub package_trend_watts: f64,
}

/// Generate the power series for a seed.
///
/// Both rails ride the same sinusoidal load term and share the same rare
/// spike, so they move together the way a real package/IA pair does.
pub fn series(seed: i64) -> Vec<PowerPoint> {
    let s = seed as f64;
    let load_phase = TAU * unit(s + LOAD_PHASE_OFFSET);
    let ia_trend_phase = TAU * unit(s + IA_TREND_PHASE_OFFSET);
    let package_trend_phase = TAU * unit(s + PACKAGE_TREND_PHASE_OFFSET);

    (0..SAMPLE_COUNT)
        .map(|i| {
            let fi = i as f64;
            let cycle = TAU * 2.0 * fi / SAMPLE_COUNT as f64;

            let load = (cycle + load_phase).sin();
            let spike = if unit(s + SPIKE_TRIGGER_BASE + fi) > 0.96 {
                20.0 + 10.0 * unit(s + SPIKE_MAGNITUDE_BASE + fi)
            } else {
                0.0
            };

            let ia_watts = 45.0 + 10.0 * unit(s + IA_BASE + fi) + 8.0 * load + spike;
            let package_watts =
                ia_watts + PACKAGE_MARGIN_W + 5.0 * unit(s + PACKAGE_NOISE_BASE + fi);

            PowerPoint {
                index: i,
                ia_watts,
                package_watts,
                ia_trend_watts: 50.0 + 8.0 * (cycle + ia_trend_phase).sin(),
                package_trend_watts: 65.0 + 8.0 * (cycle + package_trend_phase).sin(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{series, PACKAGE_MARGIN_W, SAMPLE_COUNT};

    #[test]
    fn series_is_deterministic() {
        assert_eq!(series(10748), series(10748));
    }

    #[test]
    fn package_exceeds_ia_by_the_margin() {
        for point in series(606) {
            assert!(
                point.package_watts >= point.ia_watts + PACKAGE_MARGIN_W,
                "step {}: package {} vs ia {}",
                point.index,
                point.package_watts,
                point.ia_watts
            );
        }
    }

    #[test]
    fn draws_stay_in_formula_bounds() {
        let points = series(1234);
        assert_eq!(points.len(), SAMPLE_COUNT);
        for point in points {
            // ia: 45 + [0,10) + [-8,8] + spike [0,30)
            assert!(point.ia_watts >= 37.0);
            assert!(point.ia_watts < 93.0);
            assert!(point.package_watts < point.ia_watts + PACKAGE_MARGIN_W + 5.0);
        }
    }

    #[test]
    fn trend_overlays_are_smooth() {
        let points = series(55);
        for w in points.windows(2) {
            assert!((w[1].ia_trend_watts - w[0].ia_trend_watts).abs() < 2.0);
            assert!((w[1].package_trend_watts - w[0].package_trend_watts).abs() < 2.0);
        }
    }
}
