//! Frame-time series with derived smoothness channels.

use serde::Serialize;

use crate::synth::unit;

/// Samples per series.
pub const SAMPLE_COUNT: usize = 500;

/// Trailing window length for the moving average.
pub const MOVING_AVG_WINDOW: usize = 20;

const SPIKE_TRIGGER: f64 = 1000.0;
const SPIKE_MAGNITUDE: f64 = 2000.0;

/// One frame's timing sample plus the overlay channels charted with it.
///
/// The percentile and low bands are smoothed multiples of the spike-free
/// base frame time, not order statistics of the noisy channel; they exist
/// so the chart can draw stable reference bands over the jittery line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameTimePoint {
    /// Frame index
    pub frame: usize,
    /// Frame time in milliseconds, spikes included
    pub frame_time_ms: f64,
    /// Instantaneous FPS, `1000 / frame_time_ms`
    pub fps: f64,
    /// 95th-percentile band (1.3x base)
    pub p95_ms: f64,
    /// 99th-percentile band (1.5x base)
    pub p99_ms: f64,
    /// 1% low band (1.4x base)
    pub one_percent_low_ms: f64,
    /// 0.1% low band (1.6x base)
    pub point_one_percent_low_ms: f64,
    /// Mean of the trailing <=20 frame times, this frame included
    pub moving_avg_ms: f64,
}

/// Generate the frame-time series for a seed.
pub fn series(seed: i64) -> Vec<FrameTimePoint> {
    let s = seed as f64;
    let mut frame_times = Vec::with_capacity(SAMPLE_COUNT);
    let mut points = Vec::with_capacity(SAMPLE_COUNT);

    for i in 0..SAMPLE_COUNT {
        let fi = i as f64;
        let base = 10.0 + 6.0 * unit(s + fi);
        let spike = if unit(s + fi + SPIKE_TRIGGER) > 0.97 {
            20.0 + 15.0 * unit(s + fi + SPIKE_MAGNITUDE)
        } else {
            0.0
        };

        let frame_time_ms = base + spike;
        frame_times.push(frame_time_ms);

        let window_start = i.saturating_sub(MOVING_AVG_WINDOW - 1);
        let window = &frame_times[window_start..=i];
        let moving_avg_ms = window.iter().sum::<f64>() / window.len() as f64;

        points.push(FrameTimePoint {
            frame: i,
            frame_time_ms,
            fps: 1000.0 / frame_time_ms,
            p95_ms: 1.3 * base,
            p99_ms: 1.5 * base,
            one_percent_low_ms: 1.4 * base,
            point_one_percent_low_ms: 1.6 * base,
            moving_avg_ms,
        });
    }

    points
}
