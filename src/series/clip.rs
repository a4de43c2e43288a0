//! Turbo-clip reason events.
//!
//! Sparse labeled events explaining why core clocks were clipped below
//! their turbo target. Each timestep makes one primary draw; adjoining
//! bands of that draw select which reason combination fires, with a
//! secondary draw carving the rare lone PL1 case out of the
//! max-turbo band. The band edges are tuned for plausible event mixes,
//! nothing more.

use serde::Serialize;

use crate::synth::unit;

/// Candidate timestamps per series, one per second.
pub const CANDIDATE_COUNT: usize = 60;

const CHANNEL_BASE: f64 = 100_000.0;
const SECONDARY_OFFSET: f64 = 3.0;

/// A single clip reason, named as the firmware reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClipReason {
    MaxTurboLimit,
    PbmPl1,
    PbmPl2,
    Thermal,
}

impl std::fmt::Display for ClipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipReason::MaxTurboLimit => write!(f, "MAX_TURBO_LIMIT"),
            ClipReason::PbmPl1 => write!(f, "PBM_PL1"),
            ClipReason::PbmPl2 => write!(f, "PBM_PL2"),
            ClipReason::Thermal => write!(f, "THERMAL"),
        }
    }
}

/// One fired clip event; reasons are non-exclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipEvent {
    /// Event time in milliseconds from window start
    pub time_ms: u32,
    /// Reasons active at this timestamp, never empty
    pub reasons: Vec<ClipReason>,
}

impl ClipEvent {
    /// Semicolon-joined label as the dashboard displays it,
    /// e.g. "PBM_PL1;MAX_TURBO_LIMIT".
    pub fn label(&self) -> String {
        self.reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// Generate the clip-reason events for a seed.
pub fn series(seed: i64) -> Vec<ClipEvent> {
    let s = seed as f64;
    let mut events = Vec::new();

    for i in 0..CANDIDATE_COUNT {
        let draw_seed = s + CHANNEL_BASE + (i * 10) as f64;
        let r = unit(draw_seed);

        let reasons: Vec<ClipReason> = if r < 0.03 {
            vec![ClipReason::Thermal]
        } else if r < 0.08 {
            vec![ClipReason::PbmPl2, ClipReason::MaxTurboLimit]
        } else if r < 0.15 {
            vec![ClipReason::PbmPl2]
        } else if r < 0.30 {
            vec![ClipReason::PbmPl1, ClipReason::MaxTurboLimit]
        } else if r < 0.90 {
            if unit(draw_seed + SECONDARY_OFFSET) > 0.93 {
                vec![ClipReason::PbmPl1]
            } else {
                vec![ClipReason::MaxTurboLimit]
            }
        } else {
            continue;
        };

        events.push(ClipEvent {
            time_ms: (i * 1000) as u32,
            reasons,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{series, ClipReason, CANDIDATE_COUNT};

    #[test]
    fn series_is_deterministic() {
        assert_eq!(series(10748), series(10748));
    }

    #[test]
    fn events_are_sparse_and_labeled() {
        let events = series(2024);
        assert!(events.len() <= CANDIDATE_COUNT);
        for event in &events {
            assert!(!event.reasons.is_empty());
            assert!(event.time_ms < 60_000);
            assert!(!event.label().is_empty());
        }
    }

    #[test]
    fn label_joins_with_semicolons() {
        let events = series(1);
        if let Some(compound) = events.iter().find(|e| e.reasons.len() > 1) {
            assert!(compound.label().contains(';'));
        }
    }

    #[test]
    fn max_turbo_dominates_the_mix() {
        // Aggregate across many seeds; the band layout makes a lone
        // MAX_TURBO_LIMIT by far the most common label and THERMAL the
        // rarest fired one.
        let mut counts: HashMap<String, usize> = HashMap::new();
        for seed in 0..200 {
            for event in series(seed) {
                *counts.entry(event.label()).or_default() += 1;
            }
        }

        let lone_turbo = counts.get("MAX_TURBO_LIMIT").copied().unwrap_or(0);
        let thermal = counts.get("THERMAL").copied().unwrap_or(0);
        let pl2_turbo = counts.get("PBM_PL2;MAX_TURBO_LIMIT").copied().unwrap_or(0);

        assert!(lone_turbo > thermal * 5, "{lone_turbo} vs {thermal}");
        assert!(lone_turbo > pl2_turbo, "{lone_turbo} vs {pl2_turbo}");
        for event_label in counts.keys() {
            for reason in event_label.split(';') {
                assert!(
                    ["MAX_TURBO_LIMIT", "PBM_PL1", "PBM_PL2", "THERMAL"].contains(&reason),
                    "unexpected reason {reason}"
                );
            }
        }
    }

    #[test]
    fn thermal_fires_alone() {
        for seed in 0..500 {
            for event in series(seed) {
                if event.reasons.contains(&ClipReason::Thermal) {
                    assert_eq!(event.reasons.len(), 1);
                }
            }
        }
    }
}
