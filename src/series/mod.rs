//! Synthetic telemetry series
//!
//! One generator per telemetry signal. Each is a pure function of a seed
//! (plus core topology where the signal is per-core), produces a fixed
//! number of samples, and reproduces the same sequence on every call.
//!
//! Signals sharing a base seed must not track each other, so every
//! generator draws from its own offset block: frame times at +0, core
//! frequency at +20_000, core temperature at +40_000, residency at
//! +60_000, capability at +80_000, clip reasons at +100_000 and power at
//! +120_000, with per-sample/per-core offsets (`i`, `i*100 + c`) inside
//! the block. These offsets are part of each generator's contract.

pub mod capability;
pub mod clip;
pub mod frame_time;
pub mod frequency;
pub mod power;
pub mod residency;
pub mod temperature;
