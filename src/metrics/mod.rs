//! Metrics module
//!
//! Single-point summaries, aggregate scores, and the static modifier
//! tables that bias them per SKU and build.

mod engine;
mod modifiers;

pub use engine::{
    BuildTrendPoint, BuildTrendResult, GameMetricsSnapshot, MetricsEngine, ThrottleReason,
};
pub use modifiers::{
    build_bonus, is_negative_trend, sku_multiplier, DEFAULT_SKU_MULTIPLIER, NEGATIVE_TREND_GAMES,
};
