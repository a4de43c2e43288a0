//! Static performance modifiers.
//!
//! Pure lookup tables the metrics engine applies on top of the seeded
//! base draw: hardware-tier multipliers per SKU, the set of titles
//! modeled as regressing across builds, and the build-over-build bonus
//! for the actively optimized parts.

/// Default multiplier for SKUs not in the table.
pub const DEFAULT_SKU_MULTIPLIER: f64 = 0.85;

/// Game ids whose performance regresses across newer builds, simulating
/// driver/patch regressions.
pub static NEGATIVE_TREND_GAMES: &[u32] = &[4, 7, 10];

/// Relative hardware-tier multiplier for a SKU.
///
/// Desktop > mobile-HX > mobile-H, with next-gen parts interpolated
/// between tiers. Unknown ids get [`DEFAULT_SKU_MULTIPLIER`]; this never
/// fails.
pub fn sku_multiplier(sku_id: &str) -> f64 {
    match sku_id {
        "arl-s" => 1.2,
        "arl-hx" => 1.05,
        "ptl-h" => 1.0,
        "arl-h" => 0.92,
        "lnl-v" => 0.78,
        "ptl-u" => 0.72,
        _ => DEFAULT_SKU_MULTIPLIER,
    }
}

/// True if the title is modeled as regressing across builds.
pub fn is_negative_trend(game_id: u32) -> bool {
    NEGATIVE_TREND_GAMES.contains(&game_id)
}

/// Build-over-build progression multiplier.
///
/// Only the two actively optimized parts move with the build: ~+3% per
/// step forward for ordinary titles, ~-1.5% per step for regressing ones.
/// Every other SKU is flat at 1.0. `build_step` is zero-based with the
/// oldest cataloged build at 0.
pub fn build_bonus(sku_id: &str, game_id: u32, build_step: usize) -> f64 {
    if sku_id != "arl-s" && sku_id != "arl-hx" {
        return 1.0;
    }

    let rate: f64 = if is_negative_trend(game_id) { 0.985 } else { 1.03 };
    rate.powi(build_step as i32)
}
