//! Seed derivation from (game, SKU, build) keys.
//!
//! Every chart and summary card for one key must agree with every other,
//! so they all start from the same integer seed. Malformed identifiers
//! degrade to a 0 component instead of failing: a chart should render
//! something plausible for any string the UI hands us.

use thiserror::Error;

/// Identifier parsing errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("build id '{0}' has no numeric suffix")]
    BuildSuffix(String),

    #[error("topology string '{0}' is not of the form '<cores>C/<threads>T'")]
    Topology(String),
}

/// Trailing numeric token of a build label ("2025.48" -> 48).
pub fn build_number(build_id: &str) -> Result<u32, ParseError> {
    let digits: String = build_id
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    digits
        .parse::<u32>()
        .map_err(|_| ParseError::BuildSuffix(build_id.to_string()))
}

/// Code point of the SKU id's first character; 0 for an empty id.
pub fn sku_char_code(sku_id: &str) -> u32 {
    sku_id.chars().next().map(|c| c as u32).unwrap_or(0)
}

/// Collapse a (game, SKU, build) key into the base seed for all of that
/// key's generators. Changing any component changes the seed.
pub fn derive_seed(game_id: u32, sku_id: &str, build_id: &str) -> i64 {
    let build_component = build_number(build_id).unwrap_or_else(|_| {
        tracing::debug!(build_id, "build id has no numeric suffix, seeding with 0");
        0
    });

    i64::from(game_id) * 1000 + i64::from(sku_char_code(sku_id)) * 100 + i64::from(build_component)
}
