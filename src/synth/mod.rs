//! Deterministic value synthesis
//!
//! Everything the dashboard shows is derived from a (game, SKU, build) key:
//! the key collapses to an integer seed, and a seeded hash turns seed
//! arithmetic into stable unit-interval draws. No state, no RNG objects,
//! no clocks — two calls with the same arguments always agree.

mod noise;
mod seed;

pub use noise::unit;
pub use seed::{build_number, derive_seed, sku_char_code, ParseError};
