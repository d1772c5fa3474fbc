#![allow(clippy::derive_partial_eq_without_eq)]

mod category;
mod fee_range;
pub mod msg;
pub mod params;
mod tx;

pub use category::*;
pub use fee_range::*;
pub use tx::*;

/// Smallest unit of the native token
pub const NATIVE_DENOM: &str = "ncheq";

/// Denomination used for USD-quoted fee ranges, 18-decimal fixed point
pub const USD_DENOM: &str = "usd";

/// Oracle symbol of the native token
pub const NATIVE_SYMBOL: &str = "CHEQ";

/// Number of smallest units in one whole native token
pub const NATIVE_SCALE: u128 = 1_000_000_000;

/// Fixed-point scale of amounts quoted in `usd`
pub const USD_SCALE: u128 = 1_000_000_000_000_000_000;
