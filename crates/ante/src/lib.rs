pub mod ante;
pub mod bypass;
pub mod checker;
pub mod context;
pub mod decorator;
pub mod deduct;
pub mod distribution;
pub mod error;
pub mod execute;
pub mod filters;
pub mod helpers;
pub mod keeper;
pub mod keepers;
pub mod media;
pub mod resolver;
pub mod state;
pub mod tax;
pub mod upgrades;

pub const CONTRACT_NAME: &str = "crates.io:identity-fee-ante";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Module account that collects identity fees before they are burned or distributed
pub const DID_MODULE_NAME: &str = "did";

/// Module account that receives the oracle's share of identity fee rewards
pub const ORACLE_MODULE_NAME: &str = "oracle";

/// Module account whose balance is distributed to stakers as block rewards
pub const FEE_COLLECTOR_NAME: &str = "fee_collector";
