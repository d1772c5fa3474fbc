//! Collaborators the fee engine reads from and writes through.
//!
//! Every method takes `&self`. Implementations backed by mutable state (a bank, a fee grant
//! registry) are expected to manage their own interior mutability, the same way a keeper holds a
//! store handle rather than owning the store.

use cosmwasm_std::{Addr, Coin, Decimal, StdResult};

use identity_fees::msg::Msg;
use identity_fees::params::{DidFeeParams, FeeMarketParams, ResourceFeeParams};
use identity_fees::Tx;

use crate::error::FeeError;

pub trait DidKeeper {
    fn get_params(&self) -> StdResult<DidFeeParams>;
}

pub trait ResourceKeeper {
    fn get_params(&self) -> StdResult<ResourceFeeParams>;
}

pub trait OracleKeeper {
    /// Exponential moving average price of `symbol` in USD, if the oracle has one
    fn get_ema(&self, symbol: &str) -> Option<Decimal>;
}

pub trait BankKeeper {
    fn send_coins(&self, from: &Addr, to: &Addr, amount: &[Coin]) -> Result<(), FeeError>;

    fn send_coins_from_account_to_module(
        &self,
        from: &Addr,
        module: &str,
        amount: &[Coin],
    ) -> Result<(), FeeError>;

    fn send_coins_from_module_to_module(
        &self,
        from_module: &str,
        to_module: &str,
        amount: &[Coin],
    ) -> Result<(), FeeError>;

    fn burn_coins(&self, module: &str, amount: &[Coin]) -> Result<(), FeeError>;
}

pub trait AccountKeeper {
    fn module_address(&self, module: &str) -> Option<Addr>;

    fn has_account(&self, addr: &Addr) -> bool;
}

pub trait FeegrantKeeper {
    /// Spend `fee` out of the allowance `granter` gave to `grantee`
    fn use_granted_fees(
        &self,
        granter: &Addr,
        grantee: &Addr,
        fee: &[Coin],
        msgs: &[Msg],
    ) -> Result<(), FeeError>;
}

pub trait GlobalFeeKeeper {
    fn is_bypass_message(&self, type_url: &str) -> StdResult<bool>;

    /// Fees the transaction must pay at the global minimum gas prices, one coin per denom
    fn required_fees(&self, tx: &Tx) -> Result<Vec<Coin>, FeeError>;
}

pub trait FeeMarketKeeper {
    fn params(&self) -> StdResult<FeeMarketParams>;

    fn min_gas_price(&self, denom: &str) -> Result<Decimal, FeeError>;
}
