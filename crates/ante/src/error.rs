use cosmwasm_std::{Coin, StdError};
use thiserror::Error;

use identity_fees::params::ParamsError;
use identity_fees::TaxableMsgCategory;

use crate::helpers::stringify_funds;

#[derive(Error, Debug, PartialEq)]
pub enum FeeError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Params(#[from] ParamsError),

    #[error("tx parse error: {0}")]
    TxDecode(String),

    #[error("invalid gas limit: must provide positive gas")]
    InvalidGasLimit,

    #[error("insufficient fees; got: {got} required: {required}")]
    InsufficientFee {
        got: String,
        required: String,
    },

    #[error("insufficient fees; expected at least one of {0}")]
    InsufficientAnyFee(String),

    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("fee cannot be zero")]
    ZeroFee,

    #[error("no fee can be resolved for {category} at the current price")]
    FeeUnavailable {
        category: TaxableMsgCategory,
    },

    #[error("fee distribution is invalid: {0}")]
    InvalidDistribution(String),

    #[error("invalid coins: {0}")]
    InvalidCoins(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unknown address: {0}")]
    UnknownAddress(String),

    #[error("module account {0} has not been set")]
    ModuleAccountNotSet(String),

    #[error("feature not supported: {0}")]
    NotSupported(String),

    #[error("{0} keeper is required for ante builder")]
    MissingKeeper(String),

    #[error("no oracle price found for {0}")]
    PriceUnavailable(String),
}

impl FeeError {
    pub fn tx_decode(reason: impl Into<String>) -> Self {
        FeeError::TxDecode(reason.into())
    }

    pub fn insufficient_fee(got: &[Coin], required: &[Coin]) -> Self {
        FeeError::InsufficientFee {
            got: stringify_funds(got),
            required: stringify_funds(required),
        }
    }

    pub fn insufficient_funds(reason: impl Into<String>) -> Self {
        FeeError::InsufficientFunds(reason.into())
    }

    pub fn invalid_distribution(reason: impl Into<String>) -> Self {
        FeeError::InvalidDistribution(reason.into())
    }

    pub fn invalid_coins(coins: &[Coin]) -> Self {
        FeeError::InvalidCoins(stringify_funds(coins))
    }

    pub fn missing_keeper(name: impl Into<String>) -> Self {
        FeeError::MissingKeeper(name.into())
    }
}
