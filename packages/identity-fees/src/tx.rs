use cosmwasm_std::{Addr, Coin, Decimal};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::msg::Msg;

/// The fee envelope of a transaction
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct Fee {
    /// Coins offered to pay for the transaction
    pub amount: Vec<Coin>,
    pub gas_limit: u64,
    /// The account the fee is taken from, unless a granter is set
    pub payer: Addr,
    /// An account that granted the payer an allowance to pay fees on its behalf
    pub granter: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct Tx {
    pub msgs: Vec<Msg>,
    /// Setting this to None means the transaction does not carry a fee envelope at all, and cannot
    /// be admitted by a fee-checking handler.
    pub fee: Option<Fee>,
}

impl Tx {
    pub fn new(
        msgs: Vec<Msg>,
        amount: Vec<Coin>,
        gas_limit: u64,
        payer: impl Into<String>,
    ) -> Self {
        Tx {
            msgs,
            fee: Some(Fee {
                amount,
                gas_limit,
                payer: Addr::unchecked(payer),
                granter: None,
            }),
        }
    }

    pub fn with_granter(mut self, granter: impl Into<String>) -> Self {
        if let Some(fee) = self.fee.as_mut() {
            fee.granter = Some(Addr::unchecked(granter));
        }
        self
    }
}

/// A minimum price per unit of gas in one denom
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct GasPrice {
    pub denom: String,
    pub amount: Decimal,
}

impl GasPrice {
    pub fn new(amount: Decimal, denom: impl Into<String>) -> Self {
        GasPrice {
            denom: denom.into(),
            amount,
        }
    }
}
