use cosmwasm_std::Uint128;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::params::ParamsError;
use crate::{NATIVE_DENOM, USD_DENOM};

/// An acceptable fee interval quoted in a single denomination.
///
/// Native ranges are quoted in the token's smallest unit. USD ranges are quoted either as plain
/// dollars (small values) or as 18-decimal fixed point.
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct FeeRange {
    pub denom: String,
    pub min_amount: Uint128,
    /// Setting this to None means the range has no upper bound
    pub max_amount: Option<Uint128>,
}

impl FeeRange {
    pub fn new(denom: impl Into<String>, min_amount: u128, max_amount: Option<u128>) -> Self {
        FeeRange {
            denom: denom.into(),
            min_amount: Uint128::new(min_amount),
            max_amount: max_amount.map(Uint128::new),
        }
    }

    pub fn native(min_amount: u128, max_amount: Option<u128>) -> Self {
        Self::new(NATIVE_DENOM, min_amount, max_amount)
    }

    pub fn usd(min_amount: u128, max_amount: Option<u128>) -> Self {
        Self::new(USD_DENOM, min_amount, max_amount)
    }

    /// Bring an amount into `[min_amount, max_amount]`.
    pub fn clamp(&self, amount: Uint128) -> Uint128 {
        let amount = amount.max(self.min_amount);
        match self.max_amount {
            Some(max) => amount.min(max),
            None => amount,
        }
    }
}

/// Check every range of a category's list: supported denom, positive minimum, and a maximum that
/// is not below the minimum.
pub fn validate_fee_ranges(name: &str, ranges: &[FeeRange]) -> Result<(), ParamsError> {
    for (i, range) in ranges.iter().enumerate() {
        if range.denom != NATIVE_DENOM && range.denom != USD_DENOM {
            return Err(ParamsError::invalid_denom(name, i, &range.denom));
        }
        if range.min_amount.is_zero() {
            return Err(ParamsError::NonPositiveMin {
                name: name.to_string(),
                index: i,
            });
        }
        if let Some(max) = range.max_amount {
            if max < range.min_amount {
                return Err(ParamsError::MaxBelowMin {
                    name: name.to_string(),
                    index: i,
                    min: range.min_amount,
                    max,
                });
            }
        }
    }
    Ok(())
}
