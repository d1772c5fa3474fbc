use cosmwasm_std::{Coin, Uint128};
use tracing::debug;

use identity_fees::{GasPrice, Tx};

use crate::context::Context;
use crate::error::FeeError;
use crate::helpers::{compute_required_fees, is_zero, stringify_funds, to_coins};
use crate::keepers::{FeeMarketKeeper, GlobalFeeKeeper};

/// What a checker accepted out of the fee a transaction offers
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckedFee {
    /// Paid to the fee collector
    pub fee: Vec<Coin>,
    /// Paid on top of the fee to the block proposer
    pub tip: Vec<Coin>,
    pub priority: i64,
}

impl CheckedFee {
    pub fn new(fee: Vec<Coin>, priority: i64) -> Self {
        CheckedFee {
            fee,
            tip: vec![],
            priority,
        }
    }
}

/// Decides whether the fee a non-taxable transaction offers is acceptable
pub trait TxFeeChecker {
    fn check(&self, ctx: &Context, tx: &Tx) -> Result<CheckedFee, FeeError>;
}

/// Priority is the per-unit-gas price offered in the fee's denoms, taking the lowest one seen.
///
/// A running priority of zero is always replaced by the next denom's, so a denom whose price
/// truncates to zero does not pin the priority at zero unless it comes last. Gas prices that do
/// not fit in an i64 count as `i64::MAX`.
pub fn get_tx_priority(fee: &[Coin], gas: u64) -> i64 {
    let mut priority = 0;
    for coin in fee {
        let p = if gas == 0 {
            i64::MAX
        } else {
            i64::try_from((coin.amount / Uint128::from(gas)).u128()).unwrap_or(i64::MAX)
        };
        if priority == 0 || p < priority {
            priority = p;
        }
    }
    priority
}

/// Enforces the global minimum gas prices during CheckTx
pub struct GlobalFeeChecker<'a> {
    keeper: &'a dyn GlobalFeeKeeper,
}

impl<'a> GlobalFeeChecker<'a> {
    pub fn new(keeper: &'a dyn GlobalFeeKeeper) -> Self {
        GlobalFeeChecker {
            keeper,
        }
    }

    fn all_bypass_messages(&self, tx: &Tx) -> Result<bool, FeeError> {
        if tx.msgs.is_empty() {
            return Ok(false);
        }
        for msg in &tx.msgs {
            if !self.keeper.is_bypass_message(msg.type_url())? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<'a> TxFeeChecker for GlobalFeeChecker<'a> {
    fn check(&self, ctx: &Context, tx: &Tx) -> Result<CheckedFee, FeeError> {
        let fee = tx.fee.as_ref().ok_or_else(|| FeeError::tx_decode("Tx must be a FeeTx"))?;

        if ctx.is_check_tx {
            if is_zero(&fee.amount) && self.all_bypass_messages(tx)? {
                return Ok(CheckedFee::default());
            }

            let required = self.keeper.required_fees(tx)?;
            if required.is_empty() {
                return Ok(CheckedFee::default());
            }

            let sufficient = fee.amount.iter().any(|coin| {
                required.iter().any(|req| req.denom == coin.denom && coin.amount >= req.amount)
            });
            if !sufficient {
                return Err(FeeError::InsufficientAnyFee(stringify_funds(&required)));
            }
        }

        Ok(CheckedFee::new(fee.amount.clone(), get_tx_priority(&fee.amount, fee.gas_limit)))
    }
}

/// Prices gas at the fee market's current minimum gas price. Whatever is offered above the
/// required fee is a tip for the block proposer.
pub struct FeeMarketChecker<'a> {
    keeper: &'a dyn FeeMarketKeeper,
}

impl<'a> FeeMarketChecker<'a> {
    pub fn new(keeper: &'a dyn FeeMarketKeeper) -> Self {
        FeeMarketChecker {
            keeper,
        }
    }
}

impl<'a> TxFeeChecker for FeeMarketChecker<'a> {
    fn check(&self, _ctx: &Context, tx: &Tx) -> Result<CheckedFee, FeeError> {
        let fee = tx.fee.as_ref().ok_or_else(|| FeeError::tx_decode("Tx must be a FeeTx"))?;
        let priority = get_tx_priority(&fee.amount, fee.gas_limit);

        let params = self.keeper.params()?;
        if !params.enabled {
            return Ok(CheckedFee::new(fee.amount.clone(), priority));
        }

        let coins = to_coins(&fee.amount)?;
        let fee_coin = match coins.to_vec().as_slice() {
            [coin] => coin.clone(),
            [] => return Err(FeeError::InvalidCoins("no fee coins provided".to_string())),
            many => {
                return Err(FeeError::InvalidCoins(format!(
                    "fee market accepts a single fee coin, got {}",
                    stringify_funds(many)
                )))
            },
        };

        let min_gas_price = self.keeper.min_gas_price(&fee_coin.denom)?;
        let required =
            compute_required_fees(&[GasPrice::new(min_gas_price, &fee_coin.denom)], fee.gas_limit)?;
        let required_amount = required.amount_of(&fee_coin.denom);

        debug!(
            denom = %fee_coin.denom,
            %min_gas_price,
            gas = fee.gas_limit,
            required = %required_amount,
            "checking fee market price"
        );

        if fee_coin.amount < required_amount {
            return Err(FeeError::insufficient_fee(&[fee_coin], &required.to_vec()));
        }

        let tip = fee_coin.amount - required_amount;
        let mut checked =
            CheckedFee::new(vec![Coin::new(required_amount.u128(), &fee_coin.denom)], priority);
        if !tip.is_zero() {
            checked.tip.push(Coin::new(tip.u128(), fee_coin.denom));
        }
        checked.fee.retain(|coin| !coin.amount.is_zero());

        Ok(checked)
    }
}
