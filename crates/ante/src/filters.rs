use cosmwasm_std::{Coin, Coins, Decimal, StdError, StdResult};
use tracing::debug;

use identity_fees::msg::Msg;
use identity_fees::params::FeeSnapshot;
use identity_fees::{TaxableMsgCategory, Tx, NATIVE_DENOM, NATIVE_SCALE, NATIVE_SYMBOL, USD_DENOM};

use crate::context::Context;
use crate::distribution::{
    get_burn_fee_portion, get_distribution_fee, get_reward_portion, DistributionFeeAllocation,
    REWARDS_FEE_PORTION,
};
use crate::error::FeeError;
use crate::helpers::{add_coins, compute_required_fees, is_any_gte, stringify_funds, to_coins};
use crate::keepers::{DidKeeper, OracleKeeper, ResourceKeeper};
use crate::media::resource_category;
use crate::resolver::get_fee_for_msg;

/// The fee category a message is priced by, or None if the message is not taxable
pub fn taxable_category(msg: &Msg) -> Option<TaxableMsgCategory> {
    match msg {
        Msg::CreateDidDoc {
            ..
        } => Some(TaxableMsgCategory::CreateDidDoc),
        Msg::UpdateDidDoc {
            ..
        } => Some(TaxableMsgCategory::UpdateDidDoc),
        Msg::DeactivateDidDoc {
            ..
        } => Some(TaxableMsgCategory::DeactivateDidDoc),
        Msg::CreateResource {
            payload,
            ..
        } => Some(resource_category(payload.data.as_slice())),
        Msg::Acknowledgement {
            ..
        }
        | Msg::Other {
            ..
        } => None,
    }
}

pub fn is_taxable_msg(msg: &Msg) -> bool {
    matches!(
        msg,
        Msg::CreateDidDoc { .. }
            | Msg::UpdateDidDoc { .. }
            | Msg::DeactivateDidDoc { .. }
            | Msg::CreateResource { .. }
    )
}

/// Whether any message of the transaction is taxable. Looks at message kinds only, without
/// pricing anything.
pub fn is_taxable_tx_lite(tx: &Tx) -> bool {
    tx.msgs.iter().any(is_taxable_msg)
}

/// Read both fee schedules into a single point-in-time copy
pub fn load_fee_snapshot(
    did: &dyn DidKeeper,
    resource: &dyn ResourceKeeper,
) -> StdResult<FeeSnapshot> {
    Ok(FeeSnapshot {
        did: did.get_params()?,
        resource: resource.get_params()?,
    })
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaxableOutcome {
    pub taxable: bool,
    /// Sum of the reward portions of every taxable message's fee
    pub reward: Coins,
    /// Sum of the burn portions of every taxable message's fee
    pub burn: Coins,
}

impl TaxableOutcome {
    /// The total fee owed by the taxable messages
    pub fn total(&self) -> StdResult<Coins> {
        let mut total = self.reward.clone();
        add_coins(&mut total, &self.burn)?;
        Ok(total)
    }
}

/// Price every taxable message of the transaction and aggregate the burn and reward portions.
///
/// Without a usable oracle price the transaction is reported as not taxable, so that it is
/// charged through the fee market instead of being rejected.
pub fn is_taxable_tx(
    did: &dyn DidKeeper,
    resource: &dyn ResourceKeeper,
    oracle: &dyn OracleKeeper,
    tx: &Tx,
) -> Result<TaxableOutcome, FeeError> {
    if !is_taxable_tx_lite(tx) {
        return Ok(TaxableOutcome::default());
    }

    let price = match oracle.get_ema(NATIVE_SYMBOL) {
        Some(price) if !price.is_zero() => price,
        _ => {
            debug!(symbol = NATIVE_SYMBOL, "no oracle price, treating tx as not taxable");
            return Ok(TaxableOutcome::default());
        },
    };

    let snapshot = load_fee_snapshot(did, resource)?;

    let mut outcome = TaxableOutcome {
        taxable: true,
        ..Default::default()
    };
    for category in tx.msgs.iter().filter_map(taxable_category) {
        let fee = get_fee_for_msg(snapshot.ranges(category), price).ok_or(FeeError::FeeUnavailable {
            category,
        })?;
        let fee = to_coins(&[fee])?;

        let burn = get_burn_fee_portion(&fee, snapshot.burn_factor(category.burn_group()))?;
        let reward = get_reward_portion(&fee, &burn)?;

        debug!(
            %category,
            fee = %stringify_funds(&fee.to_vec()),
            burn = %stringify_funds(&burn.to_vec()),
            "priced taxable message"
        );

        add_coins(&mut outcome.burn, &burn)?;
        add_coins(&mut outcome.reward, &reward)?;
    }

    Ok(outcome)
}

/// Convert coins quoted in `usd` (18-decimal fixed point) into the native denom at the given
/// price, truncating. Native coins pass through unchanged.
pub fn convert_to_native(coins: &Coins, price: Decimal) -> Result<Coins, FeeError> {
    let mut converted = Coins::default();
    for coin in coins.to_vec() {
        match coin.denom.as_str() {
            NATIVE_DENOM => converted.add(coin)?,
            USD_DENOM => {
                if price.is_zero() {
                    return Err(FeeError::PriceUnavailable(NATIVE_SYMBOL.to_string()));
                }
                let amount = usd_to_native(&coin, price).ok_or_else(|| {
                    StdError::generic_err(format!("cannot convert {} to {}", coin, NATIVE_DENOM))
                })?;
                converted.add(Coin::new(amount, NATIVE_DENOM))?;
            },
            _ => return Err(FeeError::InvalidCoins(format!("unexpected denom: {}", coin.denom))),
        }
    }
    Ok(converted)
}

fn usd_to_native(coin: &Coin, price: Decimal) -> Option<u128> {
    // usd amounts are 18-decimal fixed point, the same representation Decimal uses
    let usd = Decimal::new(coin.amount);
    let tokens = usd.checked_div(price).ok()?;
    let scale = Decimal::checked_from_ratio(NATIVE_SCALE, 1u128).ok()?;
    Some(tokens.checked_mul(scale).ok()?.to_uint_floor().u128())
}

/// Check that `fee` covers the required identity fee in at least one denom, and split the
/// required fee into its burn and rewards portions.
///
/// When the validator has minimum gas prices configured, the rewards portion alone must also pay
/// for the requested gas at those prices.
pub fn is_sufficient_custom_fee(
    ctx: &Context,
    required: &Coins,
    fee: &[Coin],
    burn: &Coins,
    gas: u64,
) -> Result<DistributionFeeAllocation, FeeError> {
    if !is_any_gte(fee, required) {
        return Err(FeeError::insufficient_fee(fee, &required.to_vec()));
    }

    let alloc = get_distribution_fee(required, burn)?;

    let min_fees = compute_required_fees(&ctx.min_gas_prices, gas)?;
    if !min_fees.is_empty() {
        let rewards = alloc[REWARDS_FEE_PORTION].to_vec();
        if !is_any_gte(&rewards, &min_fees) {
            return Err(FeeError::insufficient_fee(&rewards, &min_fees.to_vec()));
        }
    }

    Ok(alloc)
}
