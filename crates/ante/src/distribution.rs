use cosmwasm_std::{Coin, Coins, Decimal, StdResult};

use crate::error::FeeError;
use crate::helpers::{add_coins, stringify_funds};

pub const BURN_FEE_PORTION: usize = 0;
pub const REWARDS_FEE_PORTION: usize = 1;
pub const FEE_PORTION_COUNT: usize = 2;

/// A fee split into the portion that is burned and the portion paid out as rewards, indexed by
/// `BURN_FEE_PORTION` and `REWARDS_FEE_PORTION`
pub type DistributionFeeAllocation = [Coins; FEE_PORTION_COUNT];

/// The part of `fee` that is burned, `floor(amount * burn_factor)` per denom
pub fn get_burn_fee_portion(fee: &Coins, burn_factor: Decimal) -> StdResult<Coins> {
    let mut burn = Coins::default();
    for coin in fee.to_vec() {
        burn.add(Coin {
            amount: coin.amount * burn_factor,
            denom: coin.denom,
        })?;
    }
    Ok(burn)
}

/// What is left of `fee` once the burn portion is taken out
pub fn get_reward_portion(fee: &Coins, burn: &Coins) -> StdResult<Coins> {
    let mut reward = fee.clone();
    for coin in burn.to_vec() {
        reward.sub(coin)?;
    }
    Ok(reward)
}

/// Split `fee` into its burn and rewards portions, given an already computed burn portion
pub fn get_distribution_fee(
    fee: &Coins,
    burn: &Coins,
) -> Result<DistributionFeeAllocation, FeeError> {
    let reward = get_reward_portion(fee, burn).map_err(|_| {
        FeeError::invalid_distribution(format!(
            "burn portion {} exceeds fee {}",
            stringify_funds(&burn.to_vec()),
            stringify_funds(&fee.to_vec())
        ))
    })?;

    let alloc = [burn.clone(), reward];
    validate_distribution_fee(fee, &alloc)?;

    Ok(alloc)
}

pub fn sum_distribution_fee(alloc: &DistributionFeeAllocation) -> StdResult<Coins> {
    let mut sum = Coins::default();
    for portion in alloc {
        add_coins(&mut sum, portion)?;
    }
    Ok(sum)
}

/// A distribution is valid if there is something to distribute and its portions add up to
/// exactly the fee
pub fn validate_distribution_fee(
    fee: &Coins,
    alloc: &DistributionFeeAllocation,
) -> Result<(), FeeError> {
    if fee.is_empty() {
        return Err(FeeError::ZeroFee);
    }

    let sum = sum_distribution_fee(alloc)?;
    if &sum != fee {
        return Err(FeeError::invalid_distribution(format!(
            "portions sum to {}, expected {}",
            stringify_funds(&sum.to_vec()),
            stringify_funds(&fee.to_vec())
        )));
    }

    Ok(())
}

/// Split rewards into a `ratio` share and the remainder. The share is truncated per denom, so the
/// remainder absorbs any rounding.
pub fn split_rewards_by_ratio(rewards: &Coins, ratio: Decimal) -> StdResult<(Coins, Coins)> {
    let mut share = Coins::default();
    let mut rest = Coins::default();
    for coin in rewards.to_vec() {
        let portion = coin.amount * ratio;
        let remainder = coin.amount.checked_sub(portion)?;
        share.add(Coin::new(portion.u128(), &coin.denom))?;
        rest.add(Coin::new(remainder.u128(), coin.denom))?;
    }
    Ok((share, rest))
}
