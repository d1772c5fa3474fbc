use cosmwasm_std::{Coin, Coins, Decimal, StdResult};

use identity_fees::GasPrice;

/// Casting a slice of coins to a string, e.g. `100ncheq,5usd`. An empty slice renders as an empty
/// string, the same as the SDK does for zero coins.
pub fn stringify_funds(funds: &[Coin]) -> String {
    funds
        .iter()
        .map(|coin| coin.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Collect coins into a set, merging duplicate denoms and dropping zero amounts
pub fn to_coins<'a>(funds: impl IntoIterator<Item = &'a Coin>) -> StdResult<Coins> {
    let mut coins = Coins::default();
    for coin in funds {
        coins.add(coin.clone())?;
    }
    Ok(coins)
}

/// Coin-wise addition of `other` into `target`
pub fn add_coins(target: &mut Coins, other: &Coins) -> StdResult<()> {
    for coin in other.to_vec() {
        target.add(coin)?;
    }
    Ok(())
}

/// Whether `fee` holds at least the required amount in any one of the required denoms.
///
/// An empty requirement is never met, the same as the SDK's `IsAnyGTE`.
pub fn is_any_gte(fee: &[Coin], required: &Coins) -> bool {
    required.to_vec().iter().any(|req| {
        fee.iter().any(|coin| coin.denom == req.denom && coin.amount >= req.amount)
    })
}

pub fn is_zero(funds: &[Coin]) -> bool {
    funds.iter().all(|coin| coin.amount.is_zero())
}

/// The fee owed for `gas` units at each of the given prices, `ceil(price * gas)` per denom.
/// Zero prices contribute nothing.
pub fn compute_required_fees(gas_prices: &[GasPrice], gas: u64) -> StdResult<Coins> {
    let gas = Decimal::from_ratio(gas, 1u128);
    let mut required = Coins::default();
    for gas_price in gas_prices {
        let amount = gas_price.amount.checked_mul(gas)?.to_uint_ceil();
        required.add(Coin::new(amount.u128(), &gas_price.denom))?;
    }
    Ok(required)
}
