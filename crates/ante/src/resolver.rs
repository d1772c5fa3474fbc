//! Pricing of taxable messages.
//!
//! A category's fee schedule may quote the same fee in several denominations. Every range is
//! converted to USD at the oracle price, the ranges are intersected, and the lower end of the
//! intersection is converted back into a single preferred denomination.

use cosmwasm_std::{Coin, Decimal, Uint128};

use identity_fees::{FeeRange, NATIVE_DENOM, NATIVE_SCALE, USD_DENOM};

/// USD amounts at or above this are 18-decimal fixed point; below it they are whole dollars
const USD_FIXED_POINT_THRESHOLD: u128 = 1_000_000;

/// Overlap minimums below this many dollars are scaled back up into 18-decimal fixed point
const USD_RESCALE_THRESHOLD: u128 = 100_000;

/// A fee interval in USD. A missing upper bound means the interval is unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UsdInterval {
    pub min: Decimal,
    pub max: Option<Decimal>,
}

/// Convert a native amount in its smallest unit to USD. Only whole tokens are priced.
fn native_to_usd(amount: Uint128, price: Decimal) -> Option<Decimal> {
    let whole = amount.u128() / NATIVE_SCALE;
    Decimal::checked_from_ratio(whole, 1u128).ok()?.checked_mul(price).ok()
}

fn usd_amount_to_decimal(amount: Uint128) -> Option<Decimal> {
    if amount.u128() < USD_FIXED_POINT_THRESHOLD {
        Decimal::checked_from_ratio(amount, 1u128).ok()
    } else {
        // 18-decimal fixed point is exactly the representation of Decimal
        Some(Decimal::new(amount))
    }
}

/// The USD interval a range covers at the given price, or None if its denom cannot be priced
pub fn to_usd_interval(range: &FeeRange, price: Decimal) -> Option<UsdInterval> {
    let convert = |amount: Uint128| match range.denom.as_str() {
        NATIVE_DENOM => native_to_usd(amount, price),
        USD_DENOM => usd_amount_to_decimal(amount),
        _ => None,
    };

    let min = convert(range.min_amount)?;
    let max = match range.max_amount {
        Some(max) => Some(convert(max)?),
        None => None,
    };

    Some(UsdInterval {
        min,
        max,
    })
}

/// The USD interval accepted by every convertible range, or None if there is no convertible
/// range or the ranges do not intersect.
pub fn fee_overlap(ranges: &[FeeRange], price: Decimal) -> Option<UsdInterval> {
    if ranges.is_empty() || price.is_zero() {
        return None;
    }

    let mut overlap: Option<UsdInterval> = None;
    for interval in ranges.iter().filter_map(|range| to_usd_interval(range, price)) {
        overlap = Some(match overlap {
            None => interval,
            Some(acc) => UsdInterval {
                min: acc.min.max(interval.min),
                max: match (acc.max, interval.max) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                },
            },
        });
    }

    let overlap = overlap?;
    match overlap.max {
        Some(max) if overlap.min > max => None,
        _ => Some(overlap),
    }
}

/// Convert a USD value back into an amount of `denom`
fn from_usd(value: Decimal, denom: &str, price: Decimal) -> Option<Uint128> {
    match denom {
        NATIVE_DENOM => {
            let tokens = value.checked_div(price).ok()?;
            let scale = Decimal::checked_from_ratio(NATIVE_SCALE, 1u128).ok()?;
            Some(tokens.checked_mul(scale).ok()?.to_uint_floor())
        },
        USD_DENOM => {
            if value < Decimal::from_ratio(USD_RESCALE_THRESHOLD, 1u128) {
                // 18 decimal places, so the atomics are the fixed-point amount
                Some(value.atomics())
            } else {
                Some(value.to_uint_floor())
            }
        },
        _ => None,
    }
}

/// The fee a taxable message must pay under the given schedule at the given oracle price.
///
/// Returns None when the schedule is empty, the price is zero, no range can be priced, or the
/// ranges have no USD value in common. The result is denominated in USD if the schedule has a
/// USD range, otherwise in the denom of the first convertible range, and always lies within
/// that range's bounds.
pub fn get_fee_for_msg(ranges: &[FeeRange], price: Decimal) -> Option<Coin> {
    let overlap = fee_overlap(ranges, price)?;

    let mut convertible = ranges.iter().filter(|range| to_usd_interval(range, price).is_some());
    let chosen = match ranges.iter().find(|range| range.denom == USD_DENOM) {
        Some(range) => range,
        None => convertible.next()?,
    };

    let amount = from_usd(overlap.min, &chosen.denom, price)?;

    Some(Coin {
        denom: chosen.denom.clone(),
        amount: chosen.clamp(amount),
    })
}
