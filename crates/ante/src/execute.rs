use cosmwasm_std::{Decimal, Order, Response, StdResult, Storage};

use identity_fees::params::{
    validate_gas_prices, DidFeeParams, FeeMarketParams, GenesisState, ParamsError,
    ResourceFeeParams, SudoMsg,
};
use identity_fees::{FeeRange, GasPrice, TaxableMsgCategory, NATIVE_SYMBOL};

use crate::error::FeeError;
use crate::keepers::OracleKeeper;
use crate::resolver::fee_overlap;
use crate::state::*;
use crate::{CONTRACT_NAME, CONTRACT_VERSION};

pub fn init(storage: &mut dyn Storage, genesis: GenesisState) -> Result<Response, FeeError> {
    genesis.did_fee_params.validate()?;
    genesis.resource_fee_params.validate()?;
    genesis.fee_market.validate()?;
    validate_gas_prices(&genesis.gas_prices)?;

    cw2::set_contract_version(storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    DID_FEE_PARAMS.save(storage, &genesis.did_fee_params)?;
    RESOURCE_FEE_PARAMS.save(storage, &genesis.resource_fee_params)?;
    GAS_PRICES.save(storage, &genesis.gas_prices)?;
    FEE_MARKET_PARAMS.save(storage, &genesis.fee_market)?;

    for type_url in &genesis.bypass_messages {
        BYPASS_MESSAGES.insert(storage, type_url)?;
    }

    Ok(Response::new()
        .add_attribute("action", "identity-fees/init")
        .add_attribute("bypass_messages", genesis.bypass_messages.len().to_string()))
}

pub fn sudo(
    storage: &mut dyn Storage,
    oracle: Option<&dyn OracleKeeper>,
    msg: SudoMsg,
) -> Result<Response, FeeError> {
    match msg {
        SudoMsg::SetDidFeeParams {
            params,
        } => set_did_fee_params(storage, oracle, params),
        SudoMsg::SetResourceFeeParams {
            params,
        } => set_resource_fee_params(storage, oracle, params),
        SudoMsg::SetBypassMessages {
            type_urls,
        } => set_bypass_messages(storage, type_urls),
        SudoMsg::SetGasPrices {
            gas_prices,
        } => set_gas_prices(storage, gas_prices),
        SudoMsg::SetFeeMarketParams {
            params,
        } => set_fee_market_params(storage, params),
    }
}

/// Every category quoting its fee in more than one denom must have a USD value all of its ranges
/// accept at the current price. Without a price there is nothing to check against.
pub fn validate_overlaps(
    categories: &[(TaxableMsgCategory, &[FeeRange])],
    price: Option<Decimal>,
) -> Result<(), ParamsError> {
    let price = match price {
        Some(price) if !price.is_zero() => price,
        _ => return Ok(()),
    };

    for (category, ranges) in categories {
        if ranges.len() > 1 && fee_overlap(ranges, price).is_none() {
            return Err(ParamsError::NoOverlap(category.to_string()));
        }
    }

    Ok(())
}

fn oracle_price(oracle: Option<&dyn OracleKeeper>) -> Option<Decimal> {
    oracle.and_then(|oracle| oracle.get_ema(NATIVE_SYMBOL))
}

pub fn set_did_fee_params(
    storage: &mut dyn Storage,
    oracle: Option<&dyn OracleKeeper>,
    params: DidFeeParams,
) -> Result<Response, FeeError> {
    params.validate()?;
    validate_overlaps(&params.categories(), oracle_price(oracle))?;

    DID_FEE_PARAMS.save(storage, &params)?;

    Ok(Response::new()
        .add_attribute("action", "identity-fees/set_did_fee_params")
        .add_attribute("burn_factor", params.burn_factor.to_string()))
}

pub fn set_resource_fee_params(
    storage: &mut dyn Storage,
    oracle: Option<&dyn OracleKeeper>,
    params: ResourceFeeParams,
) -> Result<Response, FeeError> {
    params.validate()?;
    validate_overlaps(&params.categories(), oracle_price(oracle))?;

    RESOURCE_FEE_PARAMS.save(storage, &params)?;

    Ok(Response::new()
        .add_attribute("action", "identity-fees/set_resource_fee_params")
        .add_attribute("burn_factor", params.burn_factor.to_string()))
}

pub fn set_bypass_messages(
    storage: &mut dyn Storage,
    type_urls: Vec<String>,
) -> Result<Response, FeeError> {
    // need to collect the current set into a Vec first before removing from it
    let current = BYPASS_MESSAGES
        .items(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    for type_url in &current {
        BYPASS_MESSAGES.remove(storage, type_url)?;
    }

    for type_url in &type_urls {
        BYPASS_MESSAGES.insert(storage, type_url)?;
    }

    Ok(Response::new()
        .add_attribute("action", "identity-fees/set_bypass_messages")
        .add_attribute("removed", current.len().to_string())
        .add_attribute("type_urls", type_urls.join(",")))
}

pub fn set_gas_prices(
    storage: &mut dyn Storage,
    gas_prices: Vec<GasPrice>,
) -> Result<Response, FeeError> {
    validate_gas_prices(&gas_prices)?;

    GAS_PRICES.save(storage, &gas_prices)?;

    let prices = gas_prices
        .iter()
        .map(|gas_price| format!("{}{}", gas_price.amount, gas_price.denom))
        .collect::<Vec<_>>()
        .join(",");

    Ok(Response::new()
        .add_attribute("action", "identity-fees/set_gas_prices")
        .add_attribute("gas_prices", prices))
}

pub fn set_fee_market_params(
    storage: &mut dyn Storage,
    params: FeeMarketParams,
) -> Result<Response, FeeError> {
    params.validate()?;

    FEE_MARKET_PARAMS.save(storage, &params)?;

    Ok(Response::new()
        .add_attribute("action", "identity-fees/set_fee_market_params")
        .add_attribute("enabled", params.enabled.to_string())
        .add_attribute("fee_denom", params.fee_denom)
        .add_attribute("min_base_gas_price", params.min_base_gas_price.to_string()))
}
