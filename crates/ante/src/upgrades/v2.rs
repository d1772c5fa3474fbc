use cosmwasm_std::{Coin, Response, StdError, Storage, Uint128};
use cw_storage_plus::Item;

use identity_fees::params::{
    DidFeeParams, LegacyDidFeeParams, LegacyResourceFeeParams, ResourceFeeParams,
};
use identity_fees::FeeRange;

use crate::error::FeeError;
use crate::state::{DID_FEE_PARAMS, RESOURCE_FEE_PARAMS};
use crate::{CONTRACT_NAME, CONTRACT_VERSION};

// v1 stored a single fixed coin per category under the same keys
const LEGACY_DID_FEE_PARAMS: Item<LegacyDidFeeParams> = Item::new("did_fee_params");
const LEGACY_RESOURCE_FEE_PARAMS: Item<LegacyResourceFeeParams> = Item::new("resource_fee_params");

/// Fixed USD prices of each category, 18-decimal fixed point
pub const CREATE_DID_USD: u128 = 693_214_640_118_502_600;
pub const UPDATE_DID_USD: u128 = 346_607_320_059_251_300;
pub const DEACTIVATE_DID_USD: u128 = 138_642_928_023_700_520;
pub const RESOURCE_IMAGE_USD: u128 = 280_000_000_000_000_000;
pub const RESOURCE_JSON_USD: u128 = 49_000_000_000_000_000;
pub const RESOURCE_DEFAULT_USD: u128 = 84_000_000_000_000_000;

/// A legacy fixed fee becomes a native range from the old fee up to twice it, next to a fixed USD
/// price
fn to_ranges(legacy: &Coin, usd: u128) -> Vec<FeeRange> {
    vec![
        FeeRange {
            denom: legacy.denom.clone(),
            min_amount: legacy.amount,
            max_amount: Some(legacy.amount * Uint128::new(2)),
        },
        FeeRange::usd(usd, Some(usd)),
    ]
}

pub fn migrate(storage: &mut dyn Storage) -> Result<Response, FeeError> {
    let version = cw2::get_contract_version(storage)?;
    if !version.version.starts_with("1.") {
        return Err(StdError::generic_err(format!(
            "cannot migrate from version {}, expected 1.x",
            version.version
        ))
        .into());
    }

    migrate_did_fee_params(storage)?;
    migrate_resource_fee_params(storage)?;

    cw2::set_contract_version(storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "identity-fees/migrate")
        .add_attribute("from_version", version.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}

fn migrate_did_fee_params(storage: &mut dyn Storage) -> Result<(), FeeError> {
    let legacy = LEGACY_DID_FEE_PARAMS.load(storage)?;
    legacy.validate()?;

    let params = DidFeeParams {
        create_did: to_ranges(&legacy.create_did, CREATE_DID_USD),
        update_did: to_ranges(&legacy.update_did, UPDATE_DID_USD),
        deactivate_did: to_ranges(&legacy.deactivate_did, DEACTIVATE_DID_USD),
        burn_factor: legacy.burn_factor,
    };
    params.validate()?;

    DID_FEE_PARAMS.save(storage, &params)?;
    Ok(())
}

fn migrate_resource_fee_params(storage: &mut dyn Storage) -> Result<(), FeeError> {
    let legacy = LEGACY_RESOURCE_FEE_PARAMS.load(storage)?;
    legacy.validate()?;

    let params = ResourceFeeParams {
        image: to_ranges(&legacy.image, RESOURCE_IMAGE_USD),
        json: to_ranges(&legacy.json, RESOURCE_JSON_USD),
        default: to_ranges(&legacy.default, RESOURCE_DEFAULT_USD),
        burn_factor: legacy.burn_factor,
    };
    params.validate()?;

    RESOURCE_FEE_PARAMS.save(storage, &params)?;
    Ok(())
}
