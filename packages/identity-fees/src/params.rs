use cosmwasm_std::{Coin, Decimal, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    validate_fee_ranges, BurnFactorGroup, FeeRange, GasPrice, TaxableMsgCategory, NATIVE_DENOM,
};

/// Default burn factor of both modules, 50%
pub const DEFAULT_BURN_FACTOR: Decimal = Decimal::percent(50);

#[derive(Error, Debug, PartialEq)]
pub enum ParamsError {
    #[error("invalid denom in {name}[{index}]: got {denom}")]
    InvalidDenom {
        name: String,
        index: usize,
        denom: String,
    },

    #[error("min_amount must be positive in {name}[{index}]")]
    NonPositiveMin {
        name: String,
        index: usize,
    },

    #[error("max_amount must be >= min_amount in {name}[{index}]: got max={max}, min={min}")]
    MaxBelowMin {
        name: String,
        index: usize,
        min: Uint128,
        max: Uint128,
    },

    #[error("{name} fee must be a positive coin: {coin}")]
    InvalidCoin {
        name: String,
        coin: String,
    },

    #[error("burn factor must be positive and < 1: {0}")]
    InvalidBurnFactor(Decimal),

    #[error("no overlapping fee range found for {0}: ranges do not have common USD value range")]
    NoOverlap(String),

    #[error("invalid gas price: {0}")]
    InvalidGasPrice(String),
}

impl ParamsError {
    pub fn invalid_denom(name: impl Into<String>, index: usize, denom: impl Into<String>) -> Self {
        ParamsError::InvalidDenom {
            name: name.into(),
            index,
            denom: denom.into(),
        }
    }
}

/// Fee schedule of the DID module.
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct DidFeeParams {
    pub create_did: Vec<FeeRange>,
    pub update_did: Vec<FeeRange>,
    pub deactivate_did: Vec<FeeRange>,
    /// Fraction of every DID fee that is burned rather than paid out as rewards
    pub burn_factor: Decimal,
}

impl Default for DidFeeParams {
    fn default() -> Self {
        DidFeeParams {
            create_did: vec![
                FeeRange::native(50_000_000_000, Some(100_000_000_000)),
                FeeRange::usd(1_200_000_000_000_000_000, Some(2_000_000_000_000_000_000)),
            ],
            update_did: vec![FeeRange::native(25_000_000_000, None)],
            deactivate_did: vec![FeeRange::native(10_000_000_000, Some(20_000_000_000))],
            burn_factor: DEFAULT_BURN_FACTOR,
        }
    }
}

impl DidFeeParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        validate_fee_ranges("create_did", &self.create_did)?;
        validate_fee_ranges("update_did", &self.update_did)?;
        validate_fee_ranges("deactivate_did", &self.deactivate_did)?;
        validate_burn_factor(self.burn_factor)
    }

    /// Every category with its ranges, in a fixed order
    pub fn categories(&self) -> [(TaxableMsgCategory, &[FeeRange]); 3] {
        [
            (TaxableMsgCategory::CreateDidDoc, self.create_did.as_slice()),
            (TaxableMsgCategory::UpdateDidDoc, self.update_did.as_slice()),
            (TaxableMsgCategory::DeactivateDidDoc, self.deactivate_did.as_slice()),
        ]
    }
}

/// Fee schedule of the Resource module. Resources are priced by the media type of their content.
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct ResourceFeeParams {
    pub image: Vec<FeeRange>,
    pub json: Vec<FeeRange>,
    pub default: Vec<FeeRange>,
    pub burn_factor: Decimal,
}

impl Default for ResourceFeeParams {
    fn default() -> Self {
        ResourceFeeParams {
            image: vec![FeeRange::native(20_000_000_000, Some(30_000_000_000))],
            json: vec![FeeRange::native(3_500_000_000, Some(60_000_000_000))],
            default: vec![FeeRange::native(6_000_000_000, Some(20_000_000_000))],
            burn_factor: DEFAULT_BURN_FACTOR,
        }
    }
}

impl ResourceFeeParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        validate_fee_ranges("create_resource_image", &self.image)?;
        validate_fee_ranges("create_resource_json", &self.json)?;
        validate_fee_ranges("create_resource_default", &self.default)?;
        validate_burn_factor(self.burn_factor)
    }

    pub fn categories(&self) -> [(TaxableMsgCategory, &[FeeRange]); 3] {
        [
            (TaxableMsgCategory::CreateResourceImage, self.image.as_slice()),
            (TaxableMsgCategory::CreateResourceJson, self.json.as_slice()),
            (TaxableMsgCategory::CreateResourceDefault, self.default.as_slice()),
        ]
    }
}

/// The fixed-fee parameter format that predates fee ranges. Only read by the store migration.
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct LegacyDidFeeParams {
    pub create_did: Coin,
    pub update_did: Coin,
    pub deactivate_did: Coin,
    pub burn_factor: Decimal,
}

impl Default for LegacyDidFeeParams {
    fn default() -> Self {
        LegacyDidFeeParams {
            create_did: Coin::new(50_000_000_000, NATIVE_DENOM),
            update_did: Coin::new(25_000_000_000, NATIVE_DENOM),
            deactivate_did: Coin::new(10_000_000_000, NATIVE_DENOM),
            burn_factor: DEFAULT_BURN_FACTOR,
        }
    }
}

impl LegacyDidFeeParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        validate_coin("create_did", &self.create_did)?;
        validate_coin("update_did", &self.update_did)?;
        validate_coin("deactivate_did", &self.deactivate_did)?;
        validate_burn_factor(self.burn_factor)
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct LegacyResourceFeeParams {
    pub image: Coin,
    pub json: Coin,
    pub default: Coin,
    pub burn_factor: Decimal,
}

impl Default for LegacyResourceFeeParams {
    fn default() -> Self {
        LegacyResourceFeeParams {
            image: Coin::new(10_000_000_000, NATIVE_DENOM),
            json: Coin::new(2_500_000_000, NATIVE_DENOM),
            default: Coin::new(5_000_000_000, NATIVE_DENOM),
            burn_factor: DEFAULT_BURN_FACTOR,
        }
    }
}

impl LegacyResourceFeeParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        validate_coin("create_resource_image", &self.image)?;
        validate_coin("create_resource_json", &self.json)?;
        validate_coin("create_resource_default", &self.default)?;
        validate_burn_factor(self.burn_factor)
    }
}

fn validate_coin(name: &str, coin: &Coin) -> Result<(), ParamsError> {
    if coin.amount.is_zero() || coin.denom.is_empty() {
        return Err(ParamsError::InvalidCoin {
            name: name.to_string(),
            coin: coin.to_string(),
        });
    }
    Ok(())
}

pub fn validate_burn_factor(burn_factor: Decimal) -> Result<(), ParamsError> {
    if burn_factor.is_zero() || burn_factor >= Decimal::one() {
        return Err(ParamsError::InvalidBurnFactor(burn_factor));
    }
    Ok(())
}

/// A point-in-time copy of both fee schedules, threaded through a single fee computation.
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug, Default)]
pub struct FeeSnapshot {
    pub did: DidFeeParams,
    pub resource: ResourceFeeParams,
}

impl FeeSnapshot {
    pub fn ranges(&self, category: TaxableMsgCategory) -> &[FeeRange] {
        match category {
            TaxableMsgCategory::CreateDidDoc => &self.did.create_did,
            TaxableMsgCategory::UpdateDidDoc => &self.did.update_did,
            TaxableMsgCategory::DeactivateDidDoc => &self.did.deactivate_did,
            TaxableMsgCategory::CreateResourceDefault => &self.resource.default,
            TaxableMsgCategory::CreateResourceImage => &self.resource.image,
            TaxableMsgCategory::CreateResourceJson => &self.resource.json,
        }
    }

    pub fn burn_factor(&self, group: BurnFactorGroup) -> Decimal {
        match group {
            BurnFactorGroup::Did => self.did.burn_factor,
            BurnFactorGroup::Resource => self.resource.burn_factor,
        }
    }
}

/// Parameters of the gas-price fee market that prices non-taxable transactions
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct FeeMarketParams {
    /// Setting this to false makes the fee market accept any fee as-is
    pub enabled: bool,
    /// Denom the base gas price is quoted in
    pub fee_denom: String,
    /// Minimum price per unit of gas in `fee_denom`
    pub min_base_gas_price: Decimal,
}

impl Default for FeeMarketParams {
    fn default() -> Self {
        FeeMarketParams {
            enabled: true,
            fee_denom: NATIVE_DENOM.to_string(),
            min_base_gas_price: Decimal::from_ratio(5_000u128, 1u128),
        }
    }
}

impl FeeMarketParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.fee_denom.is_empty() {
            return Err(ParamsError::InvalidGasPrice("fee market denom is empty".to_string()));
        }
        Ok(())
    }
}

/// Gas prices must carry a denom, and each denom may appear only once
pub fn validate_gas_prices(gas_prices: &[GasPrice]) -> Result<(), ParamsError> {
    for (i, gas_price) in gas_prices.iter().enumerate() {
        if gas_price.denom.is_empty() {
            return Err(ParamsError::InvalidGasPrice(format!("empty denom at index {}", i)));
        }
        if gas_prices[..i].iter().any(|prev| prev.denom == gas_price.denom) {
            let reason = format!("duplicate denom {}", gas_price.denom);
            return Err(ParamsError::InvalidGasPrice(reason));
        }
    }
    Ok(())
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug, Default)]
pub struct GenesisState {
    pub did_fee_params: DidFeeParams,
    pub resource_fee_params: ResourceFeeParams,
    /// Type URLs of messages exempted from minimum gas price enforcement
    pub bypass_messages: Vec<String>,
    /// Global minimum gas prices, per denom
    pub gas_prices: Vec<GasPrice>,
    pub fee_market: FeeMarketParams,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum SudoMsg {
    /// Replace the DID fee schedule. Callable by L1 governance.
    SetDidFeeParams {
        params: DidFeeParams,
    },
    /// Replace the Resource fee schedule. Callable by L1 governance.
    SetResourceFeeParams {
        params: ResourceFeeParams,
    },
    /// Replace the set of message type URLs that bypass the fee market
    SetBypassMessages {
        type_urls: Vec<String>,
    },
    /// Replace the global minimum gas prices
    SetGasPrices {
        gas_prices: Vec<GasPrice>,
    },
    /// Replace the fee market parameters
    SetFeeMarketParams {
        params: FeeMarketParams,
    },
}
