use cosmwasm_std::{Coin, Decimal, StdResult, Storage};

use identity_fees::params::{DidFeeParams, FeeMarketParams, ResourceFeeParams};
use identity_fees::Tx;

use crate::error::FeeError;
use crate::helpers::compute_required_fees;
use crate::keepers::{DidKeeper, FeeMarketKeeper, GlobalFeeKeeper, ResourceKeeper};
use crate::state::*;

/// Serves the fee parameters out of the parameter store
pub struct StoreKeeper<'a> {
    storage: &'a dyn Storage,
}

impl<'a> StoreKeeper<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        StoreKeeper {
            storage,
        }
    }
}

impl<'a> DidKeeper for StoreKeeper<'a> {
    fn get_params(&self) -> StdResult<DidFeeParams> {
        DID_FEE_PARAMS.load(self.storage)
    }
}

impl<'a> ResourceKeeper for StoreKeeper<'a> {
    fn get_params(&self) -> StdResult<ResourceFeeParams> {
        RESOURCE_FEE_PARAMS.load(self.storage)
    }
}

impl<'a> GlobalFeeKeeper for StoreKeeper<'a> {
    fn is_bypass_message(&self, type_url: &str) -> StdResult<bool> {
        Ok(BYPASS_MESSAGES.contains(self.storage, type_url))
    }

    fn required_fees(&self, tx: &Tx) -> Result<Vec<Coin>, FeeError> {
        let fee = tx.fee.as_ref().ok_or_else(|| FeeError::tx_decode("Tx must be a FeeTx"))?;
        let gas_prices = GAS_PRICES.may_load(self.storage)?.unwrap_or_default();
        Ok(compute_required_fees(&gas_prices, fee.gas_limit)?.to_vec())
    }
}

impl<'a> FeeMarketKeeper for StoreKeeper<'a> {
    fn params(&self) -> StdResult<FeeMarketParams> {
        FEE_MARKET_PARAMS.load(self.storage)
    }

    /// The base gas price applies to the fee denom. Other denoms are priced at their global
    /// minimum gas price, if they have one.
    fn min_gas_price(&self, denom: &str) -> Result<Decimal, FeeError> {
        let params = self.params()?;
        if denom == params.fee_denom {
            return Ok(params.min_base_gas_price);
        }

        GAS_PRICES
            .may_load(self.storage)?
            .unwrap_or_default()
            .into_iter()
            .find(|gas_price| gas_price.denom == denom)
            .map(|gas_price| gas_price.amount)
            .ok_or_else(|| FeeError::NotSupported(format!("no gas price for denom {}", denom)))
    }
}
