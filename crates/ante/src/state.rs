use cw_item_set::Set;
use cw_storage_plus::Item;

use identity_fees::params::{DidFeeParams, FeeMarketParams, ResourceFeeParams};
use identity_fees::GasPrice;

/// Fee schedule and burn factor of the DID module
pub const DID_FEE_PARAMS: Item<DidFeeParams> = Item::new("did_fee_params");

/// Fee schedule and burn factor of the Resource module
pub const RESOURCE_FEE_PARAMS: Item<ResourceFeeParams> = Item::new("resource_fee_params");

/// Global minimum gas prices, enforced on non-taxable transactions during CheckTx
pub const GAS_PRICES: Item<Vec<GasPrice>> = Item::new("gas_prices");

pub const FEE_MARKET_PARAMS: Item<FeeMarketParams> = Item::new("fee_market_params");

/// Type URLs of messages that are exempted from the fee market. A transaction made up of only
/// these messages may be submitted without a fee.
pub const BYPASS_MESSAGES: Set<&str> = Set::new("bypass_messages");
