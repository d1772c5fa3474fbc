use tracing::debug;

use identity_fees::msg::Msg;
use identity_fees::Tx;

use crate::context::Context;
use crate::decorator::AnteDecorator;
use crate::error::FeeError;
use crate::keepers::GlobalFeeKeeper;

/// Protocol messages that skip the fee market whatever the configured bypass set says
pub fn is_default_fee_market_bypass_msg(msg: &Msg) -> bool {
    matches!(msg, Msg::Acknowledgement { .. })
}

/// A transaction bypasses the fee market only if it has messages and every one of them is either
/// a default bypass message or configured as one. Lookup failures count as not configured.
pub fn should_bypass_fee_market(keeper: Option<&dyn GlobalFeeKeeper>, tx: &Tx) -> bool {
    if tx.msgs.is_empty() {
        return false;
    }

    tx.msgs.iter().all(|msg| {
        if is_default_fee_market_bypass_msg(msg) {
            return true;
        }
        match keeper {
            Some(keeper) => keeper.is_bypass_message(msg.type_url()).unwrap_or(false),
            None => false,
        }
    })
}

/// Sends bypass transactions through `fallback` and everything else through `fee_market`
pub struct FeeMarketBypassDecorator<'a> {
    global_fee: Option<&'a dyn GlobalFeeKeeper>,
    fee_market: Box<dyn AnteDecorator + 'a>,
    fallback: Box<dyn AnteDecorator + 'a>,
}

impl<'a> FeeMarketBypassDecorator<'a> {
    pub fn new(
        global_fee: Option<&'a dyn GlobalFeeKeeper>,
        fee_market: impl AnteDecorator + 'a,
        fallback: impl AnteDecorator + 'a,
    ) -> Self {
        FeeMarketBypassDecorator {
            global_fee,
            fee_market: Box::new(fee_market),
            fallback: Box::new(fallback),
        }
    }
}

impl<'a> AnteDecorator for FeeMarketBypassDecorator<'a> {
    fn attempt(&self, ctx: Context, tx: &Tx, simulate: bool) -> Result<Context, FeeError> {
        if should_bypass_fee_market(self.global_fee, tx) {
            debug!(msgs = tx.msgs.len(), "bypassing fee market");
            return self.fallback.attempt(ctx.with_fee_market_bypass(true), tx, simulate);
        }

        self.fee_market.attempt(ctx, tx, simulate)
    }
}
