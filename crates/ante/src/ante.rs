use crate::bypass::FeeMarketBypassDecorator;
use crate::checker::{FeeMarketChecker, GlobalFeeChecker, TxFeeChecker};
use crate::decorator::{AnteChain, AnteDecorator, OverAllDecorator};
use crate::deduct::DeductFeeDecorator;
use crate::error::FeeError;
use crate::keepers::*;
use crate::tax::TaxDecorator;

/// The collaborators needed to build the ante and post handlers
#[derive(Default)]
pub struct HandlerOptions<'a> {
    pub account_keeper: Option<&'a dyn AccountKeeper>,
    pub bank_keeper: Option<&'a dyn BankKeeper>,
    pub feegrant_keeper: Option<&'a dyn FeegrantKeeper>,
    pub did_keeper: Option<&'a dyn DidKeeper>,
    pub resource_keeper: Option<&'a dyn ResourceKeeper>,
    pub oracle_keeper: Option<&'a dyn OracleKeeper>,
    pub global_fee_keeper: Option<&'a dyn GlobalFeeKeeper>,
    pub fee_market_keeper: Option<&'a dyn FeeMarketKeeper>,
    /// Checker for transactions that bypass the fee market. Defaults to enforcing the global
    /// minimum gas prices.
    pub tx_fee_checker: Option<Box<dyn TxFeeChecker + 'a>>,
}

fn required<'k, T: ?Sized>(keeper: Option<&'k T>, name: &str) -> Result<&'k T, FeeError> {
    keeper.ok_or_else(|| FeeError::missing_keeper(name))
}

/// The fee decorators wrapped by the OverAllDecorator: fee market pricing, or the global fee
/// checker for transactions that bypass the fee market
fn fee_decorators<'a>(
    options: HandlerOptions<'a>,
) -> Result<Vec<Box<dyn AnteDecorator + 'a>>, FeeError> {
    let accounts = required(options.account_keeper, "account")?;
    let bank = required(options.bank_keeper, "bank")?;
    let fee_market = required(options.fee_market_keeper, "fee market")?;

    let fallback_checker: Box<dyn TxFeeChecker + 'a> = match options.tx_fee_checker {
        Some(checker) => checker,
        None => Box::new(GlobalFeeChecker::new(required(options.global_fee_keeper, "global fee")?)),
    };

    let bypass = FeeMarketBypassDecorator::new(
        options.global_fee_keeper,
        DeductFeeDecorator::new(
            accounts,
            bank,
            options.feegrant_keeper,
            Box::new(FeeMarketChecker::new(fee_market)),
        ),
        DeductFeeDecorator::new(accounts, bank, options.feegrant_keeper, fallback_checker),
    );

    let decorators: Vec<Box<dyn AnteDecorator + 'a>> = vec![Box::new(bypass)];
    Ok(decorators)
}

/// Build the ante handler: every transaction passes the OverAllDecorator, which sends
/// non-taxable transactions through fee market pricing and lets taxable ones through to be
/// charged by the post handler.
pub fn new_ante_handler<'a>(options: HandlerOptions<'a>) -> Result<AnteChain<'a>, FeeError> {
    let decorators = fee_decorators(options)?;
    Ok(AnteChain::default().push(OverAllDecorator::new(decorators)))
}

/// Build the post handler, which charges taxable transactions their identity fee. Identity
/// transactions left unpriced by the oracle are charged through the fee market keeper.
pub fn new_post_handler<'a>(options: &HandlerOptions<'a>) -> Result<AnteChain<'a>, FeeError> {
    let tax = TaxDecorator {
        accounts: required(options.account_keeper, "account")?,
        bank: required(options.bank_keeper, "bank")?,
        feegrant: options.feegrant_keeper,
        did: required(options.did_keeper, "did")?,
        resource: required(options.resource_keeper, "resource")?,
        oracle: required(options.oracle_keeper, "oracle")?,
        global_fee: options.global_fee_keeper,
        fee_market: options.fee_market_keeper,
    };
    Ok(AnteChain::default().push(tax))
}
