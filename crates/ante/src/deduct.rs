use cosmwasm_std::{Addr, Coin, Event};
use tracing::info;

use identity_fees::msg::Msg;
use identity_fees::{Fee, Tx};

use crate::checker::{CheckedFee, TxFeeChecker};
use crate::context::Context;
use crate::decorator::AnteDecorator;
use crate::error::FeeError;
use crate::helpers::{is_zero, stringify_funds, to_coins};
use crate::keepers::{AccountKeeper, BankKeeper, FeegrantKeeper};
use crate::FEE_COLLECTOR_NAME;

/// The account a fee is taken from: the fee granter if one is set, otherwise the payer.
///
/// A granter other than the payer must have granted the payer an allowance covering `amount`,
/// which is spent here.
pub fn resolve_fee_payer(
    accounts: &dyn AccountKeeper,
    feegrant: Option<&dyn FeegrantKeeper>,
    fee: &Fee,
    amount: &[Coin],
    msgs: &[Msg],
) -> Result<Addr, FeeError> {
    let mut deduct_from = fee.payer.clone();

    if let Some(granter) = &fee.granter {
        let feegrant = feegrant
            .ok_or_else(|| FeeError::InvalidRequest("fee grants are not enabled".to_string()))?;

        if granter != &fee.payer {
            feegrant.use_granted_fees(granter, &fee.payer, amount, msgs).map_err(|err| {
                FeeError::InvalidRequest(format!(
                    "{} does not allow to pay fees for {}: {}",
                    granter, fee.payer, err
                ))
            })?;
        }

        deduct_from = granter.clone();
    }

    if !accounts.has_account(&deduct_from) {
        return Err(FeeError::UnknownAddress(format!(
            "fee payer address: {} does not exist",
            deduct_from
        )));
    }

    Ok(deduct_from)
}

/// The SDK-style `tx` event recording who paid which fee
pub fn fee_event(fee: &[Coin], payer: &Addr) -> Event {
    Event::new("tx")
        .add_attribute("fee", stringify_funds(fee))
        .add_attribute("fee_payer", payer)
}

/// Every coin must be positive and appear once
fn validate_fee_coins(fee: &[Coin]) -> Result<(), FeeError> {
    for (i, coin) in fee.iter().enumerate() {
        if coin.amount.is_zero() || fee[..i].iter().any(|prev| prev.denom == coin.denom) {
            return Err(FeeError::insufficient_fee(fee, &[]));
        }
    }
    Ok(())
}

/// Runs a fee checker over a non-taxable transaction, then takes the accepted fee from the payer
/// into the fee collector and sets the transaction's priority.
pub struct DeductFeeDecorator<'a> {
    accounts: &'a dyn AccountKeeper,
    bank: &'a dyn BankKeeper,
    feegrant: Option<&'a dyn FeegrantKeeper>,
    checker: Box<dyn TxFeeChecker + 'a>,
}

impl<'a> DeductFeeDecorator<'a> {
    pub fn new(
        accounts: &'a dyn AccountKeeper,
        bank: &'a dyn BankKeeper,
        feegrant: Option<&'a dyn FeegrantKeeper>,
        checker: Box<dyn TxFeeChecker + 'a>,
    ) -> Self {
        DeductFeeDecorator {
            accounts,
            bank,
            feegrant,
            checker,
        }
    }

    fn deduct(
        &self,
        ctx: &mut Context,
        tx: &Tx,
        fee: &Fee,
        checked: &CheckedFee,
    ) -> Result<(), FeeError> {
        if self.accounts.module_address(FEE_COLLECTOR_NAME).is_none() {
            return Err(FeeError::ModuleAccountNotSet(FEE_COLLECTOR_NAME.to_string()));
        }
        if !is_zero(&checked.fee) {
            validate_fee_coins(&checked.fee)?;
        }
        validate_fee_coins(&checked.tip)?;

        let total = to_coins(checked.fee.iter().chain(&checked.tip))?.to_vec();
        let payer = resolve_fee_payer(self.accounts, self.feegrant, fee, &total, &tx.msgs)?;

        // without a proposer to pay it to, the tip goes to the fee collector with the fee
        let tip_payee = ctx.proposer.clone().filter(|_| !checked.tip.is_empty());
        let amount = match tip_payee {
            Some(_) => checked.fee.clone(),
            None => total,
        };

        if !is_zero(&amount) {
            self.bank
                .send_coins_from_account_to_module(&payer, FEE_COLLECTOR_NAME, &amount)
                .map_err(|err| FeeError::insufficient_funds(err.to_string()))?;
        }
        ctx.emit_event(fee_event(&amount, &payer));

        if let Some(proposer) = tip_payee {
            self.bank
                .send_coins(&payer, &proposer, &checked.tip)
                .map_err(|err| FeeError::insufficient_funds(err.to_string()))?;
            ctx.emit_event(
                Event::new("tip_pay")
                    .add_attribute("tip", stringify_funds(&checked.tip))
                    .add_attribute("tip_payee", proposer),
            );
        }

        info!(
            payer = %payer,
            fee = %stringify_funds(&amount),
            priority = checked.priority,
            "deducted tx fee"
        );

        Ok(())
    }
}

impl<'a> AnteDecorator for DeductFeeDecorator<'a> {
    fn attempt(&self, ctx: Context, tx: &Tx, simulate: bool) -> Result<Context, FeeError> {
        let fee = tx.fee.as_ref().ok_or_else(|| FeeError::tx_decode("Tx must be a FeeTx"))?;

        if !simulate && ctx.block_height > 0 && fee.gas_limit == 0 {
            return Err(FeeError::InvalidGasLimit);
        }

        // fees are not checked while simulating, only deducted
        let checked = if simulate {
            CheckedFee::new(fee.amount.clone(), 0)
        } else {
            self.checker.check(&ctx, tx)?
        };

        let mut ctx = ctx;
        self.deduct(&mut ctx, tx, fee, &checked)?;

        Ok(ctx.with_priority(checked.priority))
    }
}
