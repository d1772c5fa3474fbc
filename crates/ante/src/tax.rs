use cosmwasm_std::{Addr, Coin, Coins, Decimal, Event};
use tracing::{debug, info};

use identity_fees::{Fee, Tx, NATIVE_DENOM, NATIVE_SYMBOL};

use crate::bypass::should_bypass_fee_market;
use crate::checker::FeeMarketChecker;
use crate::context::Context;
use crate::decorator::AnteDecorator;
use crate::deduct::{fee_event, resolve_fee_payer, DeductFeeDecorator};
use crate::distribution::{split_rewards_by_ratio, BURN_FEE_PORTION, REWARDS_FEE_PORTION};
use crate::error::FeeError;
use crate::filters::{
    convert_to_native, is_sufficient_custom_fee, is_taxable_tx, is_taxable_tx_lite,
    TaxableOutcome,
};
use crate::helpers::{add_coins, stringify_funds};
use crate::keepers::{
    AccountKeeper, BankKeeper, DidKeeper, FeeMarketKeeper, FeegrantKeeper, GlobalFeeKeeper,
    OracleKeeper, ResourceKeeper,
};
use crate::{DID_MODULE_NAME, FEE_COLLECTOR_NAME, ORACLE_MODULE_NAME};

/// Share of identity fee rewards paid to the oracle module, 0.5%
pub const ORACLE_SHARE_RATE: Decimal = Decimal::permille(5);

/// Charges taxable transactions their fixed identity fee once they have executed.
///
/// The fee is taken from the payer into the DID module account. From there the burn portion is
/// destroyed and the rewards portion is paid out, mostly to the fee collector with a small share
/// to the oracle module.
///
/// Identity transactions that cannot be priced, because the oracle has no price, skipped the fee
/// market in the ante handler. They pay the fee market price here instead.
pub struct TaxDecorator<'a> {
    pub accounts: &'a dyn AccountKeeper,
    pub bank: &'a dyn BankKeeper,
    pub feegrant: Option<&'a dyn FeegrantKeeper>,
    pub did: &'a dyn DidKeeper,
    pub resource: &'a dyn ResourceKeeper,
    pub oracle: &'a dyn OracleKeeper,
    pub global_fee: Option<&'a dyn GlobalFeeKeeper>,
    pub fee_market: Option<&'a dyn FeeMarketKeeper>,
}

impl<'a> TaxDecorator<'a> {
    fn handle_taxable(
        &self,
        ctx: &mut Context,
        tx: &Tx,
        fee: &Fee,
        outcome: &TaxableOutcome,
    ) -> Result<(), FeeError> {
        let price = self
            .oracle
            .get_ema(NATIVE_SYMBOL)
            .filter(|price| !price.is_zero())
            .ok_or_else(|| FeeError::PriceUnavailable(NATIVE_SYMBOL.to_string()))?;

        validate_tax(&fee.amount)?;

        let reward = convert_to_native(&outcome.reward, price)?;
        let burn = convert_to_native(&outcome.burn, price)?;
        let mut tax = reward;
        add_coins(&mut tax, &burn)?;

        let alloc = is_sufficient_custom_fee(ctx, &tax, &fee.amount, &burn, fee.gas_limit)?;

        let tax = tax.to_vec();
        let payer = resolve_fee_payer(self.accounts, self.feegrant, fee, &tax, &tx.msgs)?;
        self.deduct_tax(ctx, &payer, &tax)?;

        self.distribute_rewards(ctx, &alloc[REWARDS_FEE_PORTION])?;
        self.burn_fees(ctx, &alloc[BURN_FEE_PORTION])?;

        info!(
            payer = %payer,
            tax = %stringify_funds(&tax),
            burn = %stringify_funds(&alloc[BURN_FEE_PORTION].to_vec()),
            rewards = %stringify_funds(&alloc[REWARDS_FEE_PORTION].to_vec()),
            "charged identity fee"
        );

        Ok(())
    }

    fn charge_fee_market(&self, ctx: Context, tx: &Tx) -> Result<Context, FeeError> {
        let keeper = self.fee_market.ok_or_else(|| FeeError::missing_keeper("fee market"))?;
        debug!("identity fee cannot be priced, charging the fee market price");

        let checker = Box::new(FeeMarketChecker::new(keeper));
        DeductFeeDecorator::new(self.accounts, self.bank, self.feegrant, checker)
            .attempt(ctx, tx, false)
    }

    fn deduct_tax(&self, ctx: &mut Context, payer: &Addr, tax: &[Coin]) -> Result<(), FeeError> {
        if self.accounts.module_address(DID_MODULE_NAME).is_none() {
            return Err(FeeError::ModuleAccountNotSet(DID_MODULE_NAME.to_string()));
        }

        self.bank.send_coins_from_account_to_module(payer, DID_MODULE_NAME, tax).map_err(|err| {
            FeeError::insufficient_funds(format!("failed to deduct fees from {}: {}", payer, err))
        })?;

        ctx.emit_event(fee_event(tax, payer));
        Ok(())
    }

    fn distribute_rewards(&self, ctx: &mut Context, rewards: &Coins) -> Result<(), FeeError> {
        if rewards.is_empty() {
            return Ok(());
        }

        let (oracle_rewards, collector_rewards) =
            split_rewards_by_ratio(rewards, ORACLE_SHARE_RATE)?;
        let oracle_rewards = oracle_rewards.to_vec();
        let collector_rewards = collector_rewards.to_vec();

        if !oracle_rewards.is_empty() {
            self.bank.send_coins_from_module_to_module(
                DID_MODULE_NAME,
                ORACLE_MODULE_NAME,
                &oracle_rewards,
            )?;
        }
        if !collector_rewards.is_empty() {
            self.bank.send_coins_from_module_to_module(
                DID_MODULE_NAME,
                FEE_COLLECTOR_NAME,
                &collector_rewards,
            )?;
        }

        ctx.emit_event(
            Event::new("distribute_rewards")
                .add_attribute(ORACLE_MODULE_NAME, stringify_funds(&oracle_rewards))
                .add_attribute(FEE_COLLECTOR_NAME, stringify_funds(&collector_rewards)),
        );
        Ok(())
    }

    fn burn_fees(&self, ctx: &mut Context, burn: &Coins) -> Result<(), FeeError> {
        if burn.is_empty() {
            return Ok(());
        }

        let burn = burn.to_vec();
        self.bank.burn_coins(DID_MODULE_NAME, &burn)?;

        ctx.emit_event(
            Event::new("burn")
                .add_attribute("burner", DID_MODULE_NAME)
                .add_attribute("amount", stringify_funds(&burn)),
        );
        Ok(())
    }
}

/// Identity fees can only be paid in the native denom, and every fee coin must be positive
fn validate_tax(fee: &[Coin]) -> Result<(), FeeError> {
    if fee.iter().any(|coin| coin.denom != NATIVE_DENOM) {
        return Err(FeeError::InvalidCoins(format!("invalid denom: {}", stringify_funds(fee))));
    }
    if fee.is_empty() || fee.iter().any(|coin| coin.amount.is_zero()) {
        return Err(FeeError::InvalidCoins(format!("invalid tax: {}", stringify_funds(fee))));
    }
    Ok(())
}

impl<'a> AnteDecorator for TaxDecorator<'a> {
    fn attempt(&self, ctx: Context, tx: &Tx, simulate: bool) -> Result<Context, FeeError> {
        let fee = tx.fee.as_ref().ok_or_else(|| FeeError::tx_decode("Tx must be a FeeTx"))?;

        if simulate {
            return Ok(ctx);
        }

        let outcome = is_taxable_tx(self.did, self.resource, self.oracle, tx)?;

        if ctx.fee_market_bypass || should_bypass_fee_market(self.global_fee, tx) {
            debug!("fee market bypass, no identity fee charged");
            return Ok(ctx);
        }

        if !outcome.taxable {
            // the ante handler only lets identity txs past the fee market
            if is_taxable_tx_lite(tx) {
                return self.charge_fee_market(ctx, tx);
            }
            return Ok(ctx);
        }

        let mut ctx = ctx;
        self.handle_taxable(&mut ctx, tx, fee, &outcome)?;
        Ok(ctx)
    }
}
