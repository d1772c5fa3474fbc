use tracing::debug;

use identity_fees::Tx;

use crate::context::Context;
use crate::error::FeeError;
use crate::filters::is_taxable_tx_lite;

/// Priority given to taxable transactions, which pay a fixed fee rather than bidding for space
pub const TAXABLE_TX_PRIORITY: i64 = 0;

/// One step of transaction admission.
///
/// A decorator inspects the transaction, possibly charges for it, and hands back the context the
/// next decorator should see. Returning an error rejects the transaction and stops the chain.
pub trait AnteDecorator {
    fn attempt(&self, ctx: Context, tx: &Tx, simulate: bool) -> Result<Context, FeeError>;
}

/// Decorators run in a fixed order, each receiving the context produced by the previous one
#[derive(Default)]
pub struct AnteChain<'a> {
    decorators: Vec<Box<dyn AnteDecorator + 'a>>,
}

impl<'a> AnteChain<'a> {
    pub fn new(decorators: Vec<Box<dyn AnteDecorator + 'a>>) -> Self {
        AnteChain {
            decorators,
        }
    }

    /// Append a decorator to the end of the chain
    pub fn push(mut self, decorator: impl AnteDecorator + 'a) -> Self {
        self.decorators.push(Box::new(decorator));
        self
    }

    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    pub fn run(&self, ctx: Context, tx: &Tx, simulate: bool) -> Result<Context, FeeError> {
        self.decorators.iter().try_fold(ctx, |ctx, decorator| decorator.attempt(ctx, tx, simulate))
    }
}

impl<'a> AnteDecorator for AnteChain<'a> {
    fn attempt(&self, ctx: Context, tx: &Tx, simulate: bool) -> Result<Context, FeeError> {
        self.run(ctx, tx, simulate)
    }
}

/// Chooses between the two pricing regimes of a transaction.
///
/// Taxable transactions pay a fixed fee that is charged after execution, so the wrapped fee
/// market decorators are skipped for them entirely. Every other transaction goes through the
/// wrapped decorators.
pub struct OverAllDecorator<'a> {
    inner: AnteChain<'a>,
}

impl<'a> OverAllDecorator<'a> {
    pub fn new(decorators: Vec<Box<dyn AnteDecorator + 'a>>) -> Self {
        OverAllDecorator {
            inner: AnteChain::new(decorators),
        }
    }
}

impl<'a> AnteDecorator for OverAllDecorator<'a> {
    fn attempt(&self, ctx: Context, tx: &Tx, simulate: bool) -> Result<Context, FeeError> {
        let fee = tx.fee.as_ref().ok_or_else(|| FeeError::tx_decode("Tx must be a FeeTx"))?;

        if !simulate && ctx.block_height > 0 && fee.gas_limit == 0 {
            return Err(FeeError::InvalidGasLimit);
        }

        if is_taxable_tx_lite(tx) {
            debug!(msgs = tx.msgs.len(), simulate, "taxable tx, skipping fee market decorators");
            return Ok(ctx.with_priority(TAXABLE_TX_PRIORITY));
        }

        debug!(msgs = tx.msgs.len(), simulate, "running fee market decorators");
        self.inner.run(ctx, tx, simulate)
    }
}
