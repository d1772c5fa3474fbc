use cosmwasm_std::{Addr, Event};

use identity_fees::GasPrice;

/// Per-transaction execution context handed from one decorator to the next.
///
/// A context is owned by a single transaction. Decorators consume it and hand back an updated
/// copy, so nothing set here can leak into the handling of another transaction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Context {
    pub block_height: u64,
    /// Setting this to true means the transaction is being checked for mempool admission
    pub is_check_tx: bool,
    pub is_recheck_tx: bool,
    /// The validator's local minimum gas prices. Only enforced during CheckTx.
    pub min_gas_prices: Vec<GasPrice>,
    pub gas_consumed: u64,
    pub priority: i64,
    /// Address of the current block proposer, who receives fee market tips
    pub proposer: Option<Addr>,
    /// Set once the transaction has been routed around the fee market
    pub fee_market_bypass: bool,
    pub events: Vec<Event>,
}

impl Context {
    pub fn new(block_height: u64) -> Self {
        Context {
            block_height,
            ..Default::default()
        }
    }

    pub fn with_check_tx(mut self, is_check_tx: bool) -> Self {
        self.is_check_tx = is_check_tx;
        self
    }

    pub fn with_recheck_tx(mut self, is_recheck_tx: bool) -> Self {
        self.is_recheck_tx = is_recheck_tx;
        self
    }

    pub fn with_min_gas_prices(mut self, min_gas_prices: Vec<GasPrice>) -> Self {
        self.min_gas_prices = min_gas_prices;
        self
    }

    pub fn with_gas_consumed(mut self, gas_consumed: u64) -> Self {
        self.gas_consumed = gas_consumed;
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_proposer(mut self, proposer: impl Into<String>) -> Self {
        self.proposer = Some(Addr::unchecked(proposer));
        self
    }

    pub fn with_fee_market_bypass(mut self, bypass: bool) -> Self {
        self.fee_market_bypass = bypass;
        self
    }

    /// Whether the transaction is going through mempool admission rather than block execution
    pub fn is_mempool_check(&self) -> bool {
        self.is_check_tx || self.is_recheck_tx
    }

    pub fn emit_event(&mut self, event: Event) {
        self.events.push(event);
    }
}
