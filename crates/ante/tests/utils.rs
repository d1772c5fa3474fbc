#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use cosmwasm_std::testing::MockStorage;
use cosmwasm_std::{Addr, Coin, Coins, Decimal, StdResult};

use identity_fees::msg::Msg;
use identity_fees::params::{DidFeeParams, GenesisState, ResourceFeeParams, DEFAULT_BURN_FACTOR};
use identity_fees::FeeRange;

use identity_fee_ante::error::FeeError;
use identity_fee_ante::execute;
use identity_fee_ante::helpers::{stringify_funds, to_coins};
use identity_fee_ante::keepers::*;
use identity_fee_ante::{DID_MODULE_NAME, FEE_COLLECTOR_NAME, ORACLE_MODULE_NAME};

/// A PNG header, enough for the content to sniff as `image/png`
pub const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00];

/// Return a parameter store initialized from the given genesis
pub fn setup_storage(genesis: GenesisState) -> MockStorage {
    let mut storage = MockStorage::new();
    execute::init(&mut storage, genesis).unwrap();
    storage
}

/// Bank with balances keyed by account address, or by module name for module accounts
#[derive(Default)]
pub struct MockBank {
    balances: RefCell<BTreeMap<String, Coins>>,
    pub burned: RefCell<Coins>,
}

impl MockBank {
    pub fn with_balance(self, owner: &str, funds: &[Coin]) -> Self {
        self.balances.borrow_mut().insert(owner.to_string(), to_coins(funds).unwrap());
        self
    }

    pub fn balance(&self, owner: &str) -> Vec<Coin> {
        self.balances.borrow().get(owner).map(|coins| coins.to_vec()).unwrap_or_default()
    }

    fn transfer(&self, from: &str, to: &str, amount: &[Coin]) -> Result<(), FeeError> {
        let mut balances = self.balances.borrow_mut();

        let mut from_balance = balances.get(from).cloned().unwrap_or_default();
        for coin in amount {
            from_balance.sub(coin.clone()).map_err(|_| {
                FeeError::insufficient_funds(format!(
                    "{} is smaller than {}",
                    from,
                    stringify_funds(amount)
                ))
            })?;
        }
        balances.insert(from.to_string(), from_balance);

        let to_balance = balances.entry(to.to_string()).or_default();
        for coin in amount {
            to_balance.add(coin.clone())?;
        }

        Ok(())
    }
}

impl BankKeeper for MockBank {
    fn send_coins(&self, from: &Addr, to: &Addr, amount: &[Coin]) -> Result<(), FeeError> {
        self.transfer(from.as_str(), to.as_str(), amount)
    }

    fn send_coins_from_account_to_module(
        &self,
        from: &Addr,
        module: &str,
        amount: &[Coin],
    ) -> Result<(), FeeError> {
        self.transfer(from.as_str(), module, amount)
    }

    fn send_coins_from_module_to_module(
        &self,
        from_module: &str,
        to_module: &str,
        amount: &[Coin],
    ) -> Result<(), FeeError> {
        self.transfer(from_module, to_module, amount)
    }

    fn burn_coins(&self, module: &str, amount: &[Coin]) -> Result<(), FeeError> {
        self.transfer(module, "burned", amount)?;
        let mut burned = self.burned.borrow_mut();
        for coin in amount {
            burned.add(coin.clone())?;
        }
        Ok(())
    }
}

pub struct MockAccounts {
    accounts: BTreeSet<Addr>,
    modules: BTreeMap<String, Addr>,
}

impl MockAccounts {
    /// Accounts with every module account the fee engine pays into
    pub fn new(accounts: &[&str]) -> Self {
        let modules = [DID_MODULE_NAME, ORACLE_MODULE_NAME, FEE_COLLECTOR_NAME]
            .into_iter()
            .map(|name| (name.to_string(), Addr::unchecked(format!("{}_module", name))))
            .collect();
        MockAccounts {
            accounts: accounts.iter().map(|addr| Addr::unchecked(*addr)).collect(),
            modules,
        }
    }

    pub fn without_module(mut self, name: &str) -> Self {
        self.modules.remove(name);
        self
    }
}

impl AccountKeeper for MockAccounts {
    fn module_address(&self, module: &str) -> Option<Addr> {
        self.modules.get(module).cloned()
    }

    fn has_account(&self, addr: &Addr) -> bool {
        self.accounts.contains(addr)
    }
}

/// Fee allowances keyed by (granter, grantee)
#[derive(Default)]
pub struct MockFeegrant {
    allowances: RefCell<BTreeMap<(String, String), Coins>>,
}

impl MockFeegrant {
    pub fn with_allowance(self, granter: &str, grantee: &str, funds: &[Coin]) -> Self {
        self.allowances
            .borrow_mut()
            .insert((granter.to_string(), grantee.to_string()), to_coins(funds).unwrap());
        self
    }
}

impl FeegrantKeeper for MockFeegrant {
    fn use_granted_fees(
        &self,
        granter: &Addr,
        grantee: &Addr,
        fee: &[Coin],
        _msgs: &[Msg],
    ) -> Result<(), FeeError> {
        let mut allowances = self.allowances.borrow_mut();
        let key = (granter.to_string(), grantee.to_string());
        let allowance = allowances
            .get_mut(&key)
            .ok_or_else(|| FeeError::InvalidRequest("fee-grant not found".to_string()))?;
        for coin in fee {
            allowance
                .sub(coin.clone())
                .map_err(|_| FeeError::InvalidRequest("fee limit exceeded".to_string()))?;
        }
        Ok(())
    }
}

pub struct MockOracle {
    pub price: Option<Decimal>,
}

impl MockOracle {
    pub fn new(price: Decimal) -> Self {
        MockOracle {
            price: Some(price),
        }
    }

    pub fn unavailable() -> Self {
        MockOracle {
            price: None,
        }
    }
}

impl OracleKeeper for MockOracle {
    fn get_ema(&self, _symbol: &str) -> Option<Decimal> {
        self.price
    }
}

/// Fee schedules of both modules, fixed for the lifetime of a test
#[derive(Default)]
pub struct MockParams {
    pub did: DidFeeParams,
    pub resource: ResourceFeeParams,
}

impl DidKeeper for MockParams {
    fn get_params(&self) -> StdResult<DidFeeParams> {
        Ok(self.did.clone())
    }
}

impl ResourceKeeper for MockParams {
    fn get_params(&self) -> StdResult<ResourceFeeParams> {
        Ok(self.resource.clone())
    }
}

/// DID fee schedule quoted only in the native denom, so that fees do not depend on the price
pub fn native_did_params() -> DidFeeParams {
    DidFeeParams {
        create_did: vec![FeeRange::native(50_000_000_000, Some(100_000_000_000))],
        update_did: vec![FeeRange::native(25_000_000_000, None)],
        deactivate_did: vec![FeeRange::native(10_000_000_000, Some(20_000_000_000))],
        burn_factor: DEFAULT_BURN_FACTOR,
    }
}

/// One message of each taxable kind, with resources of two media types
pub fn taxable_msgs() -> Vec<Msg> {
    vec![
        Msg::create_did_doc("did:cheqd:testnet:alice"),
        Msg::update_did_doc("did:cheqd:testnet:alice"),
        Msg::deactivate_did_doc("did:cheqd:testnet:alice"),
        Msg::create_resource(PNG_BYTES.to_vec()),
        Msg::create_resource(br#"{"name":"alice"}"#.to_vec()),
    ]
}

pub fn non_taxable_msgs() -> Vec<Msg> {
    vec![
        Msg::other("/cosmos.bank.v1beta1.MsgSend"),
        Msg::other("/cosmos.staking.v1beta1.MsgDelegate"),
        Msg::other("/cosmos.gov.v1.MsgVote"),
    ]
}
