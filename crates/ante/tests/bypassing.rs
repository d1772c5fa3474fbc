use cosmwasm_std::coin;
use proptest::prelude::*;

use identity_fees::msg::{Msg, ACKNOWLEDGEMENT_TYPE_URL};
use identity_fees::params::GenesisState;
use identity_fees::Tx;

use identity_fee_ante::bypass::*;
use identity_fee_ante::context::Context;
use identity_fee_ante::decorator::AnteDecorator;
use identity_fee_ante::error::FeeError;
use identity_fee_ante::keeper::StoreKeeper;
use identity_fee_ante::keepers::GlobalFeeKeeper;

mod utils;

const MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";
const MSG_RECV_PACKET: &str = "/ibc.core.channel.v1.MsgRecvPacket";
const MSG_UPDATE_CLIENT: &str = "/ibc.core.client.v1.MsgUpdateClient";

/// Marks the context with a fixed priority, so tests can tell which path a tx was routed down
struct Marker(i64);

impl AnteDecorator for Marker {
    fn attempt(&self, ctx: Context, _tx: &Tx, _simulate: bool) -> Result<Context, FeeError> {
        Ok(ctx.with_priority(self.0))
    }
}

fn ack() -> Msg {
    Msg::Acknowledgement {
        channel_id: "channel-0".to_string(),
        sequence: 7,
        signer: "relayer".to_string(),
    }
}

fn mock_tx(msgs: Vec<Msg>) -> Tx {
    Tx::new(msgs, vec![coin(10_000, "ncheq")], 200_000, "relayer")
}

fn setup_genesis() -> GenesisState {
    GenesisState {
        bypass_messages: vec![MSG_RECV_PACKET.to_string(), MSG_UPDATE_CLIENT.to_string()],
        ..Default::default()
    }
}

#[test]
fn bypassing_default_msgs() {
    assert!(is_default_fee_market_bypass_msg(&ack()));
    assert!(!is_default_fee_market_bypass_msg(&Msg::other(ACKNOWLEDGEMENT_TYPE_URL)));
    assert!(!is_default_fee_market_bypass_msg(&Msg::other(MSG_SEND)));

    // without a global fee keeper only the default exemptions apply
    assert!(should_bypass_fee_market(None, &mock_tx(vec![ack(), ack()])));
    assert!(!should_bypass_fee_market(None, &mock_tx(vec![ack(), Msg::other(MSG_RECV_PACKET)])));
}

#[test]
fn bypassing_configured_msgs() {
    let storage = utils::setup_storage(setup_genesis());
    let keeper = StoreKeeper::new(&storage);
    let keeper: Option<&dyn GlobalFeeKeeper> = Some(&keeper);

    let tx = mock_tx(vec![Msg::other(MSG_UPDATE_CLIENT), Msg::other(MSG_RECV_PACKET), ack()]);
    assert!(should_bypass_fee_market(keeper, &tx));

    // a single ordinary message disqualifies the whole tx
    let tx = mock_tx(vec![Msg::other(MSG_UPDATE_CLIENT), Msg::other(MSG_SEND)]);
    assert!(!should_bypass_fee_market(keeper, &tx));

    let tx = mock_tx(vec![Msg::create_did_doc("did:cheqd:testnet:alice"), ack()]);
    assert!(!should_bypass_fee_market(keeper, &tx));
}

#[test]
fn bypassing_empty_tx() {
    let storage = utils::setup_storage(setup_genesis());
    let keeper = StoreKeeper::new(&storage);

    assert!(!should_bypass_fee_market(Some(&keeper), &mock_tx(vec![])));
    assert!(!should_bypass_fee_market(None, &mock_tx(vec![])));
}

#[test]
fn routing_bypass_txs() {
    let storage = utils::setup_storage(setup_genesis());
    let keeper = StoreKeeper::new(&storage);
    let decorator = FeeMarketBypassDecorator::new(Some(&keeper), Marker(1), Marker(2));

    let send = mock_tx(vec![Msg::other(MSG_SEND)]);
    let ctx = decorator.attempt(Context::new(10), &send, false).unwrap();
    assert_eq!(ctx.priority, 1);
    assert!(!ctx.fee_market_bypass);

    let ctx = decorator
        .attempt(Context::new(10), &mock_tx(vec![Msg::other(MSG_RECV_PACKET), ack()]), false)
        .unwrap();
    assert_eq!(ctx.priority, 2);
    assert!(ctx.fee_market_bypass);

    // the flag belongs to the context of a single tx
    let send = mock_tx(vec![Msg::other(MSG_SEND)]);
    let ctx = decorator.attempt(Context::new(11), &send, false).unwrap();
    assert!(!ctx.fee_market_bypass);
}

proptest! {
    #[test]
    fn one_ineligible_msg_blocks_bypass(
        count in 1usize..8,
        index in any::<prop::sample::Index>(),
    ) {
        let mut msgs = vec![ack(); count];
        prop_assert!(should_bypass_fee_market(None, &mock_tx(msgs.clone())));

        msgs.insert(index.index(count + 1), Msg::other(MSG_SEND));
        prop_assert!(!should_bypass_fee_market(None, &mock_tx(msgs)));
    }
}
