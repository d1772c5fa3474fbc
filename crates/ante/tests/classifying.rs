use cosmwasm_std::{coin, Decimal};

use identity_fees::msg::Msg;
use identity_fees::params::DidFeeParams;
use identity_fees::{FeeRange, GasPrice, TaxableMsgCategory, Tx};

use identity_fee_ante::context::Context;
use identity_fee_ante::error::FeeError;
use identity_fee_ante::filters::*;
use identity_fee_ante::helpers::to_coins;
use identity_fee_ante::media::{detect_media_type, resource_category};

mod utils;

use utils::{MockOracle, MockParams, PNG_BYTES};

fn mock_tx(msgs: Vec<Msg>) -> Tx {
    Tx::new(msgs, vec![coin(1_000_000_000_000, "ncheq")], 200_000, "alice")
}

#[test]
fn detecting_media_types() {
    assert_eq!(detect_media_type(PNG_BYTES), "image/png");
    assert_eq!(detect_media_type(br#"{"name":"alice"}"#), "application/json");
    assert_eq!(detect_media_type(b"hello world"), "text/plain; charset=utf-8");
    assert_eq!(detect_media_type(&[0x00, 0x9f, 0x92, 0x96]), "application/octet-stream");

    assert_eq!(resource_category(PNG_BYTES), TaxableMsgCategory::CreateResourceImage);
    assert_eq!(resource_category(b"[1, 2, 3]"), TaxableMsgCategory::CreateResourceJson);
    assert_eq!(resource_category(b"hello world"), TaxableMsgCategory::CreateResourceDefault);
}

#[test]
fn categorizing_messages() {
    assert_eq!(
        taxable_category(&Msg::create_did_doc("did:cheqd:testnet:alice")),
        Some(TaxableMsgCategory::CreateDidDoc)
    );
    assert_eq!(
        taxable_category(&Msg::deactivate_did_doc("did:cheqd:testnet:alice")),
        Some(TaxableMsgCategory::DeactivateDidDoc)
    );
    assert_eq!(
        taxable_category(&Msg::create_resource(b"plain".to_vec())),
        Some(TaxableMsgCategory::CreateResourceDefault)
    );
    assert_eq!(taxable_category(&Msg::other("/cosmos.bank.v1beta1.MsgSend")), None);

    let ack = Msg::Acknowledgement {
        channel_id: "channel-0".to_string(),
        sequence: 1,
        signer: "relayer".to_string(),
    };
    assert_eq!(taxable_category(&ack), None);
    assert!(!is_taxable_msg(&ack));
}

#[test]
fn lite_check_ignores_prices() {
    assert!(is_taxable_tx_lite(&mock_tx(vec![
        Msg::other("/cosmos.bank.v1beta1.MsgSend"),
        Msg::update_did_doc("did:cheqd:testnet:alice"),
    ])));
    assert!(!is_taxable_tx_lite(&mock_tx(vec![Msg::other("/cosmos.bank.v1beta1.MsgSend")])));
    assert!(!is_taxable_tx_lite(&mock_tx(vec![])));
}

#[test]
fn pricing_taxable_tx() {
    let params = MockParams::default();
    let oracle = MockOracle::new(Decimal::permille(16));

    let tx = mock_tx(vec![
        Msg::create_did_doc("did:cheqd:testnet:alice"),
        Msg::create_resource(PNG_BYTES.to_vec()),
        Msg::other("/cosmos.bank.v1beta1.MsgSend"),
    ]);
    let outcome = is_taxable_tx(&params, &params, &oracle, &tx).unwrap();

    // create_did overlaps its native and usd ranges at $1.20, so it is charged in usd; the
    // image resource only has a native range
    assert!(outcome.taxable);
    assert_eq!(
        outcome.burn.to_vec(),
        vec![coin(10_000_000_000, "ncheq"), coin(600_000_000_000_000_000, "usd")]
    );
    assert_eq!(
        outcome.reward.to_vec(),
        vec![coin(10_000_000_000, "ncheq"), coin(600_000_000_000_000_000, "usd")]
    );
    assert_eq!(
        outcome.total().unwrap().to_vec(),
        vec![coin(20_000_000_000, "ncheq"), coin(1_200_000_000_000_000_000, "usd")]
    );
}

#[test]
fn pricing_without_taxable_msgs() {
    let params = MockParams::default();
    let oracle = MockOracle::new(Decimal::permille(16));

    let tx = mock_tx(vec![Msg::other("/cosmos.bank.v1beta1.MsgSend")]);
    assert_eq!(is_taxable_tx(&params, &params, &oracle, &tx), Ok(TaxableOutcome::default()));
}

#[test]
fn pricing_without_oracle_price() {
    let params = MockParams::default();
    let tx = mock_tx(vec![
        Msg::create_did_doc("did:cheqd:testnet:alice"),
        Msg::create_resource(PNG_BYTES.to_vec()),
    ]);

    let oracle = MockOracle::new(Decimal::zero());
    let outcome = is_taxable_tx(&params, &params, &oracle, &tx).unwrap();
    assert!(!outcome.taxable);
    assert!(outcome.burn.is_empty());
    assert!(outcome.reward.is_empty());

    let oracle = MockOracle::unavailable();
    assert_eq!(is_taxable_tx(&params, &params, &oracle, &tx), Ok(TaxableOutcome::default()));
}

#[test]
fn pricing_unresolvable_fee() {
    let params = MockParams {
        did: DidFeeParams {
            // $0.32 to $0.48 against $1 to $2
            update_did: vec![
                FeeRange::native(20_000_000_000, Some(30_000_000_000)),
                FeeRange::usd(1_000_000_000_000_000_000, Some(2_000_000_000_000_000_000)),
            ],
            ..Default::default()
        },
        ..Default::default()
    };
    let oracle = MockOracle::new(Decimal::permille(16));

    let tx = mock_tx(vec![Msg::update_did_doc("did:cheqd:testnet:alice")]);
    assert_eq!(
        is_taxable_tx(&params, &params, &oracle, &tx),
        Err(FeeError::FeeUnavailable {
            category: TaxableMsgCategory::UpdateDidDoc,
        })
    );
}

#[test]
fn loading_snapshot() {
    let params = MockParams::default();
    let snapshot = load_fee_snapshot(&params, &params).unwrap();
    assert_eq!(snapshot.did, params.did);
    assert_eq!(snapshot.resource, params.resource);
}

#[test]
fn converting_to_native() {
    let price = Decimal::permille(16);

    let coins = to_coins(&[coin(1_200_000_000_000_000_000, "usd"), coin(5, "ncheq")]).unwrap();
    let native = convert_to_native(&coins, price).unwrap();
    assert_eq!(native.to_vec(), vec![coin(75_000_000_005, "ncheq")]);

    let coins = to_coins(&[coin(1, "uatom")]).unwrap();
    assert_eq!(
        convert_to_native(&coins, price),
        Err(FeeError::InvalidCoins("unexpected denom: uatom".to_string()))
    );

    let coins = to_coins(&[coin(1, "usd")]).unwrap();
    assert_eq!(
        convert_to_native(&coins, Decimal::zero()),
        Err(FeeError::PriceUnavailable("CHEQ".to_string()))
    );
}

#[test]
fn checking_custom_fee_sufficiency() {
    let required = to_coins(&[coin(100_000, "ncheq")]).unwrap();
    let burn = to_coins(&[coin(50_000, "ncheq")]).unwrap();
    let ctx = Context::new(1);

    let alloc = is_sufficient_custom_fee(&ctx, &required, &[coin(100_000, "ncheq")], &burn, 200_000)
        .unwrap();
    assert_eq!(alloc[0], burn);
    assert_eq!(alloc[1].to_vec(), vec![coin(50_000, "ncheq")]);

    assert_eq!(
        is_sufficient_custom_fee(&ctx, &required, &[coin(99_999, "ncheq")], &burn, 200_000),
        Err(FeeError::insufficient_fee(&[coin(99_999, "ncheq")], &[coin(100_000, "ncheq")]))
    );

    // the rewards portion alone has to pay for gas at the validator's minimum prices
    let min_gas_price = GasPrice::new(Decimal::percent(50), "ncheq");
    let ctx = Context::new(1).with_min_gas_prices(vec![min_gas_price]);
    assert_eq!(
        is_sufficient_custom_fee(&ctx, &required, &[coin(100_000, "ncheq")], &burn, 200_000),
        Err(FeeError::insufficient_fee(&[coin(50_000, "ncheq")], &[coin(100_000, "ncheq")]))
    );
    assert!(
        is_sufficient_custom_fee(&ctx, &required, &[coin(100_000, "ncheq")], &burn, 100_000).is_ok()
    );
}
