use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use identity_fees::msg::Msg;
use identity_fees::params::{
    DidFeeParams, FeeMarketParams, GenesisState, LegacyDidFeeParams, LegacyResourceFeeParams,
    ResourceFeeParams, SudoMsg,
};
use identity_fees::{FeeRange, GasPrice, Tx};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(GenesisState), &out_dir);
    export_schema(&schema_for!(SudoMsg), &out_dir);

    export_schema(&schema_for!(DidFeeParams), &out_dir);
    export_schema(&schema_for!(ResourceFeeParams), &out_dir);
    export_schema(&schema_for!(LegacyDidFeeParams), &out_dir);
    export_schema(&schema_for!(LegacyResourceFeeParams), &out_dir);
    export_schema(&schema_for!(FeeMarketParams), &out_dir);
    export_schema(&schema_for!(FeeRange), &out_dir);
    export_schema(&schema_for!(GasPrice), &out_dir);

    export_schema(&schema_for!(Tx), &out_dir);
    export_schema(&schema_for!(Msg), &out_dir);
}
