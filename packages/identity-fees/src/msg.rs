use cosmwasm_std::Binary;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const CREATE_DID_DOC_TYPE_URL: &str = "/cheqd.did.v2.MsgCreateDidDoc";
pub const UPDATE_DID_DOC_TYPE_URL: &str = "/cheqd.did.v2.MsgUpdateDidDoc";
pub const DEACTIVATE_DID_DOC_TYPE_URL: &str = "/cheqd.did.v2.MsgDeactivateDidDoc";
pub const CREATE_RESOURCE_TYPE_URL: &str = "/cheqd.resource.v2.MsgCreateResource";
pub const ACKNOWLEDGEMENT_TYPE_URL: &str = "/ibc.core.channel.v1.MsgAcknowledgement";

/// Signature over a DID or resource payload, identified by the verification method that made it
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug, Default)]
pub struct SignInfo {
    pub verification_method_id: String,
    pub signature: Binary,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug, Default)]
pub struct DidDocPayload {
    pub id: String,
    pub controller: Vec<String>,
    pub version_id: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug, Default)]
pub struct ResourcePayload {
    pub collection_id: String,
    pub id: String,
    pub name: String,
    pub version: String,
    pub resource_type: String,
    /// Raw resource content. Its media type decides which fee schedule applies.
    pub data: Binary,
}

/// The messages a transaction can carry, as far as fee handling is concerned.
///
/// Anything this engine does not price or exempt by type is carried as `Other` with its type URL,
/// which is all the bypass lookup needs.
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
#[allow(clippy::large_enum_variant)]
pub enum Msg {
    CreateDidDoc {
        payload: DidDocPayload,
        signatures: Vec<SignInfo>,
    },
    UpdateDidDoc {
        payload: DidDocPayload,
        signatures: Vec<SignInfo>,
    },
    DeactivateDidDoc {
        id: String,
        version_id: String,
        signatures: Vec<SignInfo>,
    },
    CreateResource {
        payload: ResourcePayload,
        signatures: Vec<SignInfo>,
    },
    /// IBC packet acknowledgement, relayed on behalf of the counterparty chain
    Acknowledgement {
        channel_id: String,
        sequence: u64,
        signer: String,
    },
    Other {
        type_url: String,
    },
}

impl Msg {
    pub fn type_url(&self) -> &str {
        match self {
            Msg::CreateDidDoc {
                ..
            } => CREATE_DID_DOC_TYPE_URL,
            Msg::UpdateDidDoc {
                ..
            } => UPDATE_DID_DOC_TYPE_URL,
            Msg::DeactivateDidDoc {
                ..
            } => DEACTIVATE_DID_DOC_TYPE_URL,
            Msg::CreateResource {
                ..
            } => CREATE_RESOURCE_TYPE_URL,
            Msg::Acknowledgement {
                ..
            } => ACKNOWLEDGEMENT_TYPE_URL,
            Msg::Other {
                type_url,
            } => type_url,
        }
    }

    pub fn create_did_doc(id: impl Into<String>) -> Self {
        Msg::CreateDidDoc {
            payload: DidDocPayload {
                id: id.into(),
                ..Default::default()
            },
            signatures: vec![],
        }
    }

    pub fn update_did_doc(id: impl Into<String>) -> Self {
        Msg::UpdateDidDoc {
            payload: DidDocPayload {
                id: id.into(),
                ..Default::default()
            },
            signatures: vec![],
        }
    }

    pub fn deactivate_did_doc(id: impl Into<String>) -> Self {
        Msg::DeactivateDidDoc {
            id: id.into(),
            version_id: String::new(),
            signatures: vec![],
        }
    }

    pub fn create_resource(data: impl Into<Binary>) -> Self {
        Msg::CreateResource {
            payload: ResourcePayload {
                data: data.into(),
                ..Default::default()
            },
            signatures: vec![],
        }
    }

    pub fn other(type_url: impl Into<String>) -> Self {
        Msg::Other {
            type_url: type_url.into(),
        }
    }
}
