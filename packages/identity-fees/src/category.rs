use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The fee schedule a taxable message is priced by.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum TaxableMsgCategory {
    CreateDidDoc,
    UpdateDidDoc,
    DeactivateDidDoc,
    /// A resource whose payload is neither an image nor a JSON document
    CreateResourceDefault,
    /// A resource whose payload sniffs as `image/*`
    CreateResourceImage,
    /// A resource whose payload sniffs as `application/json`
    CreateResourceJson,
}

impl TaxableMsgCategory {
    pub const ALL: [TaxableMsgCategory; 6] = [
        TaxableMsgCategory::CreateDidDoc,
        TaxableMsgCategory::UpdateDidDoc,
        TaxableMsgCategory::DeactivateDidDoc,
        TaxableMsgCategory::CreateResourceDefault,
        TaxableMsgCategory::CreateResourceImage,
        TaxableMsgCategory::CreateResourceJson,
    ];

    /// The group whose burn factor applies to fees of this category.
    pub fn burn_group(&self) -> BurnFactorGroup {
        match self {
            TaxableMsgCategory::CreateDidDoc
            | TaxableMsgCategory::UpdateDidDoc
            | TaxableMsgCategory::DeactivateDidDoc => BurnFactorGroup::Did,
            TaxableMsgCategory::CreateResourceDefault
            | TaxableMsgCategory::CreateResourceImage
            | TaxableMsgCategory::CreateResourceJson => BurnFactorGroup::Resource,
        }
    }
}

impl fmt::Display for TaxableMsgCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            TaxableMsgCategory::CreateDidDoc => "create_did",
            TaxableMsgCategory::UpdateDidDoc => "update_did",
            TaxableMsgCategory::DeactivateDidDoc => "deactivate_did",
            TaxableMsgCategory::CreateResourceDefault => "create_resource_default",
            TaxableMsgCategory::CreateResourceImage => "create_resource_image",
            TaxableMsgCategory::CreateResourceJson => "create_resource_json",
        };
        write!(f, "{}", s)
    }
}

/// Fee categories share a burn factor per module.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum BurnFactorGroup {
    Did,
    Resource,
}

impl fmt::Display for BurnFactorGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BurnFactorGroup::Did => write!(f, "did"),
            BurnFactorGroup::Resource => write!(f, "resource"),
        }
    }
}
