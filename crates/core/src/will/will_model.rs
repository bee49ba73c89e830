//! Will domain models.

use serde::{Deserialize, Serialize};

/// The person appointed to administer the estate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Executor {
    pub name: String,
    pub relationship: String,
    pub address: String,
}

/// A person receiving bequests, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub id: String,
    pub name: String,
    pub relationship: String,
}

/// An estate item. `beneficiary_id`, when set, must reference an existing
/// beneficiary; unassigned items fall into the residuary clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstateAsset {
    pub id: String,
    pub description: String,
    pub beneficiary_id: Option<String>,
}

/// A witness to the signing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Witness {
    pub name: String,
    pub address: String,
}

/// Everything the composer needs to draft the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WillData {
    pub full_name: String,
    pub address: String,
    pub executor: Executor,
    pub beneficiaries: Vec<Beneficiary>,
    pub assets: Vec<EstateAsset>,
    pub witness1: Witness,
    pub witness2: Witness,
}
