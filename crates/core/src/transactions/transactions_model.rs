//! Transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

/// An immutable, dated money movement. Once created a transaction is never
/// edited; the ledger is newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// For debits, a matching budget category name routes the amount into
    /// that category's spent total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Input model for recording a new transaction. The id and date are
/// assigned at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Option<String>,
}
