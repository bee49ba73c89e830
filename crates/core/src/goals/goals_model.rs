//! Goals domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named target amount with a target date.
///
/// Progress is deliberately not stored here: it is a pure function of the
/// investment set at read time, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
}

/// Derived progress of a goal against its linked investments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Uncapped sum of the linked investments' current values.
    pub current_amount: Decimal,
    /// Display percentage, clamped at 100 even when over-funded.
    pub progress_percentage: Decimal,
    /// Whether the raw amount has reached the target.
    pub achieved: bool,
}
