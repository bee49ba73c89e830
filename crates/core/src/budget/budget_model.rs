//! Budget domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Suggested sub-categories grouped by main spending group. Advisory data
/// for the presentation layer's pickers; category-name uniqueness is global
/// across groups, not per group.
pub const SPENDING_CATEGORY_GROUPS: &[(&str, &[&str])] = &[
    (
        "Needs",
        &[
            "Housing",
            "Groceries",
            "Utilities",
            "Transportation",
            "Health & Wellness",
            "Insurance",
        ],
    ),
    (
        "Wants",
        &[
            "Entertainment",
            "Shopping",
            "Dining Out",
            "Subscriptions",
            "Hobbies",
        ],
    ),
    ("Desires", &["Travel", "Luxury Goods", "Major Home Upgrades"]),
    (
        "Investment",
        &[
            "Emergency Fund",
            "Retirement",
            "Wealth Creation",
            "Child's Education",
            "Real Estate",
        ],
    ),
];

/// A named spending bucket with a budgeted ceiling and an accumulated
/// spent total. `name` is the uniqueness key within the category set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub name: String,
    pub budgeted: Decimal,
    /// Running total, increased only by debit transactions categorized to
    /// this bucket.
    pub spent: Decimal,
    /// Presentation tag, not semantically load-bearing.
    pub color: String,
}

/// Totals across all categories. `remaining` may be negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_budgeted: Decimal,
    pub total_spent: Decimal,
    pub remaining: Decimal,
}

/// Derived per-category state.
///
/// Over-budget is a valid, representable condition, not an error; the
/// percentage is clamped at 100 so progress bars stay bounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStatus {
    pub percent_used: Decimal,
    pub is_over_budget: bool,
}
