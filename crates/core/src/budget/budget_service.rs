//! Budget mutations and roll-ups.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{CATEGORY_COLOR_PALETTE, DISPLAY_DECIMAL_PRECISION};
use crate::errors::{Error, Result, ValidationError};

use super::budget_model::{BudgetCategory, BudgetSummary, CategoryStatus};

/// Creates a new category with `spent = 0` at the end of the list.
///
/// The name is the uniqueness key; the color is assigned by cycling the
/// fixed palette indexed by the current category count.
pub fn add_budget_category(
    categories: &[BudgetCategory],
    name: &str,
    budgeted: Decimal,
) -> Result<Vec<BudgetCategory>> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    if budgeted <= Decimal::ZERO {
        return Err(
            ValidationError::InvalidInput("budgeted amount must be positive".to_string()).into(),
        );
    }
    if categories.iter().any(|cat| cat.name == name) {
        return Err(Error::ConstraintViolation(format!(
            "category '{}' already exists",
            name
        )));
    }

    let color = CATEGORY_COLOR_PALETTE[categories.len() % CATEGORY_COLOR_PALETTE.len()];
    debug!("Adding budget category '{}' ({})", name, color);

    let mut next = categories.to_vec();
    next.push(BudgetCategory {
        name: name.to_string(),
        budgeted,
        spent: Decimal::ZERO,
        color: color.to_string(),
    });
    Ok(next)
}

/// Zeroes every category's budgeted and spent amounts, preserving the
/// category set itself (unlike the goal/investment resets, which clear
/// their whole collections).
pub fn reset_budget(categories: &[BudgetCategory]) -> Vec<BudgetCategory> {
    categories
        .iter()
        .cloned()
        .map(|mut cat| {
            cat.budgeted = Decimal::ZERO;
            cat.spent = Decimal::ZERO;
            cat
        })
        .collect()
}

/// Totals across all categories. `remaining` goes negative when spending
/// exceeds the overall budget.
pub fn budget_summary(categories: &[BudgetCategory]) -> BudgetSummary {
    let total_budgeted: Decimal = categories.iter().map(|cat| cat.budgeted).sum();
    let total_spent: Decimal = categories.iter().map(|cat| cat.spent).sum();
    BudgetSummary {
        total_budgeted,
        total_spent,
        remaining: total_budgeted - total_spent,
    }
}

/// Derived display state for one category. The percentage is clamped at
/// 100 and defined as 0 when nothing is budgeted.
pub fn category_status(category: &BudgetCategory) -> CategoryStatus {
    let percent_used = if category.budgeted > Decimal::ZERO {
        (category.spent / category.budgeted * dec!(100))
            .min(dec!(100))
            .round_dp(DISPLAY_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    };
    CategoryStatus {
        percent_used,
        is_over_budget: category.spent > category.budgeted,
    }
}
