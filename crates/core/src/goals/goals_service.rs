//! Goal mutations and derived progress.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};
use crate::investments::Investment;

use super::goals_model::{Goal, GoalProgress, NewGoal};

/// Creates a new goal at the end of the list.
pub fn add_goal(goals: &[Goal], draft: NewGoal) -> Result<Vec<Goal>> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    if draft.target_amount <= Decimal::ZERO {
        return Err(
            ValidationError::InvalidInput("target amount must be positive".to_string()).into(),
        );
    }

    let goal = Goal {
        id: Uuid::new_v4().to_string(),
        name: draft.name,
        target_amount: draft.target_amount,
        target_date: draft.target_date,
    };
    debug!("Adding goal '{}' ({})", goal.name, goal.id);

    let mut next = goals.to_vec();
    next.push(goal);
    Ok(next)
}

/// Clears the goal collection. Destructive and explicit; there is no undo.
pub fn reset_goals() -> Vec<Goal> {
    Vec::new()
}

/// Computes a goal's progress from the current investment set.
///
/// The raw amount is never capped; the percentage is clamped at 100 so the
/// display bound holds even for over-funded goals, and is exactly 0 when
/// the target amount is not positive.
pub fn goal_progress(goal: &Goal, investments: &[Investment]) -> GoalProgress {
    let current_amount: Decimal = investments
        .iter()
        .filter(|inv| inv.goal_id == goal.id)
        .map(|inv| inv.current_value)
        .sum();

    let progress_percentage = if goal.target_amount > Decimal::ZERO {
        (current_amount / goal.target_amount * dec!(100))
            .min(dec!(100))
            .round_dp(DISPLAY_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    };

    GoalProgress {
        current_amount,
        progress_percentage,
        achieved: goal.target_amount > Decimal::ZERO && current_amount >= goal.target_amount,
    }
}

/// The investments linked to a goal, in collection order.
pub fn linked_investments<'a>(goal: &Goal, investments: &'a [Investment]) -> Vec<&'a Investment> {
    investments
        .iter()
        .filter(|inv| inv.goal_id == goal.id)
        .collect()
}
