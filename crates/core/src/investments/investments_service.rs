//! Investment mutation operations and filters.
//!
//! Mutations are snapshot-in/snapshot-out: they borrow the current
//! collection, validate, and return the next collection. The caller stores
//! the result.

use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};
use crate::goals::Goal;

use super::investments_model::{Investment, InvestmentType, NewInvestment};

/// Creates a new investment at the head of the list.
///
/// An investment cannot exist without a goal: creation fails with
/// [`Error::NoGoalAvailable`] when the goal set is empty, and the draft's
/// `goal_id` must name one of the existing goals.
pub fn add_investment(
    investments: &[Investment],
    goals: &[Goal],
    draft: NewInvestment,
) -> Result<Vec<Investment>> {
    if goals.is_empty() {
        return Err(Error::NoGoalAvailable);
    }
    if draft.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    if draft.invested_value < Decimal::ZERO || draft.current_value < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(
            "invested and current values must not be negative".to_string(),
        )
        .into());
    }
    if !goals.iter().any(|goal| goal.id == draft.goal_id) {
        return Err(Error::ConstraintViolation(format!(
            "goal '{}' does not exist",
            draft.goal_id
        )));
    }

    let investment = Investment {
        id: Uuid::new_v4().to_string(),
        name: draft.name,
        category: draft.category,
        sub_type: draft.sub_type,
        risk: draft.risk,
        invested_value: draft.invested_value,
        current_value: draft.current_value,
        goal_id: draft.goal_id,
        kind: draft.kind,
    };
    debug!("Adding investment '{}' ({})", investment.name, investment.id);

    let mut next = Vec::with_capacity(investments.len() + 1);
    next.push(investment);
    next.extend_from_slice(investments);
    Ok(next)
}

/// Replaces the invested and current values of the investment with the
/// given id. Fails with [`Error::NotFound`] when the id is absent.
pub fn update_investment_value(
    investments: &[Investment],
    id: &str,
    invested_value: Decimal,
    current_value: Decimal,
) -> Result<Vec<Investment>> {
    if invested_value < Decimal::ZERO || current_value < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(
            "invested and current values must not be negative".to_string(),
        )
        .into());
    }
    if !investments.iter().any(|inv| inv.id == id) {
        return Err(Error::NotFound(format!("investment '{}'", id)));
    }

    Ok(investments
        .iter()
        .cloned()
        .map(|mut inv| {
            if inv.id == id {
                inv.invested_value = invested_value;
                inv.current_value = current_value;
            }
            inv
        })
        .collect())
}

/// Clears the investment collection. Destructive and explicit; there is no
/// undo.
pub fn reset_investments() -> Vec<Investment> {
    Vec::new()
}

/// Applies the type tab and the case-insensitive name search the
/// investments view offers. `None` for the type means "All".
pub fn filter_investments<'a>(
    investments: &'a [Investment],
    type_filter: Option<InvestmentType>,
    search_term: &str,
) -> Vec<&'a Investment> {
    let needle = search_term.trim().to_lowercase();
    investments
        .iter()
        .filter(|inv| {
            let matches_type = type_filter.map_or(true, |t| inv.investment_type() == t);
            let matches_search = needle.is_empty() || inv.name.to_lowercase().contains(&needle);
            matches_type && matches_search
        })
        .collect()
}
