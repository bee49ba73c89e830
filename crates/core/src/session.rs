//! Caller-owned session state.
//!
//! Bundles the four domain collections behind delegating methods so the
//! presentation layer can hold one value and thread it through reads and
//! mutations. Nothing here caches derived values; every read recomputes
//! from the collections.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::{self, BudgetCategory, BudgetSummary};
use crate::errors::Result;
use crate::goals::{self, Goal, GoalProgress, NewGoal};
use crate::investments::{self, Investment, NewInvestment};
use crate::portfolio::{self, PortfolioSummary};
use crate::transactions::{self, NewTransaction, Transaction};

/// All in-memory state of one dashboard session. Ephemeral by design and
/// re-derivable from the mutation history; dropped wholesale on logout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub investments: Vec<Investment>,
    pub goals: Vec<Goal>,
    pub categories: Vec<BudgetCategory>,
    pub transactions: Vec<Transaction>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    // === Mutations ===

    pub fn add_goal(&mut self, draft: NewGoal) -> Result<()> {
        self.goals = goals::add_goal(&self.goals, draft)?;
        Ok(())
    }

    pub fn add_investment(&mut self, draft: NewInvestment) -> Result<()> {
        self.investments = investments::add_investment(&self.investments, &self.goals, draft)?;
        Ok(())
    }

    pub fn update_investment_value(
        &mut self,
        id: &str,
        invested_value: Decimal,
        current_value: Decimal,
    ) -> Result<()> {
        self.investments = investments::update_investment_value(
            &self.investments,
            id,
            invested_value,
            current_value,
        )?;
        Ok(())
    }

    pub fn add_budget_category(&mut self, name: &str, budgeted: Decimal) -> Result<()> {
        self.categories = budget::add_budget_category(&self.categories, name, budgeted)?;
        Ok(())
    }

    /// Records a transaction; the category-spend side effect of a debit
    /// lands in the same call.
    pub fn add_transaction(&mut self, draft: NewTransaction) -> Result<()> {
        let (categories, transactions) =
            transactions::add_transaction(&self.categories, &self.transactions, draft)?;
        self.categories = categories;
        self.transactions = transactions;
        Ok(())
    }

    pub fn reset_goals(&mut self) {
        self.goals = goals::reset_goals();
    }

    pub fn reset_investments(&mut self) {
        self.investments = investments::reset_investments();
    }

    /// Zeroes budget amounts but keeps the category set.
    pub fn reset_budget(&mut self) {
        self.categories = budget::reset_budget(&self.categories);
    }

    /// Drops every collection. Used on logout.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // === Derived reads, recomputed on every call ===

    pub fn portfolio_summary(&self) -> PortfolioSummary {
        portfolio::portfolio_summary(&self.investments)
    }

    pub fn goal_progress(&self, goal: &Goal) -> GoalProgress {
        goals::goal_progress(goal, &self.investments)
    }

    pub fn budget_summary(&self) -> BudgetSummary {
        budget::budget_summary(&self.categories)
    }

    pub fn monthly_net_savings(&self) -> Decimal {
        transactions::monthly_net_savings(&self.transactions)
    }
}
