//! Transaction recording and ledger aggregation.

use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::budget::BudgetCategory;
use crate::errors::{Result, ValidationError};

use super::transactions_model::{NewTransaction, Transaction, TransactionKind};

/// Records a transaction, stamping a fresh id and the current date, and
/// returns the next `(categories, transactions)` snapshot pair.
///
/// A debit whose category matches an existing budget category increments
/// that category's spent total in the same returned pair, so callers see
/// both updates together or neither. Credits never touch category spend; a
/// debit against an unknown category leaves the categories untouched.
pub fn add_transaction(
    categories: &[BudgetCategory],
    transactions: &[Transaction],
    draft: NewTransaction,
) -> Result<(Vec<BudgetCategory>, Vec<Transaction>)> {
    if draft.description.trim().is_empty() {
        return Err(ValidationError::MissingField("description".to_string()).into());
    }
    if draft.amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput("amount must be positive".to_string()).into());
    }

    let transaction = Transaction {
        id: Uuid::new_v4().to_string(),
        date: Utc::now().date_naive(),
        description: draft.description,
        amount: draft.amount,
        kind: draft.kind,
        category: draft.category,
    };
    debug!(
        "Recording {:?} transaction '{}' ({})",
        transaction.kind, transaction.description, transaction.id
    );

    let mut next_categories = categories.to_vec();
    if transaction.kind == TransactionKind::Debit {
        if let Some(category_name) = &transaction.category {
            if let Some(category) = next_categories
                .iter_mut()
                .find(|cat| &cat.name == category_name)
            {
                category.spent += transaction.amount;
            }
        }
    }

    let mut next_transactions = Vec::with_capacity(transactions.len() + 1);
    next_transactions.push(transaction);
    next_transactions.extend_from_slice(transactions);

    Ok((next_categories, next_transactions))
}

/// Net savings for the ledger: credits minus debits, floored at zero.
///
/// The floor is deliberate; downstream projection must never be seeded
/// with a negative monthly contribution.
pub fn monthly_net_savings(transactions: &[Transaction]) -> Decimal {
    let income: Decimal = transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Credit)
        .map(|tx| tx.amount)
        .sum();
    let expenses: Decimal = transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Debit)
        .map(|tx| tx.amount)
        .sum();
    (income - expenses).max(Decimal::ZERO)
}
