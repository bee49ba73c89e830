//! Transactions module - the immutable money-movement ledger.

mod transactions_model;
mod transactions_service;

pub use transactions_model::*;
pub use transactions_service::*;
