//! Budget module - spending categories and their roll-ups.

mod budget_model;
mod budget_service;

pub use budget_model::*;
pub use budget_service::*;
