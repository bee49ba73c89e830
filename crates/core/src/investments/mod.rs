//! Investments module - domain models and mutation operations.

mod investments_model;
mod investments_service;

pub use investments_model::*;
pub use investments_service::*;

#[cfg(test)]
mod investments_service_tests;
