//! Goals module - domain models, mutations, and derived progress.

mod goals_model;
mod goals_service;

pub use goals_model::*;
pub use goals_service::*;
