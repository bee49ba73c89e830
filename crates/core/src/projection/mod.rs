//! Projection module - deterministic compound-growth simulation.

mod projection_model;
mod projection_service;

pub use projection_model::*;
pub use projection_service::*;

#[cfg(test)]
mod projection_service_tests;
