//! Moneta Core - Domain entities, engines, and mutation operations.
//!
//! This crate contains the core business logic for the Moneta dashboard.
//! It is presentation-agnostic and persistence-free: every operation is a
//! plain computation over snapshot input, and the caller owns the canonical
//! copy of all state.

pub mod budget;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod investments;
pub mod portfolio;
pub mod projection;
pub mod session;
pub mod transactions;
pub mod utils;
pub mod will;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

// Re-export the session container
pub use session::SessionState;
