//! Finboard Core - Domain entities, metrics and services.
//!
//! This crate contains the core business logic for Finboard.
//! It is storage-agnostic and defines repository traits that are
//! implemented by the `storage-memory` crate.

pub mod accounts;
pub mod bills;
pub mod budget;
pub mod calendar;
pub mod constants;
pub mod dashboard;
pub mod debts;
pub mod errors;
pub mod goals;
pub mod metrics;
pub mod transactions;
pub mod utils;

// Re-export the dashboard entry points
pub use dashboard::{DashboardService, DashboardServiceTrait, DashboardSummary};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
