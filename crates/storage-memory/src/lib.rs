//! In-memory storage implementation for Finboard.
//!
//! This crate loads a JSON dataset once and serves it through the repository
//! traits defined in `finboard-core`. It contains:
//! - Dataset loading and validation
//! - Read-only repository implementations for all domain entities
//!
//! ```text
//!   finboard-core (traits)
//!          │
//!          ▼
//!   storage-memory (this crate)
//!          │
//!          ▼
//!      JSON data file
//! ```

pub mod db;
pub mod errors;

// Repository implementations
pub mod accounts;
pub mod bills;
pub mod budget;
pub mod debts;
pub mod goals;
pub mod transactions;

pub use db::{Dataset, MemoryDb};
pub use errors::StorageError;

// Re-export from finboard-core for convenience
pub use finboard_core::errors::{DatabaseError, Error, Result};
