//! Accounts module - domain models and repository traits.

mod accounts_constants;
mod accounts_model;
mod accounts_traits;

// Re-export the public interface
pub use accounts_constants::*;
pub use accounts_model::{Account, AccountCategory};
pub use accounts_traits::AccountRepositoryTrait;
