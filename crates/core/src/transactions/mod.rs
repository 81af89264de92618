//! Transactions module - domain models and repository traits.

mod transactions_model;
mod transactions_traits;

pub use transactions_model::{Transaction, TransactionType};
pub use transactions_traits::TransactionRepositoryTrait;
