//! Debts module - domain models and repository traits.

mod debts_model;
mod debts_traits;

pub use debts_model::Debt;
pub use debts_traits::DebtRepositoryTrait;
