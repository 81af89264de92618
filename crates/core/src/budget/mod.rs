//! Budget module - domain models and repository traits.

mod budget_model;
mod budget_traits;

pub use budget_model::Budget;
pub use budget_traits::BudgetRepositoryTrait;
