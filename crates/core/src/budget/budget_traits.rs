use super::budget_model::Budget;
use crate::errors::Result;

/// Trait for budget repository operations
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Returns the user's budget, if one has been configured.
    fn get_budget(&self, user_id: &str) -> Result<Option<Budget>>;
}
