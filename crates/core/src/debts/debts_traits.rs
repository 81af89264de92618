use super::debts_model::Debt;
use crate::errors::Result;

/// Trait for debt repository operations
pub trait DebtRepositoryTrait: Send + Sync {
    fn list(&self, user_id: &str) -> Result<Vec<Debt>>;
}
