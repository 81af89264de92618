use super::transactions_model::Transaction;
use crate::calendar::DateRange;
use crate::errors::Result;

/// Trait for transaction repository operations
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Lists a user's transactions dated within `range` (start inclusive,
    /// end exclusive), ordered by date.
    fn list(&self, user_id: &str, range: &DateRange) -> Result<Vec<Transaction>>;
}
