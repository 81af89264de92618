use super::bills_model::Bill;
use crate::errors::Result;

/// Trait for bill repository operations
pub trait BillRepositoryTrait: Send + Sync {
    fn list(&self, user_id: &str) -> Result<Vec<Bill>>;
}
