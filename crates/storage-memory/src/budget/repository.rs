use std::sync::Arc;

use finboard_core::budget::{Budget, BudgetRepositoryTrait};
use finboard_core::Result;

use crate::db::MemoryDb;

pub struct BudgetRepository {
    db: Arc<MemoryDb>,
}

impl BudgetRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

impl BudgetRepositoryTrait for BudgetRepository {
    fn get_budget(&self, user_id: &str) -> Result<Option<Budget>> {
        Ok(self
            .db
            .dataset()
            .budgets
            .iter()
            .find(|budget| budget.user_id == user_id)
            .cloned())
    }
}
