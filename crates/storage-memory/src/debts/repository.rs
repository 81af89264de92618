use std::sync::Arc;

use finboard_core::debts::{Debt, DebtRepositoryTrait};
use finboard_core::Result;

use crate::db::MemoryDb;

pub struct DebtRepository {
    db: Arc<MemoryDb>,
}

impl DebtRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

impl DebtRepositoryTrait for DebtRepository {
    fn list(&self, user_id: &str) -> Result<Vec<Debt>> {
        Ok(self
            .db
            .dataset()
            .debts
            .iter()
            .filter(|debt| debt.user_id == user_id)
            .cloned()
            .collect())
    }
}
