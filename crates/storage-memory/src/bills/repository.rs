use std::sync::Arc;

use finboard_core::bills::{Bill, BillRepositoryTrait};
use finboard_core::Result;

use crate::db::MemoryDb;

pub struct BillRepository {
    db: Arc<MemoryDb>,
}

impl BillRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

impl BillRepositoryTrait for BillRepository {
    fn list(&self, user_id: &str) -> Result<Vec<Bill>> {
        Ok(self
            .db
            .dataset()
            .bills
            .iter()
            .filter(|bill| bill.user_id == user_id)
            .cloned()
            .collect())
    }
}
