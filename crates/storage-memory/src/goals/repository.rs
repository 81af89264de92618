use std::sync::Arc;

use finboard_core::goals::{GoalRepositoryTrait, SavingsGoal};
use finboard_core::Result;

use crate::db::MemoryDb;

pub struct GoalRepository {
    db: Arc<MemoryDb>,
}

impl GoalRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        GoalRepository { db }
    }
}

impl GoalRepositoryTrait for GoalRepository {
    /// All of a user's goals, inactive ones included.
    fn load_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>> {
        Ok(self
            .db
            .dataset()
            .goals
            .iter()
            .filter(|goal| goal.user_id == user_id)
            .cloned()
            .collect())
    }
}
