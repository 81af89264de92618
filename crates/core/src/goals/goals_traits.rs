use crate::errors::Result;
use crate::goals::goals_model::SavingsGoal;

/// Trait for goal repository operations
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>>;
}
