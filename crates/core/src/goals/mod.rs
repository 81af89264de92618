//! Goals module - domain models and repository traits.

mod goals_model;
mod goals_traits;

pub use goals_model::SavingsGoal;
pub use goals_traits::GoalRepositoryTrait;
