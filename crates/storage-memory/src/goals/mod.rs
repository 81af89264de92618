//! In-memory storage implementation for savings goals.

mod repository;

pub use repository::GoalRepository;
