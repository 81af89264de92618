//! In-memory storage implementation for budgets.

mod repository;

pub use repository::BudgetRepository;
