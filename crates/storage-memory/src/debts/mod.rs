//! In-memory storage implementation for debts.

mod repository;

pub use repository::DebtRepository;
