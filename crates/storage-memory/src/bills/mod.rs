//! In-memory storage implementation for bills.

mod repository;

pub use repository::BillRepository;
