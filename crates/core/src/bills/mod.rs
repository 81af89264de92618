//! Bills module - domain models and repository traits.

mod bills_model;
mod bills_traits;

pub use bills_model::Bill;
pub use bills_traits::BillRepositoryTrait;
