//! Account repository trait.
//!
//! The trait defines the read contract for accounts without any
//! storage-specific types, allowing for different storage implementations.

use super::accounts_model::Account;
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// The metrics engine never writes through this interface.
pub trait AccountRepositoryTrait: Send + Sync {
    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Lists a user's accounts.
    ///
    /// # Arguments
    /// * `user_id` - Owner of the accounts
    /// * `is_active_filter` - If Some, filter by active status
    fn list(&self, user_id: &str, is_active_filter: Option<bool>) -> Result<Vec<Account>>;
}
