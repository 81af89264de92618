use std::sync::Arc;

use finboard_core::accounts::{Account, AccountRepositoryTrait};
use finboard_core::errors::{DatabaseError, Error, Result};

use crate::db::MemoryDb;

/// Repository for reading account data from the dataset
pub struct AccountRepository {
    db: Arc<MemoryDb>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

impl AccountRepositoryTrait for AccountRepository {
    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        self.db
            .dataset()
            .accounts
            .iter()
            .find(|account| account.id == account_id)
            .cloned()
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "Account {} not found",
                    account_id
                )))
            })
    }

    /// Lists accounts ordered by name.
    fn list(&self, user_id: &str, is_active_filter: Option<bool>) -> Result<Vec<Account>> {
        let mut accounts: Vec<Account> = self
            .db
            .dataset()
            .accounts
            .iter()
            .filter(|account| account.user_id == user_id)
            .filter(|account| is_active_filter.map_or(true, |active| account.is_active == active))
            .cloned()
            .collect();
        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(accounts)
    }
}
