//! Dataset loading and validation.
//!
//! The whole dataset is read once into memory and never written back.
//! Repositories share it through an `Arc<MemoryDb>`.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use finboard_core::accounts::Account;
use finboard_core::bills::Bill;
use finboard_core::budget::Budget;
use finboard_core::debts::Debt;
use finboard_core::goals::SavingsGoal;
use finboard_core::transactions::Transaction;

use crate::errors::StorageError;

/// Every record the engine reads, for all users.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub accounts: Vec<Account>,
    pub budgets: Vec<Budget>,
    pub transactions: Vec<Transaction>,
    pub debts: Vec<Debt>,
    pub goals: Vec<SavingsGoal>,
    pub bills: Vec<Bill>,
}

/// Read-only in-memory database.
#[derive(Debug)]
pub struct MemoryDb {
    dataset: Dataset,
}

impl MemoryDb {
    /// Validates `dataset` and wraps it.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, StorageError> {
        validate_dataset(&dataset)?;
        debug!(
            "Loaded {} accounts, {} budgets, {} transactions, {} debts, {} goals, {} bills",
            dataset.accounts.len(),
            dataset.budgets.len(),
            dataset.transactions.len(),
            dataset.debts.len(),
            dataset.goals.len(),
            dataset.bills.len()
        );
        Ok(Self { dataset })
    }

    pub fn from_json_str(json: &str) -> Result<Self, StorageError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Self::from_dataset(dataset)
    }

    /// Reads and validates a JSON data file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        info!("Opening data file {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

/// Fails on the first id that appears twice among `ids`.
fn ensure_unique_ids<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), StorageError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StorageError::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_dataset(dataset: &Dataset) -> Result<(), StorageError> {
    ensure_unique_ids("account", dataset.accounts.iter().map(|a| a.id.as_str()))?;
    ensure_unique_ids("budget", dataset.budgets.iter().map(|b| b.id.as_str()))?;
    ensure_unique_ids(
        "transaction",
        dataset.transactions.iter().map(|t| t.id.as_str()),
    )?;
    ensure_unique_ids("debt", dataset.debts.iter().map(|d| d.id.as_str()))?;
    ensure_unique_ids("goal", dataset.goals.iter().map(|g| g.id.as_str()))?;
    ensure_unique_ids("bill", dataset.bills.iter().map(|b| b.id.as_str()))?;

    // A user has at most one income plan
    let mut budget_owners = HashSet::new();
    for budget in &dataset.budgets {
        if !budget_owners.insert(budget.user_id.as_str()) {
            return Err(StorageError::Invalid(format!(
                "user '{}' has more than one budget",
                budget.user_id
            )));
        }
    }

    for account in &dataset.accounts {
        account
            .validate()
            .map_err(|e| StorageError::Invalid(format!("account '{}': {}", account.id, e)))?;
    }

    Ok(())
}
