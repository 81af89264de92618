//! Account domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Kind of account a balance is held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountCategory {
    Checking,
    Savings,
    /// Negative balance is the amount owed, positive is a credit float
    Credit,
    Investment,
}

/// Domain model representing an account balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: AccountCategory,
    /// Signed balance in the account currency
    pub balance: Decimal,
    pub is_active: bool,
    /// Last time the balance was synchronized with the institution
    pub last_synced_at: Option<NaiveDateTime>,
}

impl Account {
    /// Amount owed on this account, zero unless it is a credit account in debt.
    pub fn amount_owed(&self) -> Decimal {
        if self.category == AccountCategory::Credit && self.balance < Decimal::ZERO {
            self.balance.abs()
        } else {
            Decimal::ZERO
        }
    }

    /// Validates the account record.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
