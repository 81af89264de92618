//! Transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction for aggregation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
    /// Movement between the user's own accounts
    Transfer,
}

/// Domain model representing a ledger transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub description: String,
    /// Signed amount, positive for inflows
    pub amount: Decimal,
    pub category: String,
    pub transaction_type: TransactionType,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
}
