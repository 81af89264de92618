//! Goals domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: Decimal,
    /// Amount saved so far; above the target counts as completed
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    pub monthly_contribution: Decimal,
    pub is_active: bool,
}
