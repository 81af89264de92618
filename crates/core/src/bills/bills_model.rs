//! Bills domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::BillFrequency;

/// Domain model representing one due instance of a bill.
///
/// Paid / pending / overdue is derived from `due_date` and `is_paid`; it is
/// never stored. Rolling a recurring bill forward to its next due date is the
/// persistence layer's concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub is_paid: bool,
    pub frequency: BillFrequency,
    pub last_paid_date: Option<NaiveDate>,
}
