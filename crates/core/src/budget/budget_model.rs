use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{DateRange, Frequency};

/// A user's income plan. The first pay date anchors every pay period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub monthly_income: Decimal,
    pub pay_frequency: Frequency,
    pub first_pay_date: NaiveDate,
}

impl Budget {
    /// The pay period containing `as_of`.
    pub fn current_period(&self, as_of: NaiveDate) -> DateRange {
        self.pay_frequency
            .period_containing(self.first_pay_date, as_of)
    }
}
