//! Debts domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::MetricsError;

/// Domain model representing an amortizing debt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub user_id: String,
    pub name: String,
    /// Original amount borrowed
    pub principal: Decimal,
    /// Amount still owed
    pub balance: Decimal,
    /// Annual interest rate as a percentage (18.5 means 18.5%)
    pub annual_rate_pct: Decimal,
    pub minimum_payment: Decimal,
    /// Payoff date recorded by the lender, if known
    pub payoff_date: Option<NaiveDate>,
}

impl Debt {
    /// Checks the record invariants before any projection is computed.
    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.principal <= Decimal::ZERO {
            return Err(MetricsError::invalid_input(format!(
                "Debt '{}' must have a positive principal",
                self.name
            )));
        }
        if self.balance < Decimal::ZERO || self.balance > self.principal {
            return Err(MetricsError::invalid_input(format!(
                "Debt '{}' balance {} must be between 0 and the principal {}",
                self.name, self.balance, self.principal
            )));
        }
        if self.annual_rate_pct < Decimal::ZERO {
            return Err(MetricsError::invalid_input(format!(
                "Debt '{}' cannot have a negative interest rate",
                self.name
            )));
        }
        if self.minimum_payment <= Decimal::ZERO {
            return Err(MetricsError::invalid_input(format!(
                "Debt '{}' must have a positive minimum payment",
                self.name
            )));
        }
        Ok(())
    }
}
