//! Core error types for finboard.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted to these types by the storage layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Metrics calculation failed: {0}")]
    Metrics(#[from] MetricsError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for repository operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The data source could not be opened or read.
    #[error("Failed to open data source: {0}")]
    ConnectionFailed(String),

    /// A query against the data source failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate id).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Internal/unexpected storage error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for stored records.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

/// Typed failures of the metrics engine.
///
/// None of these are transient. They are deterministic consequences of the
/// inputs and the presentation layer decides how to render them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// A precondition on the inputs does not hold.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A ratio was requested over a zero (or negative) base.
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// The payment does not cover the interest accruing each month.
    #[error(
        "A monthly payment of {monthly_payment} does not cover {monthly_interest} of monthly interest; this debt will never be paid off"
    )]
    UnpayableDebt {
        monthly_payment: Decimal,
        monthly_interest: Decimal,
    },

    /// A goal with a remaining balance and no monthly contribution.
    #[error(
        "{remaining} remaining with no monthly contribution; {required_monthly_contribution} per month would reach the target date"
    )]
    Unreachable {
        remaining: Decimal,
        required_monthly_contribution: Decimal,
    },
}

/// Serializable tag for a [`MetricsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricsErrorKind {
    InvalidInput,
    DivisionByZero,
    UnpayableDebt,
    Unreachable,
}

impl MetricsError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        MetricsError::InvalidInput(message.into())
    }

    pub fn kind(&self) -> MetricsErrorKind {
        match self {
            MetricsError::InvalidInput(_) => MetricsErrorKind::InvalidInput,
            MetricsError::DivisionByZero(_) => MetricsErrorKind::DivisionByZero,
            MetricsError::UnpayableDebt { .. } => MetricsErrorKind::UnpayableDebt,
            MetricsError::Unreachable { .. } => MetricsErrorKind::Unreachable,
        }
    }
}
