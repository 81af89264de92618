//! Storage-specific error types for the JSON-backed store.
//!
//! This module provides error types that wrap I/O and serde errors and convert
//! them to the storage-agnostic error types defined in `finboard_core`.

use finboard_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors raised while loading a dataset.
///
/// These errors are internal to the storage layer and are converted to
/// `finboard_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {entity} id '{id}'")]
    DuplicateId { entity: &'static str, id: String },

    #[error("Invalid dataset: {0}")]
    Invalid(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => Error::Database(DatabaseError::ConnectionFailed(e.to_string())),
            StorageError::Parse(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
            StorageError::DuplicateId { entity, id } => Error::Database(
                DatabaseError::UniqueViolation(format!("{} id '{}'", entity, id)),
            ),
            StorageError::Invalid(e) => Error::Database(DatabaseError::Internal(e)),
        }
    }
}
