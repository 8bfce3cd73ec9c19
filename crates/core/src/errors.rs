//! Core error types for mesobook.
//!
//! This module defines storage-agnostic error types. Storage-specific
//! failures (file I/O, JSON decoding) are converted to these types by the
//! storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the budget tracker.
///
/// Nothing in the core is fatal: validation failures are reported to the
/// caller as structured variants, and storage failures are surfaced as
/// non-fatal warnings by the ledger.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Goal error: {0}")]
    Goal(#[from] GoalError),

    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    #[error("Field '{field}' exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Unknown equipment slot '{0}'")]
    UnknownSlot(String),
}

/// Errors specific to transaction records.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Record {0} not found")]
    NotFound(i64),
}

/// Errors specific to savings goals.
#[derive(Error, Debug)]
pub enum GoalError {
    #[error("Goal {0} not found")]
    NotFound(i64),

    #[error("Goal {0} has not been achieved yet")]
    NotAchieved(i64),

    #[error("At most {0} active goals are allowed")]
    ActiveLimitReached(usize),
}

/// Storage-agnostic error type for snapshot persistence.
///
/// Uses `String` payloads so the storage layer can convert its own error
/// types (I/O, JSON) into this format.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read snapshot: {0}")]
    Read(String),

    #[error("Failed to write snapshot: {0}")]
    Write(String),

    #[error("Failed to encode or decode snapshot: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageError::Serialization(err.to_string()))
    }
}
