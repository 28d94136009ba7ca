//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of a store call as a whole.
///
/// Per-statement failures inside a batch are not errors at this level; they
/// are reported as [`super::BatchOutcome`]s.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Batch must contain at least one statement")]
    EmptyBatch,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Stable error name used in response detail objects
    pub fn name(&self) -> &'static str {
        match self {
            StoreError::TableNotFound(_) => "ResourceNotFoundException",
            StoreError::EmptyBatch => "ValidationException",
            StoreError::Internal(_) => "InternalServerError",
        }
    }
}
