//! # Batch Outcomes
//!
//! Result shape of one batch execution. Field names follow the store's own
//! response format so the raw result can be returned to callers unchanged.

use serde::{Deserialize, Serialize};

use super::attribute::Item;

/// Error attached to a single failed statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatementError {
    /// Store error code, e.g. `ConditionalCheckFailed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Human readable message
    pub message: String,
}

impl StatementError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Outcome of one statement inside a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchOutcome {
    /// Table the statement targeted
    pub table_name: String,

    /// Returned item, if the statement produced one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,

    /// Present when the statement failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<StatementError>,
}

impl BatchOutcome {
    /// Successful outcome
    pub fn success(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            item: None,
            error: None,
        }
    }

    /// Failed outcome
    pub fn failure(table_name: impl Into<String>, error: StatementError) -> Self {
        Self {
            table_name: table_name.into(),
            item: None,
            error: Some(error),
        }
    }

    /// Whether this statement failed
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Raw result of a batch execution, one response per submitted statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchResult {
    pub responses: Vec<BatchOutcome>,
}

impl BatchResult {
    pub fn new(responses: Vec<BatchOutcome>) -> Self {
        Self { responses }
    }

    /// Number of outcomes
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}
