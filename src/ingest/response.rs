//! # Invocation Response
//!
//! Responses carry a status code and a body of either
//! `{"data": <raw batch result>}` or `{"errors": [...]}`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::errors::{ErrorDetail, RequestError};
use crate::store::{BatchOutcome, BatchResult};

/// Status codes produced by the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    Success,
    Error,
}

impl ResponseStatus {
    pub fn code(&self) -> u16 {
        match self {
            ResponseStatus::Success => 200,
            ResponseStatus::Error => 400,
        }
    }
}

/// Per-invocation states; the last three are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvocationState {
    Received,
    Validating,
    Building,
    Executing,
    Rejected,
    PartialFailure,
    Success,
}

impl fmt::Display for InvocationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvocationState::Received => "RECEIVED",
            InvocationState::Validating => "VALIDATING",
            InvocationState::Building => "BUILDING",
            InvocationState::Executing => "EXECUTING",
            InvocationState::Rejected => "REJECTED",
            InvocationState::PartialFailure => "PARTIAL_FAILURE",
            InvocationState::Success => "SUCCESS",
        };
        f.write_str(s)
    }
}

/// One entry of an `errors` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub description: String,
    pub error: ErrorDetail,

    /// Position of the failed statement in the batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    /// Table the failed statement targeted
    #[serde(default, rename = "tableName", skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

impl ErrorEntry {
    pub fn new(description: impl Into<String>, error: ErrorDetail) -> Self {
        Self {
            description: description.into(),
            error,
            index: None,
            table_name: None,
        }
    }

    /// Entry for a request rejected before any write
    pub fn from_request_error(err: &RequestError) -> Self {
        Self::new(err.description(), err.detail())
    }

    /// Entry for a failed batch outcome; `None` for successful outcomes
    pub fn from_outcome(index: usize, outcome: &BatchOutcome) -> Option<Self> {
        let error = outcome.error.as_ref()?;
        Some(Self {
            description: format!(
                "Statement at index {} against {} failed",
                index, outcome.table_name
            ),
            error: ErrorDetail::new(
                error.code.as_deref().unwrap_or("BatchStatementError"),
                error.message.as_str(),
            ),
            index: Some(index),
            table_name: Some(outcome.table_name.clone()),
        })
    }
}

/// Response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseBody {
    Data(BatchResult),
    Errors(Vec<ErrorEntry>),
}

/// Final result of a completed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: ResponseStatus,
    pub body: ResponseBody,
    state: InvocationState,
}

impl HandlerResponse {
    /// Request rejected before any write
    pub fn rejected(err: &RequestError) -> Self {
        Self {
            status: ResponseStatus::Error,
            body: ResponseBody::Errors(vec![ErrorEntry::from_request_error(err)]),
            state: InvocationState::Rejected,
        }
    }

    /// Batch ran and at least one statement failed
    pub fn partial_failure(errors: Vec<ErrorEntry>) -> Self {
        Self {
            status: ResponseStatus::Error,
            body: ResponseBody::Errors(errors),
            state: InvocationState::PartialFailure,
        }
    }

    /// Batch ran and every statement succeeded
    pub fn success(result: BatchResult) -> Self {
        Self {
            status: ResponseStatus::Success,
            body: ResponseBody::Data(result),
            state: InvocationState::Success,
        }
    }

    /// HTTP status code
    pub fn status_code(&self) -> u16 {
        self.status.code()
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, ResponseStatus::Success)
    }

    /// Terminal state the invocation ended in
    pub fn state(&self) -> InvocationState {
        self.state
    }

    /// Error entries, empty on success
    pub fn errors(&self) -> &[ErrorEntry] {
        match &self.body {
            ResponseBody::Errors(errors) => errors,
            ResponseBody::Data(_) => &[],
        }
    }

    /// Body as a JSON value
    pub fn body_json(&self) -> Value {
        serde_json::to_value(&self.body).unwrap_or(Value::Null)
    }

    /// Gateway proxy envelope: `{"statusCode": .., "body": "<json string>"}`
    pub fn to_proxy_json(&self) -> Value {
        json!({
            "statusCode": self.status_code(),
            "body": self.body_json().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StatementError;

    #[test]
    fn test_rejected_shape() {
        let resp = HandlerResponse::rejected(&RequestError::NoProducts);
        assert_eq!(resp.status_code(), 400);
        assert_eq!(resp.state(), InvocationState::Rejected);

        let body = resp.body_json();
        assert_eq!(body["errors"][0]["error"]["name"], "No products provided");
        assert!(body["errors"][0]["description"].is_string());
        assert!(body["errors"][0].get("index").is_none());
    }

    #[test]
    fn test_success_shape() {
        let result = BatchResult::new(vec![BatchOutcome::success("products")]);
        let resp = HandlerResponse::success(result);
        assert!(resp.is_success());
        assert!(resp.errors().is_empty());
        assert_eq!(
            resp.body_json()["data"]["Responses"][0]["TableName"],
            "products"
        );
    }

    #[test]
    fn test_entry_from_outcome() {
        assert!(ErrorEntry::from_outcome(0, &BatchOutcome::success("products")).is_none());

        let failed = BatchOutcome::failure(
            "products",
            StatementError::new("ConditionalCheckFailed", "The conditional request failed"),
        );
        let entry = ErrorEntry::from_outcome(4, &failed).unwrap();
        assert_eq!(entry.index, Some(4));
        assert_eq!(entry.error.name, "ConditionalCheckFailed");
        assert_eq!(entry.table_name.as_deref(), Some("products"));
    }

    #[test]
    fn test_proxy_envelope() {
        let resp = HandlerResponse::rejected(&RequestError::MissingBody);
        let envelope = resp.to_proxy_json();
        assert_eq!(envelope["statusCode"], 400);

        let body: Value = serde_json::from_str(envelope["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["errors"][0]["error"]["name"], "No arguments provided");
    }

    #[test]
    fn test_state_display() {
        assert_eq!(InvocationState::Rejected.to_string(), "REJECTED");
        assert_eq!(InvocationState::PartialFailure.to_string(), "PARTIAL_FAILURE");
    }
}
