//! # Invocation Request
//!
//! One HTTP invocation: method plus raw body. Parsing happens in stages so
//! each input error is reported on its own.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::errors::RequestError;
use crate::statement::WriteOperation;

/// A single invocation of the batch writer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationRequest {
    /// Invocation id, used to correlate log lines
    pub id: Uuid,

    /// HTTP method, as received
    pub method: String,

    /// Raw request body
    #[serde(default)]
    pub body: Option<String>,
}

impl InvocationRequest {
    pub fn new(method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            method: method.into(),
            body,
        }
    }

    /// Build a request from a raw body; empty bytes mean no body.
    ///
    /// Bytes that are not valid UTF-8 are rejected, never repaired.
    pub fn from_bytes(method: impl Into<String>, body: &[u8]) -> Result<Self, RequestError> {
        let body = if body.is_empty() {
            None
        } else {
            let text = String::from_utf8(body.to_vec())
                .map_err(|e| RequestError::InvalidEncoding(e.utf8_error().to_string()))?;
            Some(text)
        };
        Ok(Self::new(method, body))
    }

    /// Non-blank body
    pub fn body(&self) -> Result<&str, RequestError> {
        self.body
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .ok_or(RequestError::MissingBody)
    }

    /// Write operation selected by the method
    pub fn operation(&self) -> Result<WriteOperation, RequestError> {
        WriteOperation::from_method(&self.method)
            .ok_or_else(|| RequestError::UnsupportedMethod(self.method.clone()))
    }
}

/// Parse the body into raw product values; an empty array is rejected
pub fn parse_products(body: &str) -> Result<Vec<Value>, RequestError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| RequestError::InvalidJson(e.to_string()))?;

    match value {
        Value::Array(items) if items.is_empty() => Err(RequestError::NoProducts),
        Value::Array(items) => Ok(items),
        _ => Err(RequestError::NotAnArray),
    }
}
