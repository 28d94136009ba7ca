//! # Ingest Errors
//!
//! Two result kinds leave an invocation:
//! - [`RequestError`]: the request was rejected; it becomes a normal `400`
//!   response and no write is issued
//! - [`InvocationError`]: the invocation itself could not complete (the store
//!   call failed as a whole); surfaced to the trigger as a failure

use thiserror::Error;

pub use crate::observability::ErrorDetail;
use crate::product::FieldError;
use crate::store::StoreError;

/// Result type for a single invocation
pub type InvocationResult<T> = Result<T, InvocationError>;

/// Referenced variations that do not exist in the variations table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing variations {missing:?} for the product at index {index} with id {product_id}")]
pub struct DependencyError {
    /// Position of the product in the request body
    pub index: usize,

    /// Id of the referencing product
    pub product_id: String,

    /// Every missing variation id of that product, sorted
    pub missing: Vec<String>,
}

/// Request rejected before any write
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("No request body provided")]
    MissingBody,

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("Request body is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    #[error("Request body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Request body is not an array")]
    NotAnArray,

    #[error("No products provided")]
    NoProducts,

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Dependency(#[from] DependencyError),
}

impl RequestError {
    /// Short description shown alongside the detail
    pub fn description(&self) -> String {
        match self {
            RequestError::MissingBody => "Validation Error in provided event".to_string(),
            RequestError::UnsupportedMethod(_) => "Please provide a valid http method".to_string(),
            RequestError::InvalidEncoding(_)
            | RequestError::InvalidJson(_)
            | RequestError::NotAnArray => {
                "Validation Error in provided event".to_string()
            }
            RequestError::NoProducts => "Validation Error in provided products".to_string(),
            RequestError::Field(e) => e.description(),
            RequestError::Dependency(e) => format!(
                "Missing product variations for the product at index {} with id {}",
                e.index, e.product_id
            ),
        }
    }

    /// `{name, message}` detail
    pub fn detail(&self) -> ErrorDetail {
        match self {
            RequestError::MissingBody => ErrorDetail::new(
                "No arguments provided",
                "Please provide an array of products with all the required properties",
            ),
            RequestError::UnsupportedMethod(_) => ErrorDetail::new(
                "Only POST and PATCH are supported",
                "Please send a POST http request to add a new product and a PATCH http request to update existing products",
            ),
            RequestError::InvalidEncoding(reason) => ErrorDetail::new(
                "Invalid body encoding",
                format!("Please provide a UTF-8 encoded JSON array of products: {}", reason),
            ),
            RequestError::InvalidJson(reason) => ErrorDetail::new(
                "Invalid JSON body",
                format!("Please provide a valid JSON array of products: {}", reason),
            ),
            RequestError::NotAnArray => ErrorDetail::new(
                "Invalid products body",
                "Please provide an array of products with all the required properties",
            ),
            RequestError::NoProducts => ErrorDetail::new(
                "No products provided",
                "Please provide an array of products with all the required properties",
            ),
            RequestError::Field(e) => ErrorDetail::new(e.name(), e.message()),
            RequestError::Dependency(e) => ErrorDetail::new(
                "Missing product variations",
                format!(
                    "Product variations {} referenced by the product at index {} with id {} do not exist. Please create them first",
                    e.missing.join(", "),
                    e.index,
                    e.product_id
                ),
            ),
        }
    }
}

/// The invocation could not run to completion
#[derive(Debug, Clone, Error)]
pub enum InvocationError {
    #[error("Store call failed: {0}")]
    Store(#[from] StoreError),

    #[error("Batch returned {actual} outcomes for {expected} statements")]
    OutcomeMismatch { expected: usize, actual: usize },
}

impl InvocationError {
    /// `{name, message}` detail
    pub fn detail(&self) -> ErrorDetail {
        match self {
            InvocationError::Store(e) => ErrorDetail::new(e.name(), e.to_string()),
            InvocationError::OutcomeMismatch { .. } => {
                ErrorDetail::new("InternalServerError", self.to_string())
            }
        }
    }

    /// HTTP status reported to the trigger
    pub fn status_code(&self) -> u16 {
        500
    }
}
