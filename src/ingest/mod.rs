//! # Ingest
//!
//! The validation-and-batch-write pipeline.
//!
//! Per product: field validation, variation existence check, statement
//! building. Then one batch execution and aggregation of per-item failures.
//!
//! # States
//!
//! `RECEIVED → VALIDATING → {REJECTED | BUILDING} → EXECUTING → {PARTIAL_FAILURE | SUCCESS}`

mod aggregator;
mod errors;
mod executor;
mod existence;
mod handler;
mod request;
mod response;

pub use aggregator::aggregate;
pub use errors::{DependencyError, ErrorDetail, InvocationError, InvocationResult, RequestError};
pub use executor::BatchExecutor;
pub use existence::ExistenceChecker;
pub use handler::BatchHandler;
pub use request::{parse_products, InvocationRequest};
pub use response::{ErrorEntry, HandlerResponse, InvocationState, ResponseBody, ResponseStatus};
