//! # Response Aggregator
//!
//! Turns a batch result into the final response. Every failed outcome is
//! listed; nothing is retried.

use super::response::{ErrorEntry, HandlerResponse};
use crate::observability::log_error;
use crate::store::BatchResult;

/// Build the response for a completed batch
pub fn aggregate(result: BatchResult) -> HandlerResponse {
    let errors: Vec<ErrorEntry> = result
        .responses
        .iter()
        .enumerate()
        .filter_map(|(index, outcome)| ErrorEntry::from_outcome(index, outcome))
        .collect();

    if errors.is_empty() {
        return HandlerResponse::success(result);
    }

    for entry in &errors {
        log_error(&entry.description, &entry.error);
    }
    HandlerResponse::partial_failure(errors)
}
