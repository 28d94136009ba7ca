//! # Batch Handler
//!
//! Runs one invocation end to end.
//!
//! Flow:
//! 1. Reject a missing body or an unsupported method
//! 2. Parse the body; reject an empty array
//! 3. Per product: validate fields, check variations, build the statement
//! 4. Execute all statements in one batch
//! 5. Aggregate outcomes into the response
//!
//! Any rejection in steps 1-3 ends the invocation before a write is issued.

use std::sync::Arc;

use chrono::Utc;
use tracing::Instrument;

use super::aggregator::aggregate;
use super::errors::{DependencyError, ErrorDetail, InvocationResult, RequestError};
use super::executor::BatchExecutor;
use super::existence::ExistenceChecker;
use super::request::{parse_products, InvocationRequest};
use super::response::{HandlerResponse, InvocationState};
use crate::config::Config;
use crate::observability::log_error;
use crate::product::validate_product;
use crate::statement::{StatementBuilder, WriteStatement};
use crate::store::ProductStore;

/// Handler shared by every invocation in the process
#[derive(Clone)]
pub struct BatchHandler {
    config: Arc<Config>,
    checker: ExistenceChecker,
    builder: StatementBuilder,
    executor: BatchExecutor,
}

impl BatchHandler {
    pub fn new(config: Config, store: Arc<dyn ProductStore>) -> Self {
        Self {
            checker: ExistenceChecker::new(store.clone(), config.variations_table.as_str()),
            builder: StatementBuilder::new(config.products_table.as_str()),
            executor: BatchExecutor::new(store),
            config: Arc::new(config),
        }
    }

    /// Handle one invocation.
    ///
    /// Rejections and per-statement failures come back as `Ok` responses;
    /// `Err` means the store call itself failed.
    pub async fn handle(&self, request: InvocationRequest) -> InvocationResult<HandlerResponse> {
        let span = tracing::info_span!(
            "invocation",
            id = %request.id,
            method = %request.method,
        );
        self.run(request).instrument(span).await
    }

    async fn run(&self, request: InvocationRequest) -> InvocationResult<HandlerResponse> {
        tracing::info!(state = %InvocationState::Received, "handler called");

        let statements = match self.prepare(&request).await? {
            Ok(statements) => statements,
            Err(rejection) => return Ok(self.reject(rejection)),
        };

        tracing::info!(
            state = %InvocationState::Executing,
            statements = statements.len(),
            table = %self.config.products_table,
            "submitting batch"
        );
        let result = self.executor.execute(statements).await.inspect_err(|e| {
            log_error("Batch execution failed", &e.detail());
        })?;

        let response = aggregate(result);
        tracing::info!(
            state = %response.state(),
            status = response.status_code(),
            "invocation finished"
        );
        Ok(response)
    }

    /// Validate the request and build every statement.
    ///
    /// The outer result fails only on store errors during lookups; the inner
    /// one carries the rejection, if any.
    async fn prepare(
        &self,
        request: &InvocationRequest,
    ) -> InvocationResult<Result<Vec<WriteStatement>, RequestError>> {
        let body = match request.body() {
            Ok(body) => body,
            Err(e) => return Ok(Err(e)),
        };
        let operation = match request.operation() {
            Ok(op) => op,
            Err(e) => return Ok(Err(e)),
        };
        let items = match parse_products(body) {
            Ok(items) => items,
            Err(e) => return Ok(Err(e)),
        };

        tracing::debug!(
            state = %InvocationState::Validating,
            products = items.len(),
            operation = %operation,
            "validating products"
        );

        let mut statements = Vec::with_capacity(items.len());
        for (index, raw) in items.iter().enumerate() {
            let product = match validate_product(raw, index) {
                Ok(product) => product,
                Err(e) => return Ok(Err(e.into())),
            };

            let missing = self.checker.missing_variations(&product).await.inspect_err(|e| {
                log_error(
                    "Variation lookup failed",
                    &ErrorDetail::new(e.name(), e.to_string()),
                );
            })?;
            if !missing.is_empty() {
                return Ok(Err(DependencyError {
                    index,
                    product_id: product.id,
                    missing,
                }
                .into()));
            }

            tracing::trace!(
                state = %InvocationState::Building,
                index,
                id = %product.id,
                "building statement"
            );
            statements.push(self.builder.build(&product, operation, Utc::now()));
        }

        Ok(Ok(statements))
    }

    /// Log a rejection and build its response.
    ///
    /// Also used by triggers that reject a request before it can be built.
    pub fn reject(&self, err: RequestError) -> HandlerResponse {
        log_error(&err.description(), &err.detail());
        tracing::info!(state = %InvocationState::Rejected, "invocation rejected");
        HandlerResponse::rejected(&err)
    }
}
