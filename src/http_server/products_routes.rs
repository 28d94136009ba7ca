//! Products HTTP Routes
//!
//! `/products` accepts every method so that unsupported ones still receive
//! the structured error body from the handler.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde::Serialize;

use crate::ingest::{BatchHandler, ErrorEntry, InvocationRequest};

// ==================
// Shared State
// ==================

/// Products state shared across handlers
pub struct ProductsState {
    pub handler: BatchHandler,
}

impl ProductsState {
    pub fn new(handler: BatchHandler) -> Self {
        Self { handler }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
struct FailureResponse {
    errors: Vec<ErrorEntry>,
}

// ==================
// Products Routes
// ==================

/// Create products routes
pub fn products_routes(state: Arc<ProductsState>) -> Router {
    Router::new()
        .route("/products", any(products_handler))
        .with_state(state)
}

async fn products_handler(
    State(state): State<Arc<ProductsState>>,
    method: Method,
    body: Bytes,
) -> Response {
    let result = match InvocationRequest::from_bytes(method.as_str(), &body) {
        Ok(request) => state.handler.handle(request).await,
        Err(rejection) => Ok(state.handler.reject(rejection)),
    };

    match result {
        Ok(response) => {
            let status =
                StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
            (status, Json(response.body)).into_response()
        }
        Err(e) => {
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let errors = vec![ErrorEntry::new("Invocation failed", e.detail())];
            (status, Json(FailureResponse { errors })).into_response()
        }
    }
}
