//! # Observability
//!
//! Structured logging via `tracing`.
//!
//! - `init_tracing`: install the global subscriber (binary only)
//! - `log_error`: the single sink for request-level failures; every
//!   rejection is reported here before its response is built

mod logger;

pub use logger::{init_tracing, log_error, ErrorDetail, LogFormat};
