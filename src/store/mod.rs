//! # Store
//!
//! Seam to the key-value store holding products and variations.
//!
//! The store exposes two calls:
//! - `batch_execute`: run parameterized statements, one outcome per statement
//!   in submission order, each succeeding or failing on its own
//! - `query_by_key`: fetch the records of one table matching a key value

mod attribute;
mod errors;
mod memory;
mod outcome;

use std::future::Future;
use std::pin::Pin;

pub use attribute::{AttributeValue, Item};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use outcome::{BatchOutcome, BatchResult, StatementError};

use crate::statement::WriteStatement;

/// Key attribute variation records are looked up by
pub const VARIATION_KEY: &str = "id";

/// Boxed future returned by store calls
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>;

/// Client for the key-value store.
///
/// Implementations are shared across invocations behind an `Arc` and must
/// not require per-request mutation of the client itself.
pub trait ProductStore: Send + Sync {
    /// Execute all statements as one batch
    fn batch_execute(&self, statements: Vec<WriteStatement>) -> StoreFuture<'_, BatchResult>;

    /// Return every record of `table` whose `key` attribute equals `value`
    fn query_by_key<'a>(
        &'a self,
        table: &'a str,
        key: &'a str,
        value: &'a str,
    ) -> StoreFuture<'a, Vec<Item>>;
}
