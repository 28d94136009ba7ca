//! # Batch Executor
//!
//! Submits the collected statements in a single store call.

use std::sync::Arc;

use super::errors::{InvocationError, InvocationResult};
use crate::statement::WriteStatement;
use crate::store::{BatchResult, ProductStore, StoreError};

/// Runs one batch per invocation
#[derive(Clone)]
pub struct BatchExecutor {
    store: Arc<dyn ProductStore>,
}

impl BatchExecutor {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Execute `statements` as one batch.
    ///
    /// An empty batch never reaches the store. The result holds exactly one
    /// outcome per statement, in submission order.
    pub async fn execute(&self, statements: Vec<WriteStatement>) -> InvocationResult<BatchResult> {
        if statements.is_empty() {
            return Err(StoreError::EmptyBatch.into());
        }

        let expected = statements.len();
        let result = self.store.batch_execute(statements).await?;

        if result.len() != expected {
            return Err(InvocationError::OutcomeMismatch {
                expected,
                actual: result.len(),
            });
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Item, MemoryStore, StoreFuture};

    /// Store that drops the last outcome of every batch
    struct TruncatingStore;

    impl ProductStore for TruncatingStore {
        fn batch_execute(&self, statements: Vec<WriteStatement>) -> StoreFuture<'_, BatchResult> {
            let mut outcomes: Vec<_> = statements
                .iter()
                .map(|s| crate::store::BatchOutcome::success(s.table_name.as_str()))
                .collect();
            outcomes.pop();
            Box::pin(async move { Ok(BatchResult::new(outcomes)) })
        }

        fn query_by_key<'a>(
            &'a self,
            _table: &'a str,
            _key: &'a str,
            _value: &'a str,
        ) -> StoreFuture<'a, Vec<Item>> {
            Box::pin(async { Ok(Vec::new()) })
        }
    }

    fn insert(id: &str) -> WriteStatement {
        WriteStatement::insert("products", &["id", "slug"], vec![id.into(), "s".into()])
    }

    #[tokio::test]
    async fn test_empty_batch_never_reaches_store() {
        let store = Arc::new(MemoryStore::new());
        let executor = BatchExecutor::new(store.clone());
        let err = executor.execute(Vec::new()).await.unwrap_err();
        assert!(matches!(err, InvocationError::Store(StoreError::EmptyBatch)));
        assert_eq!(store.batch_calls(), 0);
    }

    #[tokio::test]
    async fn test_one_outcome_per_statement() {
        let store = Arc::new(MemoryStore::new().with_table("products", &["id", "slug"]).unwrap());
        let executor = BatchExecutor::new(store.clone());
        let result = executor
            .execute(vec![insert("1"), insert("2"), insert("1")])
            .await
            .unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.responses[2].is_error());
        assert_eq!(store.batch_calls(), 1);
    }

    #[tokio::test]
    async fn test_outcome_count_mismatch() {
        let executor = BatchExecutor::new(Arc::new(TruncatingStore));
        let err = executor.execute(vec![insert("1"), insert("2")]).await.unwrap_err();
        assert!(matches!(
            err,
            InvocationError::OutcomeMismatch { expected: 2, actual: 1 }
        ));
    }
}
