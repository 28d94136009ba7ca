//! # Existence Checker
//!
//! Confirms that every variation a product references exists in the
//! variations table. Lookups for one product run concurrently.

use std::sync::Arc;

use futures_util::future::try_join_all;

use crate::product::Product;
use crate::store::{ProductStore, StoreError, StoreResult, VARIATION_KEY};

/// Looks up variation references in the secondary table
#[derive(Clone)]
pub struct ExistenceChecker {
    store: Arc<dyn ProductStore>,
    table: String,
}

impl ExistenceChecker {
    pub fn new(store: Arc<dyn ProductStore>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }

    /// Every variation id of `product` with no matching record, sorted.
    ///
    /// All ids are checked; an empty result means every reference resolves.
    pub async fn missing_variations(&self, product: &Product) -> StoreResult<Vec<String>> {
        let lookups = product.variations.iter().map(|id| async move {
            let records = self
                .store
                .query_by_key(&self.table, VARIATION_KEY, id)
                .await?;
            Ok::<_, StoreError>((id, records.is_empty()))
        });

        let results = try_join_all(lookups).await?;
        Ok(results
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(id, _)| id.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Item, MemoryStore};

    fn store_with(variations: &[&str]) -> Arc<MemoryStore> {
        let store = MemoryStore::new().with_table("variations", &["id"]).unwrap();
        for id in variations {
            let mut item = Item::new();
            item.insert("id".into(), (*id).into());
            store.put_item("variations", item).unwrap();
        }
        Arc::new(store)
    }

    fn product(variations: &[&str]) -> Product {
        Product {
            id: "1".into(),
            slug: "a".into(),
            name: "A".into(),
            variations: variations.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_all_present() {
        let checker = ExistenceChecker::new(store_with(&["v1", "v2"]), "variations");
        let missing = checker.missing_variations(&product(&["v1", "v2"])).await.unwrap();
        assert!(missing.is_empty());
    }

    #[tokio::test]
    async fn test_reports_every_missing_id() {
        let checker = ExistenceChecker::new(store_with(&["v2"]), "variations");
        let missing = checker
            .missing_variations(&product(&["v3", "v1", "v2"]))
            .await
            .unwrap();
        assert_eq!(missing, vec!["v1".to_string(), "v3".to_string()]);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let checker = ExistenceChecker::new(store_with(&[]), "no_such_table");
        let err = checker.missing_variations(&product(&["v1"])).await.unwrap_err();
        assert!(matches!(err, StoreError::TableNotFound(_)));
    }
}
