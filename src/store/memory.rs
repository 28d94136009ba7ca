//! # In-Memory Store
//!
//! Process-local implementation of [`ProductStore`] with the same per-item
//! conditional semantics as the hosted store:
//! - `INSERT` fails with `DuplicateItem` when the key already exists
//! - `UPDATE` fails with `ConditionalCheckFailed` when no record matches the key
//! - statements against unknown tables fail with `ResourceNotFound`

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use super::attribute::{AttributeValue, Item};
use super::errors::{StoreError, StoreResult};
use super::outcome::{BatchOutcome, BatchResult, StatementError};
use super::{ProductStore, StoreFuture, VARIATION_KEY};
use crate::statement::{WriteOperation, WriteStatement, KEY_COLUMNS};

/// A table keyed by the string values of its key attributes
#[derive(Debug, Default)]
struct Table {
    key_schema: Vec<String>,
    items: BTreeMap<Vec<String>, Item>,
}

impl Table {
    fn key_of<'a, I>(&self, mut lookup: I) -> Option<Vec<String>>
    where
        I: FnMut(&str) -> Option<&'a AttributeValue>,
    {
        self.key_schema
            .iter()
            .map(|k| lookup(k).and_then(AttributeValue::as_str).map(str::to_string))
            .collect()
    }

    fn apply(&mut self, statement: &WriteStatement) -> Result<(), StatementError> {
        let expected = statement.assignments.len() + statement.key.len();
        if statement.parameters.len() != expected {
            return Err(StatementError::new(
                "ValidationError",
                format!(
                    "Statement expects {} parameters, got {}",
                    expected,
                    statement.parameters.len()
                ),
            ));
        }

        match statement.operation {
            WriteOperation::Insert => {
                let item: Item = statement
                    .assigned_values()
                    .map(|(c, v)| (c.to_string(), v.clone()))
                    .collect();
                let key = self
                    .key_of(|k| item.get(k))
                    .ok_or_else(missing_key_attribute)?;

                if self.items.contains_key(&key) {
                    return Err(StatementError::new(
                        "DuplicateItem",
                        "Duplicate primary key exists in table",
                    ));
                }
                self.items.insert(key, item);
                Ok(())
            }
            WriteOperation::Update => {
                let key = self
                    .key_of(|k| statement.key_values().find(|(c, _)| *c == k).map(|(_, v)| v))
                    .ok_or_else(missing_key_attribute)?;

                let item = self.items.get_mut(&key).ok_or_else(|| {
                    StatementError::new("ConditionalCheckFailed", "The conditional request failed")
                })?;
                for (column, value) in statement.assigned_values() {
                    item.insert(column.to_string(), value.clone());
                }
                Ok(())
            }
        }
    }
}

fn missing_key_attribute() -> StatementError {
    StatementError::new(
        "ValidationError",
        "One or more key attributes are missing from the statement",
    )
}

/// In-memory key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Table>>,
    batch_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given key attributes.
    /// Replaces any existing table of the same name.
    pub fn create_table(&self, name: &str, key_schema: &[&str]) -> StoreResult<()> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;
        tables.insert(
            name.to_string(),
            Table {
                key_schema: key_schema.iter().map(|k| k.to_string()).collect(),
                items: BTreeMap::new(),
            },
        );
        Ok(())
    }

    /// Store with an empty products table and an empty variations table
    pub fn for_tables(products_table: &str, variations_table: &str) -> StoreResult<Self> {
        Self::new()
            .with_table(products_table, &KEY_COLUMNS)?
            .with_table(variations_table, &[VARIATION_KEY])
    }

    /// Builder form of [`MemoryStore::create_table`]
    pub fn with_table(self, name: &str, key_schema: &[&str]) -> StoreResult<Self> {
        self.create_table(name, key_schema)?;
        Ok(self)
    }

    /// Store an item directly, overwriting any record with the same key
    pub fn put_item(&self, table: &str, item: Item) -> StoreResult<()> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;
        let table_data = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;

        let key = table_data.key_of(|k| item.get(k)).ok_or_else(|| {
            StoreError::Internal(format!("Item is missing a key attribute of {}", table))
        })?;
        table_data.items.insert(key, item);
        Ok(())
    }

    /// Fetch one item by its full key, given in key-schema order
    pub fn get_item(&self, table: &str, key: &[&str]) -> StoreResult<Option<Item>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;
        let table_data = tables
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;

        let key: Vec<String> = key.iter().map(|k| k.to_string()).collect();
        Ok(table_data.items.get(&key).cloned())
    }

    /// Number of records in a table
    pub fn item_count(&self, table: &str) -> StoreResult<usize> {
        let tables = self
            .tables
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;
        tables
            .get(table)
            .map(|t| t.items.len())
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))
    }

    /// Number of `batch_execute` calls served so far
    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    fn execute_batch(&self, statements: &[WriteStatement]) -> StoreResult<BatchResult> {
        if statements.is_empty() {
            return Err(StoreError::EmptyBatch);
        }
        self.batch_calls.fetch_add(1, Ordering::SeqCst);

        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        let responses = statements
            .iter()
            .map(|statement| {
                let result = match tables.get_mut(&statement.table_name) {
                    Some(table) => table.apply(statement),
                    None => Err(StatementError::new(
                        "ResourceNotFound",
                        format!("Requested resource not found: {}", statement.table_name),
                    )),
                };
                match result {
                    Ok(()) => BatchOutcome::success(statement.table_name.as_str()),
                    Err(e) => BatchOutcome::failure(statement.table_name.as_str(), e),
                }
            })
            .collect();

        Ok(BatchResult::new(responses))
    }

    fn query(&self, table: &str, key: &str, value: &str) -> StoreResult<Vec<Item>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;
        let table_data = tables
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;

        Ok(table_data
            .items
            .values()
            .filter(|item| item.get(key).and_then(AttributeValue::as_str) == Some(value))
            .cloned()
            .collect())
    }
}

impl ProductStore for MemoryStore {
    fn batch_execute(&self, statements: Vec<WriteStatement>) -> StoreFuture<'_, BatchResult> {
        let result = self.execute_batch(&statements);
        Box::pin(async move { result })
    }

    fn query_by_key<'a>(
        &'a self,
        table: &'a str,
        key: &'a str,
        value: &'a str,
    ) -> StoreFuture<'a, Vec<Item>> {
        let result = self.query(table, key, value);
        Box::pin(async move { result })
    }
}
