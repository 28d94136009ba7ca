//! # Statement Builder
//!
//! Turns a validated product into the write statement for the requested
//! operation.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::product::Product;
use crate::store::AttributeValue;

use super::types::{WriteOperation, WriteStatement};

/// Columns written by an insert, in parameter order
pub const INSERT_COLUMNS: [&str; 6] = [
    "id",
    "slug",
    "variations",
    "name",
    "date_created_gmt",
    "date_modified_gmt",
];

/// Columns assigned by an update
pub const UPDATE_COLUMNS: [&str; 3] = ["variations", "name", "date_modified_gmt"];

/// Key columns an update is matched on
pub const KEY_COLUMNS: [&str; 2] = ["id", "slug"];

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-05-01T10:00:00.000Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Builds statements against the products table
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    table: String,
}

impl StatementBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// Build the statement for one product.
    ///
    /// `now` is the build time of this item; inserts use it for both the
    /// created and modified dates.
    pub fn build(
        &self,
        product: &Product,
        operation: WriteOperation,
        now: DateTime<Utc>,
    ) -> WriteStatement {
        let timestamp = iso_timestamp(now);
        let variations = AttributeValue::string_set(product.variations.iter().cloned());

        match operation {
            WriteOperation::Insert => WriteStatement::insert(
                &self.table,
                &INSERT_COLUMNS,
                vec![
                    AttributeValue::string(product.id.as_str()),
                    AttributeValue::string(product.slug.as_str()),
                    variations,
                    AttributeValue::string(product.name.as_str()),
                    AttributeValue::string(timestamp.as_str()),
                    AttributeValue::string(timestamp),
                ],
            ),
            WriteOperation::Update => WriteStatement::update(
                &self.table,
                &UPDATE_COLUMNS,
                &KEY_COLUMNS,
                vec![
                    variations,
                    AttributeValue::string(product.name.as_str()),
                    AttributeValue::string(timestamp),
                    AttributeValue::string(product.id.as_str()),
                    AttributeValue::string(product.slug.as_str()),
                ],
            ),
        }
    }
}
