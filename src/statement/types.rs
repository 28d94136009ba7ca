//! # Write Statements
//!
//! Parameterized statements submitted to the store in one batch. Values are
//! always bound positionally; the statement text only ever contains
//! identifiers and `?` placeholders.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::AttributeValue;

/// Kind of write requested for a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WriteOperation {
    /// Create new records (`POST`)
    Insert,
    /// Modify existing records (`PATCH`)
    Update,
}

impl WriteOperation {
    /// Map an HTTP method onto a write operation
    pub fn from_method(method: &str) -> Option<Self> {
        match method {
            "POST" => Some(WriteOperation::Insert),
            "PATCH" => Some(WriteOperation::Update),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOperation::Insert => "INSERT",
            WriteOperation::Update => "UPDATE",
        }
    }
}

impl fmt::Display for WriteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parameterized write against one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WriteStatement {
    /// Statement kind
    pub operation: WriteOperation,

    /// Target table
    pub table_name: String,

    /// Statement text with `?` placeholders
    pub statement: String,

    /// Columns written, in parameter order
    pub assignments: Vec<String>,

    /// Key columns matched by an `UPDATE`, bound after the assignments
    #[serde(default)]
    pub key: Vec<String>,

    /// Positional parameters
    pub parameters: Vec<AttributeValue>,
}

impl WriteStatement {
    /// Build an `INSERT` of one record
    pub fn insert(table: &str, columns: &[&str], parameters: Vec<AttributeValue>) -> Self {
        let fields = columns
            .iter()
            .map(|c| format!("'{}': ?", c))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            operation: WriteOperation::Insert,
            table_name: table.to_string(),
            statement: format!("INSERT INTO \"{}\" VALUE {{{}}}", table, fields),
            assignments: columns.iter().map(|c| c.to_string()).collect(),
            key: Vec::new(),
            parameters,
        }
    }

    /// Build an `UPDATE` of the record matched by `key`.
    ///
    /// `parameters` holds the assigned values followed by the key values.
    pub fn update(
        table: &str,
        assignments: &[&str],
        key: &[&str],
        parameters: Vec<AttributeValue>,
    ) -> Self {
        let set = assignments
            .iter()
            .map(|c| format!("{} = ?", c))
            .collect::<Vec<_>>()
            .join(", ");
        let condition = key
            .iter()
            .map(|c| format!("{} = ?", c))
            .collect::<Vec<_>>()
            .join(" AND ");

        Self {
            operation: WriteOperation::Update,
            table_name: table.to_string(),
            statement: format!("UPDATE \"{}\" SET {} WHERE {}", table, set, condition),
            assignments: assignments.iter().map(|c| c.to_string()).collect(),
            key: key.iter().map(|c| c.to_string()).collect(),
            parameters,
        }
    }

    /// Number of `?` placeholders in the statement text
    pub fn placeholder_count(&self) -> usize {
        self.statement.matches('?').count()
    }

    /// Assigned columns paired with their bound values
    pub fn assigned_values(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.assignments
            .iter()
            .map(String::as_str)
            .zip(self.parameters.iter())
    }

    /// Key columns paired with their bound values
    pub fn key_values(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.key
            .iter()
            .map(String::as_str)
            .zip(self.parameters.iter().skip(self.assignments.len()))
    }

    /// Look up the value bound to a column, in either the assignments or the key
    pub fn value_of(&self, column: &str) -> Option<&AttributeValue> {
        self.assigned_values()
            .chain(self.key_values())
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v)
    }
}
