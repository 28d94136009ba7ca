//! # Attribute Values
//!
//! Typed positional parameters and record attributes, serialized in the
//! key-value store's tagged form (`{"S": "..."}`, `{"SS": [...]}`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A record stored in a table, keyed by attribute name
pub type Item = BTreeMap<String, AttributeValue>;

/// A single typed attribute value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// String
    S(String),

    /// String set
    SS(Vec<String>),
}

impl AttributeValue {
    /// Build a string value
    pub fn string(value: impl Into<String>) -> Self {
        AttributeValue::S(value.into())
    }

    /// Build a string set value
    pub fn string_set<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttributeValue::SS(values.into_iter().map(Into::into).collect())
    }

    /// Returns the inner string for `S` values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::S(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::S(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::S(value)
    }
}
