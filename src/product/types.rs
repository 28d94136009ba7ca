//! # Product Types

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A product that passed field validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id (key)
    pub id: String,

    /// Unique slug (key)
    pub slug: String,

    /// Display name
    pub name: String,

    /// Referenced variation ids, never empty
    pub variations: BTreeSet<String>,
}

/// Required product fields, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Id,
    Slug,
    Variations,
    Name,
}

impl ProductField {
    /// Field name as it appears in the request body
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Id => "id",
            ProductField::Slug => "slug",
            ProductField::Variations => "variations",
            ProductField::Name => "name",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
