//! # Field Validator
//!
//! Checks the required fields of one raw product, in order:
//! `id`, `slug`, `variations`, `name`. Stops at the first missing field.

use std::collections::BTreeSet;

use serde_json::Value;
use thiserror::Error;

use super::types::{Product, ProductField};

/// A required field is missing or empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No {field} for the product at index {index}")]
pub struct FieldError {
    /// Field that failed
    pub field: ProductField,

    /// Position of the product in the request body
    pub index: usize,

    /// Product id, when it was present
    pub id: Option<String>,
}

impl FieldError {
    fn new(field: ProductField, index: usize, id: Option<&str>) -> Self {
        Self {
            field,
            index,
            id: id.map(str::to_string),
        }
    }

    fn location(&self) -> String {
        match &self.id {
            Some(id) => format!("the product at index {} with id {}", self.index, id),
            None => format!("the product at index {}", self.index),
        }
    }

    /// Short description for logs and responses
    pub fn description(&self) -> String {
        format!("No {} for {}", self.field, self.location())
    }

    /// Error name for the response detail object
    pub fn name(&self) -> String {
        format!("No {} provided", self.field)
    }

    /// Instruction for the caller
    pub fn message(&self) -> String {
        match self.field {
            ProductField::Id => format!("Please provide an id for {}", self.location()),
            ProductField::Variations => format!(
                "Please provide an array of product variations IDs for {}",
                self.location()
            ),
            field => format!("Please provide a {} for {}", field, self.location()),
        }
    }
}

fn non_empty_str<'a>(raw: &'a Value, field: ProductField) -> Option<&'a str> {
    raw.get(field.as_str())
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn variation_ids(raw: &Value) -> Option<BTreeSet<String>> {
    let items = raw.get(ProductField::Variations.as_str())?.as_array()?;
    if items.is_empty() {
        return None;
    }

    items
        .iter()
        .map(|v| v.as_str().filter(|s| !s.is_empty()).map(str::to_string))
        .collect()
}

/// Validate one raw product from the request body
pub fn validate_product(raw: &Value, index: usize) -> Result<Product, FieldError> {
    let id = non_empty_str(raw, ProductField::Id)
        .ok_or_else(|| FieldError::new(ProductField::Id, index, None))?;

    let slug = non_empty_str(raw, ProductField::Slug)
        .ok_or_else(|| FieldError::new(ProductField::Slug, index, Some(id)))?;

    let variations = variation_ids(raw)
        .ok_or_else(|| FieldError::new(ProductField::Variations, index, Some(id)))?;

    let name = non_empty_str(raw, ProductField::Name)
        .ok_or_else(|| FieldError::new(ProductField::Name, index, Some(id)))?;

    Ok(Product {
        id: id.to_string(),
        slug: slug.to_string(),
        name: name.to_string(),
        variations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_product() {
        let raw = json!({"id": "1", "slug": "a", "name": "A", "variations": ["v2", "v1", "v1"]});
        let product = validate_product(&raw, 0).unwrap();
        assert_eq!(product.id, "1");
        assert_eq!(product.slug, "a");
        assert_eq!(product.name, "A");
        assert_eq!(product.variations.len(), 2);
    }

    #[test]
    fn test_missing_id() {
        let raw = json!({"slug": "a", "name": "A", "variations": ["v1"]});
        let err = validate_product(&raw, 3).unwrap_err();
        assert_eq!(err.field, ProductField::Id);
        assert_eq!(err.index, 3);
        assert!(err.id.is_none());
        assert_eq!(err.name(), "No id provided");
        assert_eq!(err.message(), "Please provide an id for the product at index 3");
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let raw = json!({"id": "1", "slug": "", "name": "A", "variations": ["v1"]});
        let err = validate_product(&raw, 0).unwrap_err();
        assert_eq!(err.field, ProductField::Slug);
        assert_eq!(err.id.as_deref(), Some("1"));
        assert_eq!(
            err.description(),
            "No slug for the product at index 0 with id 1"
        );
    }

    #[test]
    fn test_variations_missing_or_empty() {
        let absent = json!({"id": "1", "slug": "a", "name": "A"});
        assert_eq!(
            validate_product(&absent, 0).unwrap_err().field,
            ProductField::Variations
        );

        let empty = json!({"id": "1", "slug": "a", "name": "A", "variations": []});
        assert_eq!(
            validate_product(&empty, 0).unwrap_err().field,
            ProductField::Variations
        );

        let not_strings = json!({"id": "1", "slug": "a", "name": "A", "variations": [1, 2]});
        assert_eq!(
            validate_product(&not_strings, 0).unwrap_err().field,
            ProductField::Variations
        );
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        // Both variations and name are missing; variations is reported first.
        let raw = json!({"id": "1", "slug": "a"});
        let err = validate_product(&raw, 0).unwrap_err();
        assert_eq!(err.field, ProductField::Variations);

        let raw = json!({"id": "1", "slug": "a", "variations": ["v1"]});
        let err = validate_product(&raw, 0).unwrap_err();
        assert_eq!(err.field, ProductField::Name);
        assert_eq!(err.name(), "No name provided");
    }

    #[test]
    fn test_non_object_item() {
        let err = validate_product(&json!("not a product"), 1).unwrap_err();
        assert_eq!(err.field, ProductField::Id);
    }
}
