//! # Products
//!
//! Product records accepted by the batch writer and the field validation
//! applied to each one before any store access.

mod types;
mod validator;

pub use types::{Product, ProductField};
pub use validator::{validate_product, FieldError};
