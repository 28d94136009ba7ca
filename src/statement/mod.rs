//! # Statements
//!
//! Parameterized write statements and the builder that produces them from
//! validated products.

mod builder;
mod types;

pub use builder::{iso_timestamp, StatementBuilder, INSERT_COLUMNS, KEY_COLUMNS, UPDATE_COLUMNS};
pub use types::{WriteOperation, WriteStatement};
