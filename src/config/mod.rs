//! # Configuration
//!
//! Environment-backed settings, loaded once at startup and injected into the
//! handler. Nothing below this module reads the process environment.
//!
//! # Keys
//!
//! - `DEFAULT_REGION`
//! - `WORDPRESS_PRODUCTS_TABLE_NAME`
//! - `WORDPRESS_PRODUCT_VARIATIONS_TABLE_NAME`
//!
//! A `.env` file in the working directory is read first when present.

mod errors;

pub use errors::{ConfigError, ConfigResult};

use std::path::Path;

use serde::{Deserialize, Serialize};


pub const REGION_KEY: &str = "DEFAULT_REGION";
pub const PRODUCTS_TABLE_KEY: &str = "WORDPRESS_PRODUCTS_TABLE_NAME";
pub const VARIATIONS_TABLE_KEY: &str = "WORDPRESS_PRODUCT_VARIATIONS_TABLE_NAME";

/// Handler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Store region
    pub region: String,

    /// Table products are written to
    pub products_table: String,

    /// Table variations are looked up in
    pub variations_table: String,
}

impl Config {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> ConfigResult<Self> {
        load_dotenv()?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Empty values are treated as missing.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| -> ConfigResult<String> {
            match lookup(key).filter(|v| !v.trim().is_empty()) {
                Some(value) => Ok(value),
                None => Err(ConfigError::Missing { key }.reported()),
            }
        };

        Ok(Self {
            region: require(REGION_KEY)?,
            products_table: require(PRODUCTS_TABLE_KEY)?,
            variations_table: require(VARIATIONS_TABLE_KEY)?,
        })
    }
}

/// Load `.env` from the working directory; a missing file is not an error
pub fn load_dotenv() -> ConfigResult<()> {
    report_dotenv(dotenvy::dotenv().map(|_| ()))
}

/// Load an env file from `path`; a missing file is not an error
pub fn load_dotenv_from(path: &Path) -> ConfigResult<()> {
    report_dotenv(dotenvy::from_path(path))
}

fn report_dotenv(result: Result<(), dotenvy::Error>) -> ConfigResult<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::DotEnv(e.to_string()).reported()),
    }
}
