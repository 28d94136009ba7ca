//! CLI command implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_body, write_json};
use crate::config::Config;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::ingest::{BatchHandler, InvocationRequest};
use crate::store::{Item, MemoryStore};

/// Initial table contents for the in-memory store
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    /// Records for the products table
    #[serde(default)]
    pub products: Vec<Item>,

    /// Records for the variations table
    #[serde(default)]
    pub variations: Vec<Item>,
}

impl Seed {
    /// Read a seed file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::io_error(format!("Failed to read seed file {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Build the in-memory store for `config`, optionally seeded
pub fn build_store(config: &Config, seed: Option<&Path>) -> CliResult<MemoryStore> {
    let store = MemoryStore::for_tables(&config.products_table, &config.variations_table)?;

    if let Some(path) = seed {
        let seed = Seed::load(path)?;
        let (products, variations) = (seed.products.len(), seed.variations.len());
        for item in seed.products {
            store.put_item(&config.products_table, item)?;
        }
        for item in seed.variations {
            store.put_item(&config.variations_table, item)?;
        }
        tracing::info!(products, variations, seed = %path.display(), "store seeded");
    }

    Ok(store)
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub async fn run(cli: Cli) -> CliResult<()> {
    run_command(cli.command).await
}

/// Run the appropriate command based on CLI args
pub async fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { host, port, seed } => serve(host, port, seed.as_deref()).await,
        Command::Invoke { method, seed } => invoke(&method, seed.as_deref()).await,
    }
}

/// Start the HTTP trigger
pub async fn serve(host: Option<String>, port: Option<u16>, seed: Option<&Path>) -> CliResult<()> {
    let config = Config::from_env()?;
    let mut http_config = HttpServerConfig::from_lookup(|key| std::env::var(key).ok())?;
    if let Some(host) = host {
        http_config.host = host;
    }
    if let Some(port) = port {
        http_config.port = port;
    }

    let store = build_store(&config, seed)?;
    let handler = BatchHandler::new(config, Arc::new(store));

    HttpServer::new(http_config, handler)
        .start()
        .await
        .map_err(|e| CliError::serve_failed(e.to_string()))
}

/// Run one invocation and print its proxy envelope
pub async fn invoke(method: &str, seed: Option<&Path>) -> CliResult<()> {
    let config = Config::from_env()?;
    let store = build_store(&config, seed)?;
    let handler = BatchHandler::new(config, Arc::new(store));

    let request = InvocationRequest::new(method, read_body()?);
    let response = handler.handle(request).await?;
    write_json(&response.to_proxy_json())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config() -> Config {
        Config {
            region: "eu-west-1".into(),
            products_table: "products".into(),
            variations_table: "variations".into(),
        }
    }

    #[test]
    fn test_build_store_with_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"variations": [{{"id": {{"S": "v1"}}, "sku": {{"S": "SKU-1"}}}}]}}"#
        )
        .unwrap();

        let store = build_store(&config(), Some(file.path())).unwrap();
        assert_eq!(store.item_count("variations").unwrap(), 1);
        assert_eq!(store.item_count("products").unwrap(), 0);
    }

    #[test]
    fn test_missing_seed_file() {
        let err = build_store(&config(), Some(Path::new("/nonexistent/seed.json"))).unwrap_err();
        assert!(err.message().contains("Failed to read seed file"));
    }
}
