//! CLI argument definitions using clap
//!
//! Commands:
//! - productd serve [--host <host>] [--port <port>] [--seed <path>]
//! - productd invoke --method <METHOD> [--seed <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// productd - batch writer for product records
#[derive(Parser, Debug)]
#[command(name = "productd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log output format (pretty or json)
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the HTTP trigger over an in-memory store
    Serve {
        /// Host to bind to (overrides PRODUCTS_HTTP_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides PRODUCTS_HTTP_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// JSON file with initial table contents
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Run a single invocation with the request body read from stdin
    Invoke {
        /// HTTP method of the invocation (POST inserts, PATCH updates)
        #[arg(long, default_value = "POST")]
        method: String,

        /// JSON file with initial table contents
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
