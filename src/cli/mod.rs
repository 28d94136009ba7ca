//! CLI module for the product batch writer
//!
//! Provides command-line interface for:
//! - serve: run the HTTP trigger
//! - invoke: one-shot invocation from stdin

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{build_store, invoke, run, run_command, serve, Seed};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_body, write_json};
