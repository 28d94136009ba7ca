//! productd entry point
//!
//! Parses arguments, installs logging and hands over to the CLI module.
//! Errors are printed to stderr and end the process with a non-zero exit.

use std::process::ExitCode;

use product_batch::cli::{self, Cli};
use product_batch::observability::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.log_format);

    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
