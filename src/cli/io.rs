//! JSON I/O handling for CLI
//!
//! - Input: one request body via stdin (read to EOF)
//! - Output: one JSON object via stdout

use std::io::{self, Read, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Read the whole request body from stdin; `None` when blank
pub fn read_body() -> CliResult<Option<String>> {
    let mut body = String::new();
    io::stdin().lock().read_to_string(&mut body)?;

    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(body))
}

/// Write a JSON value to stdout as one line
pub fn write_json(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
