use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;

pub const PROMPT: &str = "Введите математическую операцию (например, 1 + 2):";

pub fn prompt<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", PROMPT)?;
    out.flush()?;
    Ok(())
}

/// Read a single line. End of input yields an empty line rather than an error.
pub fn read_expression<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    debug!(bytes = read, "read input line");
    Ok(line)
}
