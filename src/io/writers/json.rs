use std::io::Write;

use serde::Serialize;

use crate::api::Evaluation;
use crate::error::{Error, ErrorKind, Result};

#[derive(Serialize)]
struct ErrorRecord {
    error: String,
    kind: ErrorKind,
}

pub fn write_json_outcome<W: Write>(out: &mut W, outcome: &Result<Evaluation>) -> Result<()> {
    let line = match outcome {
        Ok(eval) => serde_json::to_string(eval),
        Err(e) => serde_json::to_string(&ErrorRecord {
            error: e.to_string(),
            kind: e.kind(),
        }),
    }
    .map_err(|e| Error::Io(e.into()))?;
    writeln!(out, "{}", line)?;
    Ok(())
}
