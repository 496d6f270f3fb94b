pub mod json;
pub mod text;

use std::io::Write;

use crate::api::Evaluation;
use crate::error::Result;
use crate::types::OutputFormat;

/// Write one evaluation outcome, success or failure, in the requested format
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &Result<Evaluation>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => text::write_text_outcome(out, outcome),
        OutputFormat::Json => json::write_json_outcome(out, outcome),
    }
}
