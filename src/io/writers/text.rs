use std::io::Write;

use crate::api::Evaluation;
use crate::error::Result;

pub fn write_text_outcome<W: Write>(out: &mut W, outcome: &Result<Evaluation>) -> Result<()> {
    match outcome {
        Ok(eval) => writeln!(out, "Результат: {}", eval.result)?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}
