//! High-level library API: evaluate one expression line to its formatted result,
//! or to a full `Evaluation` record. Prefer these entrypoints over the low-level
//! evaluation stages when integrating numcalc.
use crate::core::evaluation::pipeline::evaluate_pipeline;
use crate::core::params::EvalParams;
use crate::error::Result;

pub use crate::core::evaluation::pipeline::Evaluation;

/// Evaluate a raw input line with default parameters and return the result text.
pub fn evaluate(input: &str) -> Result<String> {
    evaluate_pipeline(input, &EvalParams::default()).map(|eval| eval.result)
}

/// Evaluate a raw input line and return the whole evaluation record.
pub fn evaluate_with_params(input: &str, params: &EvalParams) -> Result<Evaluation> {
    evaluate_pipeline(input, params)
}
