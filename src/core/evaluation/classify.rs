//! Numeral-system detection.
//!
//! Detection is purely syntactic: operands are matched against character
//! classes, and whether a literal denotes a supported value is decided later
//! when the operands are parsed. The decimal point belongs to the Arabic class
//! so that decimal operands survive classification and get their own error.
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::NumeralSystem;

const OPERAND: &str = "[0-9.IVXLCDM]";
const OPERATOR: &str = "[-+*/]";
const ARABIC: &str = "[0-9.]";
const ROMAN: &str = "[IVXLCDM]";

fn anchored(operand: &str) -> Regex {
    Regex::new(&format!("^{0}+{1}{0}+$", operand, OPERATOR)).expect("Invalid expression regex")
}

static SHAPE: Lazy<Regex> = Lazy::new(|| anchored(OPERAND));
static PURE_ARABIC: Lazy<Regex> = Lazy::new(|| anchored(ARABIC));
static PURE_ROMAN: Lazy<Regex> = Lazy::new(|| anchored(ROMAN));
static HAS_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9]").expect("Invalid digit regex"));
static HAS_ROMAN: Lazy<Regex> = Lazy::new(|| Regex::new(ROMAN).expect("Invalid roman regex"));

/// Detect the numeral system shared by both operands of a normalized expression.
pub fn classify(expr: &str) -> Result<NumeralSystem> {
    if !SHAPE.is_match(expr) {
        return Err(Error::InvalidShape);
    }
    if HAS_DIGIT.is_match(expr) && HAS_ROMAN.is_match(expr) {
        return Err(Error::MixedNumerals);
    }

    let system = if PURE_ARABIC.is_match(expr) {
        NumeralSystem::Arabic
    } else if PURE_ROMAN.is_match(expr) {
        NumeralSystem::Roman
    } else {
        return Err(Error::UndetectableSystem);
    };

    debug!(%expr, %system, "classified expression");
    Ok(system)
}
