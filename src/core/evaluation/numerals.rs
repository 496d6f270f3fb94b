//! Operand parsing and result formatting for both numeral systems.
//!
//! Roman operands are looked up by exact literal in a closed I..X table; there is
//! no general Roman-numeral reader, so `XI`, `IIII` or lowercase input never
//! resolve. Results are encoded greedily with subtractive notation up to C.
use tracing::warn;

use crate::error::{Error, OperandPosition, Result};
use crate::types::{NumeralSystem, RomanLookup};

pub const ROMAN_OPERANDS: [(&str, i64); 10] = [
    ("I", 1),
    ("II", 2),
    ("III", 3),
    ("IV", 4),
    ("V", 5),
    ("VI", 6),
    ("VII", 7),
    ("VIII", 8),
    ("IX", 9),
    ("X", 10),
];

/// Greedy encoding table, largest value first.
pub const ROMAN_SYMBOLS: [(i64, &str); 9] = [
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

pub fn roman_to_int(text: &str) -> Option<i64> {
    ROMAN_OPERANDS
        .iter()
        .find(|(literal, _)| *literal == text)
        .map(|&(_, value)| value)
}

pub fn parse_operand(
    text: &str,
    system: NumeralSystem,
    position: OperandPosition,
    lookup: RomanLookup,
) -> Result<i64> {
    match system {
        NumeralSystem::Arabic => text
            .parse::<i64>()
            .map_err(|_| Error::invalid_operand(position, text)),
        NumeralSystem::Roman => match (roman_to_int(text), lookup) {
            (Some(value), _) => Ok(value),
            (None, RomanLookup::Lenient) => {
                warn!(literal = text, "unsupported roman literal read as zero");
                Ok(0)
            }
            (None, RomanLookup::Strict) => Err(Error::invalid_operand(position, text)),
        },
    }
}

/// Encode a positive result in Roman numerals.
///
/// The table tops out at C, so the encoding is meant for results of two operands in
/// 1..=10 (at most 100). Larger values still encode, as a run of `C`s whose length
/// grows linearly with `value`.
pub fn int_to_roman(value: i64) -> Result<String> {
    if value <= 0 {
        return Err(Error::NonPositiveRoman { value });
    }

    let mut remaining = value;
    let mut out = String::new();
    for &(amount, symbol) in ROMAN_SYMBOLS.iter() {
        while remaining >= amount {
            out.push_str(symbol);
            remaining -= amount;
        }
    }
    Ok(out)
}

pub fn format_result(value: i64, system: NumeralSystem) -> Result<String> {
    match system {
        NumeralSystem::Arabic => Ok(value.to_string()),
        NumeralSystem::Roman => int_to_roman(value),
    }
}
