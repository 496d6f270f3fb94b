use serde::Serialize;
use tracing::debug;

use crate::core::evaluation::classify::classify;
use crate::core::evaluation::normalize::normalize;
use crate::core::evaluation::numerals::{format_result, parse_operand};
use crate::core::evaluation::ops::apply;
use crate::core::evaluation::split::{find_operator, split};
use crate::core::params::EvalParams;
use crate::error::{Error, OperandPosition, Result};
use crate::types::{NumeralSystem, Operator};

pub const MIN_OPERAND: i64 = 1;
pub const MAX_OPERAND: i64 = 10;

/// Outcome of one successful evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Input after whitespace normalization
    pub expression: String,
    pub system: NumeralSystem,
    pub operator: Operator,
    pub left: i64,
    pub right: i64,
    pub value: i64,
    /// `value` rendered in `system`
    pub result: String,
}

pub fn in_range(v: i64) -> bool {
    (MIN_OPERAND..=MAX_OPERAND).contains(&v)
}

pub fn validate_range(a: i64, b: i64) -> Result<()> {
    if !in_range(a) || !in_range(b) {
        return Err(Error::OutOfRange { left: a, right: b });
    }
    Ok(())
}

pub fn evaluate_pipeline(input: &str, params: &EvalParams) -> Result<Evaluation> {
    let expression = normalize(input);
    debug!(%expression, "normalized input");

    if find_operator(&expression).is_none() {
        return Err(Error::NotAnExpression);
    }
    let system = classify(&expression)?;
    let (left_text, operator, right_text) = split(&expression)?;

    if left_text.contains('.') || right_text.contains('.') {
        return Err(Error::DecimalOperand);
    }

    let left = parse_operand(left_text, system, OperandPosition::First, params.roman_lookup)?;
    let right = parse_operand(right_text, system, OperandPosition::Second, params.roman_lookup)?;
    debug!(left, right, %system, "parsed operands");

    // A literal zero divisor is left for `apply` to reject as a division error.
    let zero_divisor = operator == Operator::Divide && system == NumeralSystem::Arabic && right == 0;
    if zero_divisor {
        if !in_range(left) {
            return Err(Error::OutOfRange { left, right });
        }
    } else {
        validate_range(left, right)?;
    }

    let value = apply(operator, left, right)?;
    let result = format_result(value, system)?;
    debug!(value, %result, "evaluated");

    Ok(Evaluation {
        expression,
        system,
        operator,
        left,
        right,
        value,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RomanLookup;

    fn run(input: &str) -> Result<Evaluation> {
        evaluate_pipeline(input, &EvalParams::default())
    }

    #[test]
    fn test_record_fields() {
        let eval = run(" VII * III ").unwrap();
        assert_eq!(eval.expression, "VII*III");
        assert_eq!(eval.system, NumeralSystem::Roman);
        assert_eq!(eval.operator, Operator::Multiply);
        assert_eq!((eval.left, eval.right, eval.value), (7, 3, 21));
        assert_eq!(eval.result, "XXI");
    }

    #[test]
    fn test_validate_range_bounds() {
        assert!(validate_range(1, 10).is_ok());
        assert!(matches!(
            validate_range(0, 5),
            Err(Error::OutOfRange { left: 0, right: 5 })
        ));
        assert!(validate_range(5, 11).is_err());
    }

    #[test]
    fn test_no_operator_reported_before_shape() {
        assert!(matches!(run("12"), Err(Error::NotAnExpression)));
        assert!(matches!(run(""), Err(Error::NotAnExpression)));
        assert!(matches!(run("hello"), Err(Error::NotAnExpression)));
    }

    #[test]
    fn test_decimal_operand() {
        assert!(matches!(run("1.5+2"), Err(Error::DecimalOperand)));
        assert!(matches!(run("2/0.5"), Err(Error::DecimalOperand)));
    }

    #[test]
    fn test_zero_divisor_after_left_range_check() {
        assert!(matches!(run("7/0"), Err(Error::DivisionByZero)));
        assert!(matches!(run("1/00"), Err(Error::DivisionByZero)));
        assert!(matches!(run("11/0"), Err(Error::OutOfRange { left: 11, right: 0 })));
        assert!(matches!(run("0/0"), Err(Error::OutOfRange { left: 0, right: 0 })));
        assert!(matches!(run("0-1"), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_unknown_roman_by_mode() {
        assert!(matches!(run("X/XI"), Err(Error::OutOfRange { left: 10, right: 0 })));
        let strict = EvalParams {
            roman_lookup: RomanLookup::Strict,
            ..EvalParams::default()
        };
        assert!(matches!(
            evaluate_pipeline("X/XI", &strict),
            Err(Error::InvalidOperand { position: OperandPosition::Second, .. })
        ));
    }

    #[test]
    fn test_roman_non_positive_result() {
        assert!(matches!(run("I-I"), Err(Error::NonPositiveRoman { value: 0 })));
        assert!(matches!(run("II-X"), Err(Error::NonPositiveRoman { value: -8 })));
        assert_eq!(run("2-10").unwrap().result, "-8");
    }
}
