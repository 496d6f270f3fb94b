use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Operator;

/// Byte offset and kind of the first operator character, scanning left to right.
pub fn find_operator(expr: &str) -> Option<(usize, Operator)> {
    expr.char_indices()
        .find_map(|(i, c)| Operator::try_from(c).ok().map(|op| (i, op)))
}

/// Split an expression at its first operator into `(left, operator, right)`.
pub fn split(expr: &str) -> Result<(&str, Operator, &str)> {
    let (index, operator) = find_operator(expr).ok_or(Error::NotAnExpression)?;
    let left = &expr[..index];
    let right = &expr[index + operator.symbol().len_utf8()..];

    debug!(left, %operator, right, "split expression");
    Ok((left, operator, right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_operator_wins() {
        let (left, op, right) = split("3-4*5").unwrap();
        assert_eq!(left, "3");
        assert_eq!(op, Operator::Subtract);
        assert_eq!(right, "4*5");
    }

    #[test]
    fn test_each_operator() {
        assert_eq!(split("X/II").unwrap(), ("X", Operator::Divide, "II"));
        assert_eq!(split("1*1").unwrap().1, Operator::Multiply);
        assert_eq!(split("1+1").unwrap().1, Operator::Add);
    }

    #[test]
    fn test_no_operator() {
        assert!(find_operator("12").is_none());
        assert_eq!(find_operator("XV%II*I"), Some((5, Operator::Multiply)));
        assert!(matches!(split("12"), Err(Error::NotAnExpression)));
    }

    #[test]
    fn test_empty_sides_are_kept() {
        assert_eq!(split("+").unwrap(), ("", Operator::Add, ""));
    }
}
