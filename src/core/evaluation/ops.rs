use crate::error::{Error, Result};
use crate::types::Operator;

/// a + b
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// a - b
pub fn subtract(a: i64, b: i64) -> i64 {
    a - b
}

/// a * b
pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

/// Truncating integer division, rejecting a zero divisor
pub fn divide(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(Error::DivisionByZero);
    }
    Ok(a / b)
}

pub fn apply(operator: Operator, a: i64, b: i64) -> Result<i64> {
    match operator {
        Operator::Add => Ok(add(a, b)),
        Operator::Subtract => Ok(subtract(a, b)),
        Operator::Multiply => Ok(multiply(a, b)),
        Operator::Divide => divide(a, b),
    }
}
