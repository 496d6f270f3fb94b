//! Crate-level error type and `Result` alias for structured error handling.
//! Every evaluation failure is a variant here; nothing in the library aborts the
//! process. `Error::kind` groups the variants into coarse categories for callers.
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Which operand of the expression a failure refers to.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandPosition {
    First,
    Second,
}

impl std::fmt::Display for OperandPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperandPosition::First => write!(f, "первого"),
            OperandPosition::Second => write!(f, "второго"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Ошибка: строка не является математической операцией")]
    NotAnExpression,

    #[error("Ошибка: необходимо использовать только два операнда и один оператор (+, -, /, *)")]
    InvalidShape,

    #[error("Ошибка: использование одновременно арабских и римских цифр")]
    MixedNumerals,

    #[error("Ошибка: невозможно определить тип чисел")]
    UndetectableSystem,

    #[error("Ошибка: калькулятор умеет работать только с целыми числами!")]
    DecimalOperand,

    #[error("Ошибка: неверный формат {position} операнда")]
    InvalidOperand {
        position: OperandPosition,
        text: String,
    },

    #[error("Ошибка: числа должны быть в диапазоне от 1 до 10 включительно")]
    OutOfRange { left: i64, right: i64 },

    #[error("Ошибка: деление на ноль")]
    DivisionByZero,

    #[error("Ошибка: неверный оператор")]
    UnknownOperator(char),

    #[error(
        "Ошибка: результатом работы калькулятора с римскими числами могут быть только положительные числа"
    )]
    NonPositiveRoman { value: i64 },

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse failure categories.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Format,
    MixedSystem,
    Range,
    DivideByZero,
    Io,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::Format => "FormatError",
            ErrorKind::MixedSystem => "MixedSystemError",
            ErrorKind::Range => "RangeError",
            ErrorKind::DivideByZero => "DivideByZeroError",
            ErrorKind::Io => "IoError",
        };
        write!(f, "{}", s)
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotAnExpression
            | Error::InvalidShape
            | Error::UndetectableSystem
            | Error::DecimalOperand
            | Error::InvalidOperand { .. }
            | Error::UnknownOperator(_) => ErrorKind::Format,
            Error::MixedNumerals => ErrorKind::MixedSystem,
            Error::OutOfRange { .. } | Error::NonPositiveRoman { .. } => ErrorKind::Range,
            Error::DivisionByZero => ErrorKind::DivideByZero,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    pub fn invalid_operand(position: OperandPosition, text: &str) -> Self {
        Error::InvalidOperand {
            position,
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_message_names_position() {
        let first = Error::invalid_operand(OperandPosition::First, "x");
        let second = Error::invalid_operand(OperandPosition::Second, "y");
        assert_eq!(first.to_string(), "Ошибка: неверный формат первого операнда");
        assert_eq!(second.to_string(), "Ошибка: неверный формат второго операнда");
    }

    #[test]
    fn test_decimal_is_its_own_variant() {
        let err = Error::DecimalOperand;
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(!matches!(err, Error::InvalidOperand { .. }));
        assert_eq!(
            err.to_string(),
            "Ошибка: калькулятор умеет работать только с целыми числами!"
        );
    }

    #[test]
    fn test_kind_grouping() {
        assert_eq!(Error::MixedNumerals.kind(), ErrorKind::MixedSystem);
        assert_eq!(Error::OutOfRange { left: 0, right: 1 }.kind(), ErrorKind::Range);
        assert_eq!(Error::NonPositiveRoman { value: 0 }.kind(), ErrorKind::Range);
        assert_eq!(Error::DivisionByZero.kind(), ErrorKind::DivideByZero);
        assert_eq!(ErrorKind::Range.to_string(), "RangeError");
    }
}
