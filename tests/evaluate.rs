use numcalc::{Error, ErrorKind, evaluate};

#[test]
fn test_addition_and_multiplication_table() {
    for a in 1..=10i64 {
        for b in 1..=10i64 {
            assert_eq!(evaluate(&format!("{a}+{b}")).unwrap(), (a + b).to_string());
            assert_eq!(evaluate(&format!("{a}*{b}")).unwrap(), (a * b).to_string());
        }
    }
}

#[test]
fn test_divide_by_zero_for_every_operand() {
    for a in 1..=10 {
        let err = evaluate(&format!("{a}/0")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivideByZero, "{a}/0");
    }
}

#[test]
fn test_out_of_range_dividend_with_zero_divisor() {
    assert_eq!(evaluate("11/0").unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(evaluate("100/0").unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(evaluate("5/0").unwrap_err().kind(), ErrorKind::DivideByZero);
}

#[test]
fn test_documented_examples() {
    assert_eq!(evaluate("I+II").unwrap(), "III");
    assert_eq!(evaluate("X-I").unwrap(), "IX");
    assert_eq!(evaluate("3*4").unwrap(), "12");
    assert_eq!(evaluate("10/3").unwrap(), "3");
    assert_eq!(evaluate("X*X").unwrap(), "C");
    assert_eq!(evaluate("1-10").unwrap(), "-9");
}

#[test]
fn test_mixed_systems_fail() {
    let err = evaluate("I+2").unwrap_err();
    assert!(matches!(err, Error::MixedNumerals));
    assert_eq!(err.kind(), ErrorKind::MixedSystem);
}

#[test]
fn test_decimal_error_is_distinct() {
    let err = evaluate("1.5+2").unwrap_err();
    assert!(matches!(err, Error::DecimalOperand));
    assert_eq!(
        err.to_string(),
        "Ошибка: калькулятор умеет работать только с целыми числами!"
    );
}

#[test]
fn test_range_errors() {
    for expr in ["0+1", "11+1", "1+11", "100*2"] {
        assert_eq!(evaluate(expr).unwrap_err().kind(), ErrorKind::Range, "{expr}");
    }
}

#[test]
fn test_whitespace_insensitive() {
    assert_eq!(evaluate(" 1 + 2 ").unwrap(), evaluate("1+2").unwrap());
    assert_eq!(evaluate("\tIV  /  II\n").unwrap(), "II");
}

#[test]
fn test_format_errors() {
    for expr in ["", "abc", "1+2+3", "1 2", "ii+i", "+5"] {
        assert_eq!(evaluate(expr).unwrap_err().kind(), ErrorKind::Format, "{expr:?}");
    }
}

#[test]
fn test_roman_results_must_be_positive() {
    let err = evaluate("V-V").unwrap_err();
    assert!(matches!(err, Error::NonPositiveRoman { value: 0 }));
    assert!(evaluate("I/II").is_err());
}
