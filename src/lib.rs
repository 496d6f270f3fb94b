#![doc = r#"
numcalc: a two-operand calculator for Arabic and Roman numerals.

The crate reads one line such as `3 * 4` or `IX - IV`, works out which numeral
system the operands use, checks that both operands lie in 1..=10, applies the
operator and prints the result in the same numeral system. It powers the
`numcalc` CLI and can be embedded in your own Rust applications.

Quick start
-----------
```rust
fn main() -> numcalc::Result<()> {
    assert_eq!(numcalc::evaluate("3 * 4")?, "12");
    assert_eq!(numcalc::evaluate("X - I")?, "IX");
    assert_eq!(numcalc::evaluate("10 / 3")?, "3");
    Ok(())
}
```

Full evaluation record
----------------------
```rust
use numcalc::{evaluate_with_params, EvalParams, NumeralSystem, RomanLookup};

fn main() -> numcalc::Result<()> {
    let params = EvalParams { roman_lookup: RomanLookup::Strict, ..EvalParams::default() };
    let eval = evaluate_with_params(" VII * III ", &params)?;
    assert_eq!(eval.system, NumeralSystem::Roman);
    assert_eq!(eval.value, 21);
    assert_eq!(eval.result, "XXI");
    Ok(())
}
```

Error handling
--------------
All public functions return `numcalc::Result<T>`; match on `numcalc::Error`, or
on `Error::kind()` for the coarse category.

```rust
use numcalc::{evaluate, Error, ErrorKind};

match evaluate("I + 2") {
    Err(Error::MixedNumerals) => {}
    other => panic!("unexpected: {other:?}"),
}
assert_eq!(evaluate("11 + 1").unwrap_err().kind(), ErrorKind::Range);
assert_eq!(evaluate("5 / 0").unwrap_err().kind(), ErrorKind::DivideByZero);
```

Roman literals
--------------
Only the exact literals `I` through `X` are accepted as operands. By default
(`RomanLookup::Lenient`) any other Roman literal reads as zero and is then
rejected as out of range; `RomanLookup::Strict` rejects it as a malformed operand.

Useful modules
--------------
- [`api`]: high-level entry points.
- [`core`]: the individual evaluation stages.
- [`types`]: `NumeralSystem`, `Operator`, `RomanLookup`, `OutputFormat`.
- [`io`]: console prompt/reader and outcome writers.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::EvalParams;
pub use error::{Error, ErrorKind, OperandPosition, Result};
pub use types::{NumeralSystem, Operator, OutputFormat, RomanLookup};

pub use api::{Evaluation, evaluate, evaluate_with_params};
