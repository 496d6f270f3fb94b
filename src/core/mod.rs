//! Core evaluation building blocks: whitespace normalization, numeral-system
//! classification, splitting, numeral conversion and arithmetic. These are
//! internal primitives consumed by the high-level `api` module.
pub mod evaluation;
pub mod params;
