//! The expression evaluator broken into its stages. Each stage is a free,
//! stateless function; `pipeline` wires them together in order.
pub mod classify;
pub mod normalize;
pub mod numerals;
pub mod ops;
pub mod pipeline;
pub mod split;
