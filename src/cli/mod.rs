//! Command Line Interface (CLI) layer for numcalc.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): resolve parameters, read one
//! expression, evaluate it and print the outcome.
//!
//! If you are embedding numcalc into another application, prefer using
//! the high-level `numcalc::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
