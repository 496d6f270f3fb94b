//! numcalc CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, read one
//! expression, print its result or error. Evaluation errors do not change the
//! exit status. For programmatic use, prefer the library API (`numcalc::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
