use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use numcalc::io::{prompt, read_expression, write_outcome};
use numcalc::{EvalParams, RomanLookup, evaluate_with_params};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_params(path: &Path) -> Result<EvalParams, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    EvalParams::from_json(&text).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn resolve_params(args: &CliArgs) -> Result<EvalParams, AppError> {
    let mut params = match &args.config {
        Some(path) => load_params(path)?,
        None => EvalParams::default(),
    };
    if let Some(lookup) = args.roman_lookup {
        params.roman_lookup = lookup;
    }
    if args.strict_roman {
        params.roman_lookup = RomanLookup::Strict;
    }
    if let Some(format) = args.format {
        params.format = format;
    }
    Ok(params)
}

/// Evaluate one expression and print its outcome.
///
/// Without `expression` the prompt is written and one line is read from `input`.
/// Evaluation failures are printed and still return `Ok`.
pub fn evaluate_line<R: BufRead, W: Write>(
    expression: Option<&str>,
    params: &EvalParams,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let line = match expression {
        Some(expression) => expression.to_string(),
        None => {
            prompt(out)?;
            read_expression(input)?
        }
    };

    let outcome = evaluate_with_params(&line, params);
    if let Err(e) = &outcome {
        info!(kind = %e.kind(), "evaluation failed: {}", e);
    }
    write_outcome(out, &outcome, params.format)?;
    out.flush().map_err(numcalc::Error::from)?;
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let params = resolve_params(&args)?;
    debug!(?params, "resolved parameters");

    let stdout = io::stdout();
    evaluate_line(
        args.expression.as_deref(),
        &params,
        &mut io::stdin().lock(),
        &mut stdout.lock(),
    )?;

    Ok(())
}
