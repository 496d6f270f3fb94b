use clap::Parser;
use std::path::PathBuf;

use numcalc::{OutputFormat, RomanLookup};

#[derive(Parser)]
#[command(name = "numcalc", version, about = "Arabic and Roman numeral calculator")]
pub struct CliArgs {
    /// Expression to evaluate (skips the prompt and stdin)
    #[arg(short, long)]
    pub expression: Option<String>,

    /// Handling of Roman literals outside I..X (lenient reads them as zero, strict rejects them)
    #[arg(long, value_enum)]
    pub roman_lookup: Option<RomanLookup>,

    /// Shorthand for `--roman-lookup strict`
    #[arg(long, default_value_t = false, conflicts_with = "roman_lookup")]
    pub strict_roman: bool,

    /// Output format (text or json)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON file with evaluation parameters; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
