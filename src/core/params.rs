use serde::{Deserialize, Serialize};

use crate::types::{OutputFormat, RomanLookup};

/// Evaluation parameters suitable for config files and CLI presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalParams {
    pub roman_lookup: RomanLookup,
    /// Only consulted by the CLI when rendering outcomes
    pub format: OutputFormat,
}

impl EvalParams {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
