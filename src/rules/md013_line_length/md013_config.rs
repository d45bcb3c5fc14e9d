use crate::rule_config_serde::RuleOptions;
use crate::types::PositiveUsize;
use serde::{Deserialize, Serialize};

/// Configuration for MD013 (Line length)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MD013Config {
    /// Maximum line length in characters (default: 80)
    #[serde(default = "default_line_length")]
    pub line_length: PositiveUsize,

    /// Apply rule to fenced code blocks (default: true)
    #[serde(default = "default_true")]
    pub code_blocks: bool,

    /// Apply rule to headings (default: true)
    #[serde(default = "default_true")]
    pub headings: bool,
}

fn default_line_length() -> PositiveUsize {
    PositiveUsize::from_const(80)
}

fn default_true() -> bool {
    true
}

impl Default for MD013Config {
    fn default() -> Self {
        Self {
            line_length: default_line_length(),
            code_blocks: true,
            headings: true,
        }
    }
}

impl RuleOptions for MD013Config {
    const RULE_NAME: &'static str = "MD013";
}
