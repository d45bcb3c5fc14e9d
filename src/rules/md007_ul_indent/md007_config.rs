use crate::rule_config_serde::RuleOptions;
use crate::types::IndentSize;
use serde::{Deserialize, Serialize};

/// Configuration for MD007 (Unordered list indentation)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MD007Config {
    /// Spaces a nested item's marker sits to the right of its parent's marker (default: 2)
    #[serde(default = "default_indent")]
    pub indent: IndentSize,

    /// Require top-level items to be indented by `start_indent` (default: false)
    #[serde(default)]
    pub start_indented: bool,

    /// Indent of top-level items when `start_indented` is set (default: 2)
    #[serde(default = "default_indent")]
    pub start_indent: IndentSize,
}

fn default_indent() -> IndentSize {
    IndentSize::from_const(2)
}

impl Default for MD007Config {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            start_indented: false,
            start_indent: default_indent(),
        }
    }
}

impl RuleOptions for MD007Config {
    const RULE_NAME: &'static str = "MD007";
}
