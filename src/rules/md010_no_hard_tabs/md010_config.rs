use crate::rule_config_serde::RuleOptions;
use crate::types::SpaceCount;
use serde::{Deserialize, Serialize};

/// Configuration for MD010 (No hard tabs)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MD010Config {
    /// Check fenced code blocks, fences included (default: true)
    #[serde(default = "default_code_blocks")]
    pub code_blocks: bool,

    /// Fence languages whose blocks are never checked, compared case-insensitively
    #[serde(default)]
    pub ignore_code_languages: Vec<String>,

    /// Spaces each tab expands to in the fix hint (default: 4)
    #[serde(default = "default_spaces_per_tab")]
    pub spaces_per_tab: SpaceCount,
}

fn default_code_blocks() -> bool {
    true
}

fn default_spaces_per_tab() -> SpaceCount {
    SpaceCount::from_const(4)
}

impl Default for MD010Config {
    fn default() -> Self {
        Self {
            code_blocks: default_code_blocks(),
            ignore_code_languages: Vec::new(),
            spaces_per_tab: default_spaces_per_tab(),
        }
    }
}

impl RuleOptions for MD010Config {
    const RULE_NAME: &'static str = "MD010";
}
