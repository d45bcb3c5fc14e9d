use crate::rule_config_serde::RuleOptions;
use crate::types::SpaceCount;
use serde::{Deserialize, Serialize};

/// Configuration for MD030 (Spaces after list markers)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MD030Config {
    /// Spaces for single-line unordered list items (default: 1)
    #[serde(default = "default_spaces")]
    pub ul_single: SpaceCount,

    /// Spaces for single-line ordered list items (default: 1)
    #[serde(default = "default_spaces")]
    pub ol_single: SpaceCount,

    /// Spaces for multi-line unordered list items (default: 1)
    #[serde(default = "default_spaces")]
    pub ul_multi: SpaceCount,

    /// Spaces for multi-line ordered list items (default: 1)
    #[serde(default = "default_spaces")]
    pub ol_multi: SpaceCount,
}

fn default_spaces() -> SpaceCount {
    SpaceCount::from_const(1)
}

impl Default for MD030Config {
    fn default() -> Self {
        Self {
            ul_single: default_spaces(),
            ol_single: default_spaces(),
            ul_multi: default_spaces(),
            ol_multi: default_spaces(),
        }
    }
}

impl MD030Config {
    /// Expected whitespace after a marker of the given kind
    pub fn expected_spaces(&self, is_ordered: bool, is_multi_line: bool) -> usize {
        match (is_ordered, is_multi_line) {
            (false, false) => self.ul_single.get(),
            (true, false) => self.ol_single.get(),
            (false, true) => self.ul_multi.get(),
            (true, true) => self.ol_multi.get(),
        }
    }
}

impl RuleOptions for MD030Config {
    const RULE_NAME: &'static str = "MD030";
}
