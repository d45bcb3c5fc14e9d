use crate::rule_config_serde::RuleOptions;
use serde::{Deserialize, Serialize};

/// Configuration for MD024 (Multiple headings with the same content)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MD024Config {
    /// Only compare headings at the same level under the same parent heading (default: false)
    #[serde(default)]
    pub siblings_only: bool,

    /// Only compare headings at the same level (default: false)
    #[serde(default)]
    pub allow_different_nesting: bool,
}

impl RuleOptions for MD024Config {
    const RULE_NAME: &'static str = "MD024";
}
