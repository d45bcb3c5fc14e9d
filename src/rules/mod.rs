mod md007_ul_indent;
mod md010_no_hard_tabs;
mod md013_line_length;
mod md024_no_duplicate_heading;
mod md030_list_marker_space;

pub use md007_ul_indent::{MD007Config, MD007ULIndent};
pub use md010_no_hard_tabs::{MD010Config, MD010NoHardTabs};
pub use md013_line_length::{MD013Config, MD013LineLength};
pub use md024_no_duplicate_heading::{MD024Config, MD024NoDuplicateHeading};
pub use md030_list_marker_space::{MD030Config, MD030ListMarkerSpace};

use crate::rule::Rule;

/// Returns all built-in rule instances, in registry order
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(MD007ULIndent),
        Box::new(MD010NoHardTabs),
        Box::new(MD013LineLength),
        Box::new(MD024NoDuplicateHeading),
        Box::new(MD030ListMarkerSpace),
    ]
}

/// An immutable, ordered set of rules.
///
/// Registry order decides the order rules are resolved, listed and reported in; it never
/// changes which violations are found.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// The registry of every built-in rule
    pub fn builtin() -> Self {
        Self::new(all_rules())
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> + '_ {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Look up a rule by identifier or alias, case-insensitively
    pub fn get(&self, key: &str) -> Option<&dyn Rule> {
        let key = key.trim();
        self.iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(key) || rule.alias().eq_ignore_ascii_case(key))
    }

    /// Position of a rule in registry order
    pub fn position(&self, rule_name: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.name() == rule_name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter().map(|rule| rule.name())).finish()
    }
}
