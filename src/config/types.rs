use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::rule_config_serde::value_kind_name;

/// Top-level keys that carry no rule configuration and are skipped silently
pub const IGNORED_TOP_LEVEL_KEYS: &[&str] = &["$schema", "extends"];

/// Problems found while loading or resolving configuration.
///
/// Every variant tied to a rule carries the rule identifier, and the option key where
/// one is involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("[{rule}] unknown option '{key}'")]
    UnknownOption { rule: &'static str, key: String },

    #[error("[{rule}] option '{key}' expects {expected}, found {found}")]
    InvalidType {
        rule: &'static str,
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("[{rule}] invalid value for option '{key}': {message}")]
    InvalidValue {
        rule: &'static str,
        key: String,
        message: String,
    },

    #[error("[{rule}] expected a boolean or a mapping of options, found {found}")]
    InvalidRuleSetting { rule: &'static str, found: &'static str },

    #[error("top-level 'default' must be a boolean, found {found}")]
    InvalidDefault { found: &'static str },

    #[error("Failed to read config file at {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },
}

impl ConfigError {
    /// The rule this error belongs to, if any
    pub fn rule(&self) -> Option<&'static str> {
        match self {
            Self::UnknownOption { rule, .. }
            | Self::InvalidType { rule, .. }
            | Self::InvalidValue { rule, .. }
            | Self::InvalidRuleSetting { rule, .. } => Some(rule),
            Self::InvalidDefault { .. } | Self::Io { .. } | Self::Parse { .. } => None,
        }
    }
}

/// The value a user config assigns to one rule key
#[derive(Debug, Clone, PartialEq)]
pub enum RuleSetting {
    /// `MD013: false`
    Enabled(bool),
    /// `MD013: { line_length: 100 }`, optionally with `enabled`
    Options(Map<String, Value>),
    /// Anything else; rejected during resolution
    Other(Value),
}

impl From<Value> for RuleSetting {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(enabled) => Self::Enabled(enabled),
            Value::Object(options) => Self::Options(options),
            other => Self::Other(other),
        }
    }
}

/// A user-supplied configuration, before resolution against the registry.
///
/// Rule keys are kept as written (id or alias, any case) in file order; matching them to
/// rules is the resolver's job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserConfig {
    /// Top-level `default`: baseline enabled state for every rule
    pub default: Option<bool>,
    pub rules: IndexMap<String, RuleSetting>,
}

impl UserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, enabled: bool) -> Self {
        self.default = Some(enabled);
        self
    }

    pub fn with_rule(mut self, key: impl Into<String>, setting: RuleSetting) -> Self {
        self.rules.insert(key.into(), setting);
        self
    }

    /// Build from a parsed top-level mapping
    pub fn from_map(map: Map<String, Value>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (key, value) in map {
            if key == "default" {
                match value {
                    Value::Bool(enabled) => config.default = Some(enabled),
                    other => {
                        return Err(ConfigError::InvalidDefault {
                            found: value_kind_name(&other),
                        });
                    }
                }
            } else if IGNORED_TOP_LEVEL_KEYS.contains(&key.as_str()) {
                log::debug!("Ignoring top-level config key '{key}'");
            } else {
                config.rules.insert(key, RuleSetting::from(value));
            }
        }
        Ok(config)
    }
}

/// Effective state of one rule for a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleConfig {
    pub enabled: bool,
    /// Every option the rule accepts, user values merged over defaults
    pub options: Map<String, Value>,
}

impl RuleConfig {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}

/// One [`RuleConfig`] per registered rule, in registry order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub rules: IndexMap<&'static str, RuleConfig>,
}

impl ResolvedConfig {
    pub fn get(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }

    pub fn is_enabled(&self, rule_name: &str) -> bool {
        self.get(rule_name).is_some_and(|config| config.enabled)
    }

    pub fn enabled_rules(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules
            .iter()
            .filter(|(_, config)| config.enabled)
            .map(|(name, _)| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a mapping"),
        }
    }

    #[test]
    fn test_from_map_splits_default_and_rules() {
        let config = UserConfig::from_map(as_map(json!({
            "default": true,
            "$schema": "https://example.invalid/schema.json",
            "MD013": false,
            "line-length": { "line_length": 100 },
            "MD024": "yes"
        })))
        .unwrap();

        assert_eq!(config.default, Some(true));
        assert_eq!(config.rules.len(), 3);
        assert_eq!(config.rules["MD013"], RuleSetting::Enabled(false));
        assert!(matches!(config.rules["line-length"], RuleSetting::Options(_)));
        assert_eq!(config.rules["MD024"], RuleSetting::Other(json!("yes")));
        let keys: Vec<&str> = config.rules.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["MD013", "line-length", "MD024"]);
    }

    #[test]
    fn test_non_boolean_default_is_rejected() {
        let err = UserConfig::from_map(as_map(json!({ "default": "yes" }))).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDefault { found: "string" });
        assert_eq!(err.rule(), None);
    }

    #[test]
    fn test_error_messages_name_rule_and_key() {
        let err = ConfigError::UnknownOption {
            rule: "MD013",
            key: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "[MD013] unknown option 'bogus'");
        assert_eq!(err.rule(), Some("MD013"));
    }
}
