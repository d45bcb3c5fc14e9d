//! Serde-backed rule options.
//!
//! Each rule describes its options with a plain config struct (`MD013Config`, ...).
//! The struct's `Default` serialization doubles as the option schema (names, kinds and
//! defaults), and deserializing a merged option map into the struct is the validator.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::RuleConfig;
use crate::rule::LintError;

/// Trait for rule option structs
pub trait RuleOptions: Serialize + DeserializeOwned + Default + Clone {
    /// The rule name (e.g., "MD009")
    const RULE_NAME: &'static str;
}

/// The value kinds an option can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    Integer,
    String,
    StringList,
}

impl OptionKind {
    /// Infer the kind from a default value
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(_) => Some(Self::Bool),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(Self::Integer),
            Value::String(_) => Some(Self::String),
            Value::Array(_) => Some(Self::StringList),
            _ => None,
        }
    }

    /// Whether a user-supplied value has this kind. Range checks happen later.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Bool => value.is_boolean(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::String => value.is_string(),
            Self::StringList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Integer => "integer",
            Self::String => "string",
            Self::StringList => "list of strings",
        }
    }
}

/// Describe the JSON type of a value for error messages
pub fn value_kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

/// One named option with its kind and default
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    pub name: String,
    pub kind: OptionKind,
    pub default: Value,
}

/// The named options a rule accepts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSchema {
    pub options: Vec<OptionSpec>,
}

impl OptionSchema {
    /// Derive the schema from a config struct's defaults
    pub fn of<T: RuleOptions>() -> Self {
        let options = match serde_json::to_value(T::default()) {
            Ok(Value::Object(map)) => map
                .into_iter()
                .filter_map(|(name, default)| {
                    let kind = OptionKind::of(&default)?;
                    Some(OptionSpec { name, kind, default })
                })
                .collect(),
            Ok(_) | Err(_) => {
                log::warn!("[{}] option defaults did not serialize to a mapping", T::RULE_NAME);
                Vec::new()
            }
        };
        Self { options }
    }

    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.name == name)
    }

    /// Default option values keyed by name
    pub fn defaults(&self) -> Map<String, Value> {
        self.options
            .iter()
            .map(|spec| (spec.name.clone(), spec.default.clone()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Canonical spelling of an option key: kebab-case is accepted as snake_case
pub fn normalize_option_key(key: &str) -> String {
    key.trim().replace('-', "_").to_ascii_lowercase()
}

/// Deserialize an option map into a rule's config struct, missing keys taking defaults
pub fn parse_options<T: RuleOptions>(options: &Map<String, Value>) -> Result<T, String> {
    serde_json::from_value(Value::Object(options.clone())).map_err(|e| e.to_string())
}

/// Load a rule's typed config from its resolved [`RuleConfig`]
pub fn load_rule_config<T: RuleOptions>(config: &RuleConfig) -> Result<T, LintError> {
    parse_options(&config.options).map_err(|message| LintError::InvalidConfig {
        rule: T::RULE_NAME,
        message,
    })
}

/// An enabled [`RuleConfig`] carrying the given typed options
pub fn to_rule_config<T: RuleOptions>(options: &T) -> RuleConfig {
    let options = match serde_json::to_value(options) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => Map::new(),
    };
    RuleConfig { enabled: true, options }
}
