//! Merge registry defaults with a [`UserConfig`].
//!
//! For each rule, in registry order: the enabled state starts from the top-level
//! `default` (or the rule's built-in default), then every user entry naming the rule by id
//! or alias is applied in file order. A boolean entry sets only the enabled state. A
//! mapping entry enables the rule unless it says `enabled: false`, and its option keys
//! are checked against the rule's schema and merged over the defaults. Options of a rule
//! that ends up disabled are never validated.

use serde_json::{Map, Value};

use super::types::{ConfigError, ResolvedConfig, RuleConfig, RuleSetting, UserConfig};
use crate::rule::Rule;
use crate::rule_config_serde::{OptionSchema, normalize_option_key, value_kind_name};
use crate::rules::RuleRegistry;

/// Strict resolution: the first configuration error aborts the whole run
pub fn resolve(registry: &RuleRegistry, user: &UserConfig) -> Result<ResolvedConfig, ConfigError> {
    warn_unknown_rule_keys(registry, user);
    let mut resolved = ResolvedConfig::default();
    for rule in registry.iter() {
        let config = resolve_rule(rule, user)?;
        resolved.rules.insert(rule.name(), config);
    }
    Ok(resolved)
}

/// Tolerant resolution: a rule with a configuration error is disabled and the error is
/// returned alongside the config; every other rule resolves normally.
pub fn resolve_tolerant(registry: &RuleRegistry, user: &UserConfig) -> (ResolvedConfig, Vec<ConfigError>) {
    warn_unknown_rule_keys(registry, user);
    let mut resolved = ResolvedConfig::default();
    let mut errors = Vec::new();
    for rule in registry.iter() {
        let config = match resolve_rule(rule, user) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; disabling {}", rule.name());
                errors.push(err);
                RuleConfig {
                    enabled: false,
                    options: rule.option_schema().defaults(),
                }
            }
        };
        resolved.rules.insert(rule.name(), config);
    }
    (resolved, errors)
}

fn warn_unknown_rule_keys(registry: &RuleRegistry, user: &UserConfig) {
    for key in user.rules.keys() {
        if registry.get(key).is_none() {
            log::warn!("Ignoring unknown rule '{key}' in config");
        }
    }
}

/// User entries that name this rule, in file order
fn settings_for<'a>(rule: &'a dyn Rule, user: &'a UserConfig) -> impl Iterator<Item = &'a RuleSetting> + 'a {
    user.rules
        .iter()
        .filter(move |(key, _)| key.eq_ignore_ascii_case(rule.name()) || key.eq_ignore_ascii_case(rule.alias()))
        .map(|(_, setting)| setting)
}

/// The enabled state a single entry asks for
fn entry_enabled(rule: &dyn Rule, setting: &RuleSetting) -> Result<bool, ConfigError> {
    match setting {
        RuleSetting::Enabled(enabled) => Ok(*enabled),
        RuleSetting::Options(options) => match options.get("enabled") {
            None => Ok(true),
            Some(Value::Bool(enabled)) => Ok(*enabled),
            Some(other) => Err(ConfigError::InvalidType {
                rule: rule.name(),
                key: "enabled".to_string(),
                expected: "boolean",
                found: value_kind_name(other),
            }),
        },
        RuleSetting::Other(value) => Err(ConfigError::InvalidRuleSetting {
            rule: rule.name(),
            found: value_kind_name(value),
        }),
    }
}

fn resolve_rule(rule: &dyn Rule, user: &UserConfig) -> Result<RuleConfig, ConfigError> {
    let schema = rule.option_schema();
    let mut options = schema.defaults();

    let mut enabled = user.default.unwrap_or_else(|| rule.default_enabled());
    for setting in settings_for(rule, user) {
        enabled = entry_enabled(rule, setting)?;
    }

    if enabled {
        for setting in settings_for(rule, user) {
            if let RuleSetting::Options(entry) = setting
                && entry_enabled(rule, setting)?
            {
                merge_options(rule, &schema, entry, &mut options)?;
            }
        }
    }

    log::debug!("[{}] enabled={enabled} options={options:?}", rule.name());
    Ok(RuleConfig { enabled, options })
}

/// Check each user option and merge it over `options`
fn merge_options(
    rule: &dyn Rule,
    schema: &OptionSchema,
    entry: &Map<String, Value>,
    options: &mut Map<String, Value>,
) -> Result<(), ConfigError> {
    for (raw_key, value) in entry {
        if raw_key == "enabled" {
            continue;
        }
        let key = normalize_option_key(raw_key);
        let Some(spec) = schema.get(&key) else {
            return Err(ConfigError::UnknownOption {
                rule: rule.name(),
                key: raw_key.clone(),
            });
        };
        if !spec.kind.accepts(value) {
            return Err(ConfigError::InvalidType {
                rule: rule.name(),
                key: raw_key.clone(),
                expected: spec.kind.as_str(),
                found: value_kind_name(value),
            });
        }

        // Validate this key alone over the defaults so the error can name it
        let mut candidate = schema.defaults();
        candidate.insert(key.clone(), value.clone());
        rule.validate_options(&candidate)
            .map_err(|message| ConfigError::InvalidValue {
                rule: rule.name(),
                key: raw_key.clone(),
                message,
            })?;

        options.insert(key, value.clone());
    }
    Ok(())
}
