use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use super::types::{ConfigError, UserConfig};
use crate::rule_config_serde::value_kind_name;

/// Config file syntax, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    /// Unknown extension: try JSON, then YAML
    Auto,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json" | "jsonc") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Auto,
        }
    }
}

/// Load a markdownlint config file (JSON or YAML) from the given path
pub fn load_user_config(path: &Path) -> Result<UserConfig, ConfigError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: display.clone(),
        message: e.to_string(),
    })?;
    log::debug!("Loaded config file {display}");
    let map = parse_config_map(&content, ConfigFormat::from_path(path))
        .map_err(|message| ConfigError::Parse { path: display, message })?;
    UserConfig::from_map(map)
}

/// Parse config text that does not come from a file
pub fn parse_user_config(content: &str, format: ConfigFormat) -> Result<UserConfig, ConfigError> {
    let map = parse_config_map(content, format).map_err(|message| ConfigError::Parse {
        path: "<inline>".to_string(),
        message,
    })?;
    UserConfig::from_map(map)
}

/// Parse config text into its top-level mapping. An empty YAML document is an empty mapping.
fn parse_config_map(content: &str, format: ConfigFormat) -> Result<Map<String, Value>, String> {
    let value: Value = match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| format!("Failed to parse JSON: {e}"))?,
        ConfigFormat::Yaml => serde_yml::from_str(content).map_err(|e| format!("Failed to parse YAML: {e}"))?,
        ConfigFormat::Auto => serde_json::from_str(content)
            .or_else(|_| serde_yml::from_str(content))
            .map_err(|e| format!("Failed to parse config as JSON or YAML: {e}"))?,
    };

    match value {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => Ok(map),
        other => Err(format!(
            "expected a mapping at the top level, found {}",
            value_kind_name(&other)
        )),
    }
}
