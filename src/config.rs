use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::utils::paths::get_config_path;

/// Environment variable consulted when the config file carries no API key.
pub const SHEETS_KEY_ENV_VAR: &str = "EMAIL_CHECKLIST_SHEETS_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// How long a copied row stays highlighted, in milliseconds.
    #[serde(default = "default_pulse_ms")]
    pub pulse_ms: u64,

    #[serde(default)]
    pub sheets_api_key: Option<String>,

    #[serde(default = "default_sheets_base_url")]
    pub sheets_base_url: String,

    #[serde(default)]
    pub link_url: Option<String>,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_pulse_ms() -> u64 {
    500
}

fn default_sheets_base_url() -> String {
    "https://sheets.googleapis.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            pulse_ms: default_pulse_ms(),
            sheets_api_key: None,
            sheets_base_url: default_sheets_base_url(),
            link_url: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;

        Ok(config)
    }

    /// The configured key wins over the environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.sheets_api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| env::var(SHEETS_KEY_ENV_VAR).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "default");
        assert_eq!(config.pulse_ms, 500);
        assert!(config.link_url.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("sheets_base_url"));
    }

    #[test]
    fn test_config_deserialization_fills_defaults() {
        let toml_str = r#"
        theme = "dark"
        sheets_api_key = "abc123"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.pulse_ms, 500);
        assert_eq!(config.sheets_base_url, "https://sheets.googleapis.com");
        assert_eq!(config.resolved_api_key().as_deref(), Some("abc123"));
    }
}
