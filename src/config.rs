use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::history::DEFAULT_MAX_ENTRIES;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    #[serde(default = "default_promote_on_select")]
    pub promote_on_select: bool,

    #[serde(default = "default_clipboard_command")]
    pub clipboard_command: String,

    #[serde(default = "default_picker_command")]
    pub picker_command: String,
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

fn default_promote_on_select() -> bool {
    true
}

fn default_clipboard_command() -> String {
    "xsel".to_string()
}

fn default_picker_command() -> String {
    "dmenu".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            promote_on_select: default_promote_on_select(),
            clipboard_command: default_clipboard_command(),
            picker_command: default_picker_command(),
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_entries, DEFAULT_MAX_ENTRIES);
        assert!(config.promote_on_select);
        assert_eq!(config.clipboard_command, "xsel");
        assert_eq!(config.picker_command, "dmenu");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("max_entries"));
        assert!(toml_str.contains("picker_command"));
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let toml_str = r#"
        max_entries = 25
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.max_entries, 25);
        assert!(config.promote_on_select);
        assert_eq!(config.picker_command, "dmenu");
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
        promote_on_select = false
        clipboard_command = "/usr/local/bin/xsel"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(!config.promote_on_select);
        assert_eq!(config.clipboard_command, "/usr/local/bin/xsel");
    }
}
