//! Configuration management for decimal-tui.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub input: InputConfig,
}

impl AppConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(project_root: Option<&PathBuf>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. Project-specific config (.decimal-tui.toml in working directory)
        if let Some(root) = project_root {
            let project_config = root.join(".decimal-tui.toml");
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/decimal-tui/config.toml)
        if let Some(config_dir) = directories::ProjectDirs::from("com", "decimal-tui", "decimal-tui")
        {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Environment variables (DECIMAL_TUI_*)
        builder = builder.add_source(
            Environment::with_prefix("DECIMAL_TUI")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI refresh rate in milliseconds
    #[serde(default = "default_refresh_rate_ms")]
    pub refresh_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate_ms(),
        }
    }
}

fn default_refresh_rate_ms() -> u64 {
    100
}

/// Input field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Increment/decrement granularity as a value-shaped string
    #[serde(default = "default_step")]
    pub step: String,
    /// Hint shown while the field is empty
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Value the host page starts with
    #[serde(default = "default_initial_value")]
    pub initial_value: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
            placeholder: default_placeholder(),
            initial_value: default_initial_value(),
        }
    }
}

fn default_step() -> String {
    "0.01".to_string()
}

fn default_placeholder() -> String {
    "0.00".to_string()
}

fn default_initial_value() -> String {
    "0.00".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.refresh_rate_ms, 100);
        assert_eq!(config.input.step, "0.01");
        assert_eq!(config.input.placeholder, "0.00");
        assert_eq!(config.input.initial_value, "0.00");
    }

    #[test]
    fn test_project_config_overrides_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".decimal-tui.toml"),
            "[input]\nstep = \"0.25\"\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&dir.path().to_path_buf())).unwrap();
        assert_eq!(config.input.step, "0.25");
        // Untouched keys keep their defaults
        assert_eq!(config.input.placeholder, "0.00");
        assert_eq!(config.ui.refresh_rate_ms, 100);
    }
}
