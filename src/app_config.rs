/*!
 * Application configuration module
 *
 * This module handles the service configuration: the supported language
 * list, the model registry, and the inference backend settings.
 */

use anyhow::{Context, Result, anyhow};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::{MULTILINGUAL_CODE, ModelEntry};

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Supported language codes (FLORES-200 style, e.g. `eng_Latn`)
    pub languages: Vec<String>,

    /// Model registry entries, in resolution tie-break order
    pub models: Vec<ModelEntry>,

    /// Inference backend settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Inference backend settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendConfig {
    /// Base URL of the inference server
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:8089".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// Log level setting
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.as_ref().display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(anyhow!("Config must list at least one supported language"));
        }
        if self.models.is_empty() {
            return Err(anyhow!("Config must register at least one model"));
        }

        for entry in &self.models {
            if entry.model_id.is_empty() {
                return Err(anyhow!("Model entry with empty model_id"));
            }
            // Multilingual models are identified by the reserved sentinel
            // prefix; an unprefixed id would never be selected as one.
            if entry.multilingual && !entry.model_id.starts_with(MULTILINGUAL_CODE) {
                warn!(
                    "Model {} is flagged multilingual but its id lacks the '{}' prefix",
                    entry.model_id, MULTILINGUAL_CODE
                );
            }
        }

        Ok(())
    }
}
