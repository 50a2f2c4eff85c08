//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and carry the defaults the rest of the
//! wiring relies on.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_secs cannot be 0")]
    InvalidTimeout,

    #[error("generator model name cannot be empty")]
    EmptyModelName,
}

/// Generative-text backend configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    /// API key for the generation service; also read from
    /// `MOCKMENTOR_API_KEY` via the environment provider.
    pub api_key: Option<String>,
    /// Model identifier sent to the generation endpoint.
    pub model: String,
    /// Base URL of the generation API.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileGeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 120,
        }
    }
}

/// Assessment store configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Path of the JSONL record file. Defaults to the platform data
    /// directory when absent.
    pub path: Option<PathBuf>,
}

/// Caller identity and profile configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProfileConfig {
    /// Opaque caller token; absent means unauthenticated.
    pub token: Option<String>,
    /// Professional domain, e.g. "Backend Engineering".
    pub domain: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: u32,
}

/// Speech-to-text configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriberConfig {
    /// Transcription endpoint; absent disables voice answers.
    pub endpoint: Option<String>,
    pub language: String,
}

impl Default for FileTranscriberConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            language: "en-US".to_string(),
        }
    }
}

/// Complete raw configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub generator: FileGeneratorConfig,
    pub store: FileStoreConfig,
    pub profile: FileProfileConfig,
    pub transcriber: FileTranscriberConfig,
}

impl FileConfig {
    /// Validate invariants that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.generator.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.generator.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.generator.model, "gemini-1.5-flash");
        assert_eq!(config.generator.timeout_secs, 120);
        assert_eq!(config.transcriber.language, "en-US");
        assert!(config.profile.token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [profile]
            token = "local-user"
            domain = "Data Engineering"
            skills = ["Spark", "Airflow"]
            "#,
        )
        .unwrap();
        assert_eq!(config.profile.token.as_deref(), Some("local-user"));
        assert_eq!(config.profile.skills.len(), 2);
        assert_eq!(config.profile.experience_years, 0);
        assert_eq!(config.generator.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let mut config = FileConfig::default();
        config.generator.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }
}
