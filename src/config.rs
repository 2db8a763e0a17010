//! Configuration handling for the registration wizard

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Webhook used when neither the config file nor the environment names one
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/family-registration";
pub const DEFAULT_TYPST_BINARY: &str = "typst";

pub const WEBHOOK_URL_ENV: &str = "REGISTRATION_WEBHOOK_URL";
pub const OUTPUT_DIR_ENV: &str = "REGISTRATION_OUTPUT_DIR";

/// User configuration, read from `config.json` in the platform config directory
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RegistrationConfig {
    /// Where submissions are POSTed
    pub webhook_url: Option<String>,
    /// Where saved PDFs are written
    pub output_dir: Option<PathBuf>,
    /// Typst compiler executable
    pub typst_binary: Option<String>,
}

impl RegistrationConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "family-registration", "family-registration-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                config = serde_json::from_str(&content)?;
            }
        }

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Replace settings with non-empty values from `lookup`
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(url) = non_empty(WEBHOOK_URL_ENV) {
            self.webhook_url = Some(url);
        }
        if let Some(dir) = non_empty(OUTPUT_DIR_ENV) {
            self.output_dir = Some(PathBuf::from(dir));
        }
        self
    }

    pub fn webhook_url(&self) -> &str {
        self.webhook_url.as_deref().unwrap_or(DEFAULT_WEBHOOK_URL)
    }

    pub fn typst_binary(&self) -> &str {
        self.typst_binary.as_deref().unwrap_or(DEFAULT_TYPST_BINARY)
    }

    /// Configured output directory, else the platform data directory, else
    /// the working directory
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().join("documents")))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = RegistrationConfig::default();
        assert!(config.webhook_url.is_none());
        assert_eq!(config.webhook_url(), DEFAULT_WEBHOOK_URL);
        assert_eq!(config.typst_binary(), "typst");
    }

    #[test]
    fn test_serialization() {
        let config = RegistrationConfig {
            webhook_url: Some("https://hooks.test/registration".to_string()),
            output_dir: Some(PathBuf::from("/srv/forms")),
            typst_binary: Some("/opt/typst/bin/typst".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: RegistrationConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: RegistrationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, RegistrationConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"webhook_url": "https://a.test/x", "unknown_field": "value"}"#;
        let parsed: RegistrationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.webhook_url(), "https://a.test/x");
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = RegistrationConfig {
            webhook_url: Some("https://file.test/hook".to_string()),
            ..Default::default()
        }
        .with_overrides(|key| match key {
            WEBHOOK_URL_ENV => Some("https://env.test/hook".to_string()),
            OUTPUT_DIR_ENV => Some("/tmp/out".to_string()),
            _ => None,
        });

        assert_eq!(config.webhook_url(), "https://env.test/hook");
        assert_eq!(config.output_dir(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let config = RegistrationConfig {
            webhook_url: Some("https://file.test/hook".to_string()),
            ..Default::default()
        }
        .with_overrides(|_| Some("  ".to_string()));
        assert_eq!(config.webhook_url(), "https://file.test/hook");
    }

    #[test]
    fn test_output_dir_has_fallback() {
        let dir = RegistrationConfig::default().output_dir();
        assert!(!dir.as_os_str().is_empty());
    }
}
