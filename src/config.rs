//! Configuration management with YAML support

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,

    /// Value sent in the X-API-Key header on every request
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Session identity storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Overrides the platform data directory
    #[serde(default)]
    pub storage_path: Option<String>,
}

// Default value functions
fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            api_key: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    /// Searches in order:
    /// 1. Provided path
    /// 2. ./sourcer.yaml (current directory)
    /// 3. ~/.config/sourcer/sourcer.yaml
    ///
    /// `SOURCER_BACKEND_URL` and `SOURCER_API_KEY` override file values.
    pub fn load(path: &str) -> Result<Self> {
        let search_paths = vec![
            shellexpand::tilde(path).to_string(),
            "sourcer.yaml".to_string(),
            shellexpand::tilde("~/.config/sourcer/sourcer.yaml").to_string(),
        ];

        let mut config = Config::default();
        for search_path in &search_paths {
            if std::path::Path::new(search_path).exists() {
                let content = std::fs::read_to_string(search_path)?;
                config = serde_yaml::from_str(&content)?;
                break;
            }
        }

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SOURCER_BACKEND_URL") {
            self.backend.url = url;
        }
        if let Ok(key) = std::env::var("SOURCER_API_KEY") {
            self.backend.api_key = Some(key);
        }
    }

    /// Get the session storage directory, expanding ~ to home directory.
    /// Explicit config wins; otherwise the platform data directory. `None`
    /// means no persistent storage context exists on this system.
    pub fn storage_path(&self) -> Option<PathBuf> {
        match &self.session.storage_path {
            Some(path) => Some(PathBuf::from(shellexpand::tilde(path).to_string())),
            None => dirs::data_local_dir().map(|dir| dir.join("sourcer")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend.url, "http://localhost:8000");
        assert!(config.backend.api_key.is_none());
        assert!(config.session.storage_path.is_none());
    }

    #[test]
    fn test_explicit_storage_path_wins() {
        let mut config = Config::default();
        config.session.storage_path = Some("/tmp/sourcer-test".to_string());
        assert_eq!(
            config.storage_path(),
            Some(PathBuf::from("/tmp/sourcer-test"))
        );
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
backend:
  url: https://rag.example.com
  api_key: secret-key

session:
  storage_path: ~/.cache/sourcer-test
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.backend.url, "https://rag.example.com");
        assert_eq!(config.backend.api_key.as_deref(), Some("secret-key"));
        assert_eq!(
            config.session.storage_path.as_deref(),
            Some("~/.cache/sourcer-test")
        );
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let yaml = r#"
backend:
  api_key: only-a-key
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.backend.url, "http://localhost:8000");
        assert_eq!(config.backend.api_key.as_deref(), Some("only-a-key"));
        assert!(config.session.storage_path.is_none());
    }
}
