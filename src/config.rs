//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides; command-line
//! flags are applied on top by the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub user: UserConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the StudyHub API lives
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    crate::base_url::FALLBACK_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// User identity settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserConfig {
    /// Fixed user id; takes precedence over the stored one
    pub id: Option<String>,

    /// Directory holding the stored user id
    pub state_dir: Option<String>,
}

impl UserConfig {
    /// Resolved state directory
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(default_state_dir)
    }
}

fn default_state_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join("studyhub"))
        .unwrap_or_else(|| PathBuf::from("./.studyhub"))
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("studyhub").join("config.toml")),
            Some(PathBuf::from("./studyhub.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("STUDYHUB_API_URL") {
            self.api.base_url = url;
        }

        if let Some(id) = var("STUDYHUB_USER_ID") {
            self.user.id = Some(id);
        }
        if let Some(dir) = var("STUDYHUB_STATE_DIR") {
            self.user.state_dir = Some(dir);
        }

        if let Some(level) = var("STUDYHUB_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("STUDYHUB_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# StudyHub Configuration
#
# Environment variables override these settings:
# - STUDYHUB_API_URL
# - STUDYHUB_USER_ID
# - STUDYHUB_STATE_DIR
# - STUDYHUB_LOG_LEVEL
# - STUDYHUB_LOG_FORMAT

[api]
# StudyHub backend URL
base_url = "http://127.0.0.1:8000"

[user]
# Fixed user id for progress tracking and the dashboard.
# When unset, the id saved with `studyhub user set` is used.
# id = "your-id"

# Directory where the saved user id is kept
# state_dir = "~/.local/share/studyhub"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert!(config.user.id.is_none());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert!(config.user.id.is_none());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse("[user]\nid = \"ana\"\n").unwrap();
        assert_eq!(config.user.id.as_deref(), Some("ana"));
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studyhub.toml");
        std::fs::write(&path, "[api\nbase_url = 1").unwrap();

        match Config::load(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(matches!(
            Config::load(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STUDYHUB_API_URL", "https://study.example.edu"),
            ("STUDYHUB_USER_ID", "bo"),
            ("STUDYHUB_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "https://study.example.edu");
        assert_eq!(config.user.id.as_deref(), Some("bo"));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_state_dir_override() {
        let user = UserConfig {
            id: None,
            state_dir: Some("/tmp/studyhub-state".to_string()),
        };
        assert_eq!(user.state_dir(), PathBuf::from("/tmp/studyhub-state"));
    }
}
