//! Configuration loading for the Simbioset shell.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use serde::Deserialize;
use simbioset_core::Language;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    /// Durable mirror of the artifact list.
    pub artifacts_path: PathBuf,
    /// Persisted language preference.
    pub prefs_path: PathBuf,
    /// Translation table (canonical string -> alternate language).
    pub translations_path: PathBuf,
    pub default_language: Option<Language>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or SIMBIOSET_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.artifacts_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "artifacts_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.prefs_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "prefs_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.translations_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "translations_path",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The language used when neither a URL parameter nor a persisted
    /// preference is present.
    pub fn default_language(&self) -> Language {
        self.default_language.unwrap_or(Language::DEFAULT)
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("SIMBIOSET_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
