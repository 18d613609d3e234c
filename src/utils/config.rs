//! Configuration utilities

use crate::sentiment::{Lexicon, LexiconError, SentimentClassifier};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
///
/// Every section has defaults, so a file only needs the parts it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Classifier settings
    pub classifier: ClassifierSettings,
    /// Keyword and emoji tables
    pub lexicon: Lexicon,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Build the classifier described by this configuration
    pub fn build_classifier(&self) -> Result<SentimentClassifier, ConfigError> {
        if self.lexicon.is_empty() {
            tracing::warn!("Lexicon has no entries, every comment will rely on its rating");
        }
        let classifier = SentimentClassifier::new(self.lexicon.clone())?
            .with_emoji(self.classifier.emoji_aware);
        Ok(classifier)
    }
}

/// Classifier settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    /// Run the emoji stage before looking at words
    pub emoji_aware: bool,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self { emoji_aware: true }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON format
    pub json_format: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Serialization format picked from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format of a configuration path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
        }
    }

    fn parse(self, content: &str) -> Result<AppConfig, String> {
        match self {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    fn render(self, config: &AppConfig) -> Result<String, String> {
        match self {
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
        }
    }
}

/// Load configuration from a json, toml or yaml file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = format
        .parse(&content)
        .map_err(|message| ConfigError::Parse { format, message })?;
    tracing::debug!(path = %path.display(), ?format, "Loaded configuration");
    Ok(config)
}

/// Save configuration, picking the format from the file extension
pub fn save_config<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = format
        .render(config)
        .map_err(|message| ConfigError::Serialize { format, message })?;

    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {format:?} configuration: {message}")]
    Parse { format: ConfigFormat, message: String },

    #[error("Cannot write {format:?} configuration: {message}")]
    Serialize { format: ConfigFormat, message: String },

    /// Extension other than json, toml, yaml or yml
    #[error("Unsupported config format: {0:?}")]
    UnsupportedFormat(String),

    #[error("Invalid lexicon: {0}")]
    Lexicon(#[from] LexiconError),
}
