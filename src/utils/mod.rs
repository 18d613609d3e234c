//! Utility modules

pub mod config;

pub use config::{
    load_config, save_config, AppConfig, ClassifierSettings, ConfigError, ConfigFormat,
    LoggingSettings,
};
