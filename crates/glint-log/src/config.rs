//! TOML-backed logging configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::{ConsoleTarget, FileTarget, Level, LogError, LogRouter, TargetSettings};

/// Logging configuration, deserializable from TOML.
///
/// ```toml
/// min_level = "info"
/// max_level = "fatal"
/// timestamps = true
/// file = "kernel.log"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Minimum level to emit.
    #[serde(default = "default_min_level")]
    pub min_level: Level,
    /// Maximum level to emit.
    #[serde(default = "default_max_level")]
    pub max_level: Level,
    /// Whether records carry an elapsed-time prefix.
    #[serde(default)]
    pub timestamps: bool,
    /// Optional log file; when set, a file sink is registered next to
    /// the console sink.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_min_level() -> Level {
    Level::Info
}

fn default_max_level() -> Level {
    Level::Fatal
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
            max_level: default_max_level(),
            timestamps: false,
            file: None,
        }
    }
}

impl LogConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, LogError> {
        Ok(toml::from_str(text)?)
    }

    /// Build a router with a console sink and, if configured, a file
    /// sink.
    pub fn build(&self) -> Result<LogRouter, LogError> {
        let settings = TargetSettings {
            min_level: self.min_level,
            max_level: self.max_level,
            include_timestamps: self.timestamps,
        };

        let mut router = LogRouter::new();
        router.add_target(Box::new(ConsoleTarget::new(settings)));
        if let Some(path) = &self.file {
            router.add_target(Box::new(FileTarget::create(path, settings)?));
        }
        Ok(router)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = LogConfig::from_toml("").unwrap();
        assert_eq!(config.min_level, Level::Info);
        assert_eq!(config.max_level, Level::Fatal);
        assert!(!config.timestamps);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_config_parse() {
        let config = LogConfig::from_toml(
            r#"
            min_level = "debug"
            max_level = "error"
            timestamps = true
            file = "kernel.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.min_level, Level::Debug);
        assert_eq!(config.max_level, Level::Error);
        assert!(config.timestamps);
        assert_eq!(config.file.unwrap(), PathBuf::from("kernel.log"));
    }

    #[test]
    fn test_config_rejects_unknown_level() {
        let result = LogConfig::from_toml(r#"min_level = "loud""#);
        assert!(matches!(result, Err(LogError::Config(_))));
    }

    #[test]
    fn test_config_builds_console_router() {
        let router = LogConfig::default().build().unwrap();
        assert_eq!(router.target_count(), 1);
    }

    #[test]
    fn test_config_builds_file_router() {
        let path = std::env::temp_dir().join("glint_log_config_test.log");
        let config = LogConfig {
            file: Some(path.clone()),
            ..LogConfig::default()
        };
        let router = config.build().unwrap();
        assert_eq!(router.target_count(), 2);
        drop(router);
        std::fs::remove_file(&path).ok();
    }
}
