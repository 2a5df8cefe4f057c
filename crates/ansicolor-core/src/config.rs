//! Configuration types for ansicolor.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Error;

/// Log levels accepted by `general.log_level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration loaded from YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnsicolorConfig {
    /// General settings
    pub general: GeneralSettings,
    /// Which documents are post-processed
    pub target: TargetSettings,
}

impl AnsicolorConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: AnsicolorConfig =
            serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if !LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(Error::Config(format!(
                "general.log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.general.log_level
            )));
        }

        self.target.validate()
    }
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Target settings: which pipeline output is rewritten and how.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TargetSettings {
    /// Output format name this filter handles (e.g. "html")
    pub format: String,
    /// File extension of documents to rewrite, without the leading dot
    pub extension: String,
    /// Walk sub-directories of the output directory
    pub recursive: bool,
    /// Translate but never write files back
    pub dry_run: bool,
}

impl Default for TargetSettings {
    fn default() -> Self {
        Self {
            format: "html".to_string(),
            extension: "html".to_string(),
            recursive: false,
            dry_run: false,
        }
    }
}

impl TargetSettings {
    /// Validate the target settings.
    pub fn validate(&self) -> crate::Result<()> {
        if self.format.trim().is_empty() {
            return Err(Error::Config("target.format cannot be empty".to_string()));
        }

        if self.extension.trim().is_empty() {
            return Err(Error::Config(
                "target.extension cannot be empty".to_string(),
            ));
        }

        if self.extension.starts_with('.') {
            return Err(Error::Config(format!(
                "target.extension must not start with '.', got '{}'",
                self.extension
            )));
        }

        Ok(())
    }

    /// Check whether a pipeline output format is the one this filter handles.
    pub fn handles_format(&self, output_format: &str) -> bool {
        self.format == output_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnsicolorConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.target.format, "html");
        assert_eq!(config.target.extension, "html");
        assert!(!config.target.recursive);
        assert!(!config.target.dry_run);
    }

    #[test]
    fn test_config_validation() {
        let config = AnsicolorConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AnsicolorConfig::default();
        config.general.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_empty_format() {
        let mut config = AnsicolorConfig::default();
        config.target.format = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_extension_with_dot() {
        let mut config = AnsicolorConfig::default();
        config.target.extension = ".html".to_string();
        assert!(config.validate().is_err());

        config.target.extension = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
general:
  log_level: debug

target:
  format: singlehtml
  extension: htm
  recursive: true
  dry_run: true
"#;

        let config = AnsicolorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.target.format, "singlehtml");
        assert_eq!(config.target.extension, "htm");
        assert!(config.target.recursive);
        assert!(config.target.dry_run);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
target:
  recursive: true
"#;

        let config = AnsicolorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.target.format, "html");
        assert!(config.target.recursive);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = AnsicolorConfig::from_yaml("target: [unclosed");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_missing_file() {
        let result = AnsicolorConfig::from_file("/nonexistent/ansicolor.yaml");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_handles_format() {
        let settings = TargetSettings::default();
        assert!(settings.handles_format("html"));
        assert!(!settings.handles_format("latex"));
        assert!(!settings.handles_format("HTML"));
    }
}
