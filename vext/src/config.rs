//! Configuration module for the vext CLI.
//!
//! Settings come from a `vext.toml` file. Every field is optional and
//! command-line flags take precedence over whatever the file says.

use dirs::config_dir;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{Result, VextError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "vext.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log filter used when `--verbose` is not given.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Token output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Check-specific settings.
    #[serde(default)]
    pub check: CheckConfig,

    /// File the configuration was read from, if any.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

/// Settings for the `tokens` command.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format for token dumps.
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether the trailing `END_OF_FILE` token is printed.
    #[serde(default = "default_true")]
    pub show_eof: bool,
}

/// Settings for the `check` command.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Fail the check when only warnings were reported.
    #[serde(default)]
    pub deny_warnings: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputConfig::default(),
            check: CheckConfig::default(),
            path: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_eof: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. The user's configuration directory (`<config_dir>/vext/vext.toml`)
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VextError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("vext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.show_eof);
        assert!(!config.check.deny_warnings);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
            log_level = "warn"

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_eof);
        assert!(!config.check.deny_warnings);
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml(
            r#"
            [output]
            format = "text"
            show_eof = false

            [check]
            deny_warnings = true
            "#,
        )
        .unwrap();
        assert!(!config.output.show_eof);
        assert!(config.check.deny_warnings);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = Config::from_toml("[output]\nformat = \"yaml\"").unwrap_err();
        assert!(matches!(err, VextError::Toml(_)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(Config::from_toml("colour = true").is_err());
    }

    #[test]
    fn test_load_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[check]\ndeny_warnings = true\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.check.deny_warnings);
        assert_eq!(config.path, Some(path));
    }

    #[test]
    fn test_default_config_has_no_path() {
        assert_eq!(Config::default().path, None);
        assert_eq!(Config::from_toml("log_level = \"warn\"").unwrap().path, None);
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_from_path(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, VextError::Config(_)));
        assert!(err.to_string().contains("Configuration file not found"));
    }
}
