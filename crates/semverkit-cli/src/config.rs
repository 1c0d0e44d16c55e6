//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (TOML/YAML/JSON)
//! - The `SEMVERKIT_CONFIG` environment variable, via `--config`
//!
//! Command-line flags override whatever is loaded here.

use crate::cli::{ConfigFormat, OutputFormat};
use crate::error::{Error, Result};
use crate::logging::LogFormat;
use semverkit_core::AutoBuild;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults for version operations
    pub defaults: DefaultsConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingSettings,
}

/// Defaults for version operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Strategy used by `stamp` when none is given
    pub auto_build: AutoBuild,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Use colored output when the terminal supports it
    pub color: bool,
}

/// Logging configuration as written in a config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error) or a filter directive
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<LogFormat>,

    /// Log file path
    pub file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: true,
        }
    }
}

impl ConfigFormat {
    /// File extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }

    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Some(ConfigFormat::Toml),
            Some("json") => Some(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "TOML, YAML or JSON".to_string(),
        })?;
        let content = std::fs::read_to_string(path)?;

        let config = match format {
            ConfigFormat::Toml => toml::from_str(&content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(&content)?,
            ConfigFormat::Json => serde_json::from_str(&content)?,
        };

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in &Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Project config path in the current directory for a format
    pub fn project_config_path(format: ConfigFormat) -> PathBuf {
        PathBuf::from(format!(".semverkit.{}", format.extension()))
    }

    /// Get default configuration file paths to check, in priority order
    fn default_config_paths() -> Vec<PathBuf> {
        let formats = [ConfigFormat::Toml, ConfigFormat::Yaml, ConfigFormat::Json];

        // Current directory
        let mut paths: Vec<PathBuf> = formats.iter().map(|f| Self::project_config_path(*f)).collect();
        paths.push(PathBuf::from(".semverkit.yml"));

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let semverkit_dir = config_dir.join("semverkit");
            paths.extend(
                formats
                    .iter()
                    .map(|f| semverkit_dir.join(format!("config.{}", f.extension()))),
            );
        }

        paths
    }

    /// Serialize the configuration in the given format
    pub fn render(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e))),
            ConfigFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ConfigFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }

    /// Save configuration to a file, choosing the format from its extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let format = ConfigFormat::from_path(path).unwrap_or(ConfigFormat::Toml);
        let content = self.render(format)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
