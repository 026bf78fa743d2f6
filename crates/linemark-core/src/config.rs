//! Configuration management for linemark
//!
//! Supports feature-specific configuration sections:
//! - [diff] - How diff text is produced for a file
//! - [log] - Log level and destination
//! - [output] - Default output format of the CLI

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: &str = "1";

/// Supported configuration versions
pub const SUPPORTED_CONFIG_VERSIONS: &[&str] = &["1"];

/// Repo-local configuration file name
pub const REPO_CONFIG_FILE: &str = ".linemark.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version for tracking schema changes
    #[serde(default = "default_config_version")]
    pub version: String,

    #[serde(default)]
    pub diff: Option<DiffConfig>,

    #[serde(default)]
    pub log: Option<LogConfig>,

    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            diff: None,
            log: None,
            output: None,
        }
    }
}

/// Settings for producing diff text through git
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Program invoked for git operations
    #[serde(default = "default_git_program")]
    pub git_program: String,

    /// Lines of context requested from `git diff` (`-U<n>`)
    #[serde(default)]
    pub context_lines: u32,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            git_program: default_git_program(),
            context_lines: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write logs to this file instead of stderr
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_config_version() -> String {
    CURRENT_CONFIG_VERSION.to_string()
}

fn default_git_program() -> String {
    "git".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Check if the configuration version is supported
    pub fn is_version_supported(&self) -> bool {
        SUPPORTED_CONFIG_VERSIONS.contains(&self.version.as_str())
    }

    /// Get a warning message for unsupported versions
    pub fn version_warning(&self) -> Option<String> {
        if !self.is_version_supported() {
            Some(format!(
                "Configuration version '{}' is not supported. Supported versions: {}. Using defaults where needed.",
                self.version,
                SUPPORTED_CONFIG_VERSIONS.join(", ")
            ))
        } else {
            None
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        if config.version.is_empty() {
            config.version = CURRENT_CONFIG_VERSION.to_string();
        }
        Ok(config)
    }

    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(warning) = config.version_warning() {
            tracing::warn!("{}: {}", path.display(), warning);
        }

        Ok(config)
    }

    /// Get the default config directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("linemark"))
    }

    /// Load configuration with priority:
    /// 1. Defaults
    /// 2. Global config (~/.config/linemark/config.toml)
    /// 3. Repo config (.linemark.toml)
    pub fn load() -> Self {
        let global = Self::get_config_dir().map(|dir| dir.join("config.toml"));
        let repo = PathBuf::from(REPO_CONFIG_FILE);
        Self::load_layers(
            global
                .iter()
                .chain(std::iter::once(&repo))
                .map(PathBuf::as_path),
        )
    }

    /// Merge every existing, parseable file in order on top of the defaults.
    /// Broken files are logged and skipped.
    pub fn load_layers<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Self {
        let mut config = Self::default();
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(path) {
                Ok(loaded) => {
                    tracing::debug!("loaded config from {}", path.display());
                    config = config.merge(loaded);
                }
                Err(e) => tracing::warn!("skipping config: {}", e),
            }
        }
        config
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(mut self, other: Config) -> Self {
        if !other.version.is_empty() {
            self.version = other.version;
        }

        if other.diff.is_some() {
            self.diff = other.diff;
        }
        if other.log.is_some() {
            self.log = other.log;
        }
        if other.output.is_some() {
            self.output = other.output;
        }
        self
    }

    pub fn diff(&self) -> DiffConfig {
        self.diff.clone().unwrap_or_default()
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.as_ref().map(|o| o.format).unwrap_or_default()
    }
}
