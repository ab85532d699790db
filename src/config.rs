//!
//! Configuration for shquote: the target file and the rewrite options.
//! Loaded from `.shquote.toml`, with CLI flags layered on top by the binary.

use crate::rewriter::RewriteOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when no `--config` is given
pub const CONFIG_FILE: &str = ".shquote.toml";

/// File rewritten when no path is given anywhere
pub const DEFAULT_TARGET: &str = "Jenkinsfile";

/// Represents the complete configuration loaded from .shquote.toml
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub global: GlobalConfig,

    #[serde(default)]
    pub rewrite: RewriteOptions,
}

/// Global configuration options
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobalConfig {
    /// File to rewrite
    pub path: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_TARGET),
        }
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config at {path}: {message}")]
    ParseError { path: String, message: String },

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    FileExists { path: String },
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, `.shquote.toml` in the
    /// current directory is used if present, otherwise defaults apply.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path {
            Some(path) => {
                log::debug!("[shquote-config] Explicit config_path provided: {}", path.display());
                Self::load_from_file(path)
            }
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.is_file() {
                    log::debug!("[shquote-config] Found {CONFIG_FILE} in working directory");
                    Self::load_from_file(path)
                } else {
                    log::debug!("[shquote-config] No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Default configuration file content written by `shquote init`
pub fn default_config_content() -> String {
    let defaults = RewriteOptions::default();
    format!(
        r#"# shquote configuration file

[global]
# File to rewrite (relative to the working directory)
path = "{DEFAULT_TARGET}"

[rewrite]
# Step name that introduces a triple-quoted block
marker = "{marker}"
# Quote style to replace: "single" (''') or "double" (""")
from = "{from}"
# Quote style to write
to = "{to}"
"#,
        marker = defaults.marker,
        from = defaults.from,
        to = defaults.to,
    )
}

/// Create a default configuration file at the specified path
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::FileExists {
            path: path.display().to_string(),
        });
    }

    fs::write(path, default_config_content()).map_err(|source| ConfigError::IoError {
        source,
        path: path.display().to_string(),
    })
}
