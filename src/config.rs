//! Site configuration handling for Repose.
//! Loads `config.yml` from the project root into a [`Config`] that the build
//! pipeline treats as read-only.

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

fn default_content_directory() -> String {
    "content".to_string()
}

fn default_output_directory() -> String {
    "web".to_string()
}

fn default_preview_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_assets_directory() -> String {
    "assets".to_string()
}

/// Site-wide settings read from `config.yml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Name of the site, shown in the page shell
    #[serde(default)]
    pub sitename: String,
    /// Default author for new content
    #[serde(default)]
    pub author: String,
    /// Editor command used by interactive tooling
    #[serde(default)]
    pub editor: String,
    #[serde(default = "default_content_directory")]
    pub content_directory: String,
    #[serde(default = "default_output_directory")]
    pub output_directory: String,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_preview_url")]
    pub preview_url: String,
    #[serde(default)]
    pub theme: String,
    /// Path of the logo image, rendered into the page shell when set
    #[serde(default)]
    pub logo: Option<String>,
    /// Output subtree that survives every rebuild
    #[serde(default = "default_assets_directory")]
    pub assets_directory: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sitename: String::new(),
            author: String::new(),
            editor: String::new(),
            content_directory: default_content_directory(),
            output_directory: default_output_directory(),
            url: String::new(),
            preview_url: default_preview_url(),
            theme: String::new(),
            logo: None,
            assets_directory: default_assets_directory(),
        }
    }
}

impl Config {
    /// Parses configuration content.
    ///
    /// Empty directory settings fall back to their defaults, so
    /// `contentDirectory: ""` does not point the build at the project root.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the content is not a valid YAML mapping
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Config = serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("invalid configuration format: {e}")))?;

        if config.content_directory.trim().is_empty() {
            config.content_directory = default_content_directory();
        }
        if config.output_directory.trim().is_empty() {
            config.output_directory = default_output_directory();
        }
        if config.assets_directory.trim().is_empty() {
            config.assets_directory = default_assets_directory();
        }
        Ok(config)
    }
}

/// Loads the configuration file.
///
/// # Arguments
/// * `config_path` - Path of the configuration file
///
/// # Errors
/// * `Error::ConfigError` if the file is missing, unreadable or invalid
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<Config> {
    let config_path = config_path.as_ref();
    if !config_path.is_file() {
        return Err(Error::ConfigError(format!(
            "no configuration file found at '{}'",
            config_path.display()
        )));
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(config_path).map_err(|e| {
        Error::ConfigError(format!("cannot read '{}': {e}", config_path.display()))
    })?;
    Config::from_yaml(&content)
}
