//! Per-invocation build context.
//! Resolves the project directories once and carries the configuration through
//! every stage, so no stage reaches for global state.

use crate::config::{load_config, Config};
use crate::constants::{CONFIG_FILE, TEMPLATE_DIR};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Everything a build needs to know about the project on disk.
#[derive(Debug, Clone)]
pub struct BuildContext {
    config: Config,
    root: PathBuf,
    content_dir: PathBuf,
    output_dir: PathBuf,
    template_dir: PathBuf,
}

impl BuildContext {
    /// Creates a context for the project at `root` with an already loaded configuration.
    pub fn new<P: AsRef<Path>>(root: P, config: Config) -> Self {
        let root = root.as_ref();
        let content_dir = root.join(&config.content_directory);
        let output_dir = root.join(&config.output_directory);
        let template_dir = root.join(TEMPLATE_DIR);
        Self { config, root: root.to_path_buf(), content_dir, output_dir, template_dir }
    }

    /// Loads the configuration file and creates the context.
    ///
    /// # Arguments
    /// * `root` - Project root directory
    /// * `config_file` - Configuration file; relative paths are resolved against `root`
    pub fn load<P: AsRef<Path>>(root: P, config_file: Option<&Path>) -> Result<Self> {
        let root = root.as_ref();
        let config_path = match config_file {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => root.join(path),
            None => root.join(CONFIG_FILE),
        };
        let config = load_config(config_path)?;
        Ok(Self::new(root, config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// The protected output subtree.
    pub fn assets_dir(&self) -> PathBuf {
        self.output_dir.join(&self.config.assets_directory)
    }

    /// Refuses an output root that is, or lies above, the project root, the
    /// content directory or the template directory. Reconciling such an output
    /// root would delete the sources of the site.
    ///
    /// # Errors
    /// * `Error::OutputDirectoryError` naming the swallowed directory
    pub fn check_output_dir(&self) -> Result<()> {
        let sources = [
            ("project root", &self.root),
            ("content directory", &self.content_dir),
            ("template directory", &self.template_dir),
        ];
        for (what, dir) in sources {
            if encloses(&self.output_dir, dir) {
                return Err(Error::OutputDirectoryError {
                    output_dir: self.output_dir.display().to_string(),
                    reason: format!("it would contain the {what} '{}'", dir.display()),
                });
            }
        }
        Ok(())
    }

    /// Logo markup for the page shell; empty when no logo is configured.
    pub fn logo_markup(&self) -> String {
        match &self.config.logo {
            Some(src) if !src.is_empty() => format!(
                r#"<img src="{}" alt="{}" width="50" height="50">"#,
                escape_attribute(src),
                escape_attribute(&self.config.sitename)
            ),
            _ => String::new(),
        }
    }
}

/// Whether `inner` is `outer` or lies below it, compared as written and, when
/// both exist, after resolving `..` and symlinks.
fn encloses(outer: &Path, inner: &Path) -> bool {
    if inner.starts_with(outer) {
        return true;
    }
    match (outer.canonicalize(), inner.canonicalize()) {
        (Ok(outer), Ok(inner)) => inner.starts_with(outer),
        _ => false,
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
