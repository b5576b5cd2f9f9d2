//! Template loading and rendering for Repose.
//! Every `*.tmpl` file of the template directory is parsed once per build into a
//! MiniJinja environment; pages are then rendered by template name.
use crate::constants::TEMPLATE_GLOB;
use crate::error::{Error, Result};
use globset::Glob;
use log::debug;
use minijinja::{AutoEscape, Environment, Value};
use std::fs;
use std::path::Path;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Whether a template with this name was loaded.
    fn has_template(&self, name: &str) -> bool;

    /// Renders a loaded template with the given context.
    ///
    /// # Arguments
    /// * `name` - Template name, e.g. `post.tmpl`
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template output
    fn render(&self, name: &str, context: &Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment holding every parsed template
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates an empty renderer. Every template is HTML auto-escaped regardless
    /// of its file extension.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        Self { env }
    }

    /// Parses every template in `template_dir` matching `*.tmpl`.
    ///
    /// # Errors
    /// * `Error::TemplateDirectoryError` if the directory cannot be read or no template matches
    /// * `Error::MinijinjaError` if a template has a syntax error
    pub fn from_dir<P: AsRef<Path>>(template_dir: P) -> Result<Self> {
        let template_dir = template_dir.as_ref();
        let dir_error = |reason: String| Error::TemplateDirectoryError {
            template_dir: template_dir.display().to_string(),
            reason,
        };

        let matcher = Glob::new(TEMPLATE_GLOB)
            .map_err(|e| dir_error(e.to_string()))?
            .compile_matcher();

        let mut names = Vec::new();
        for entry in fs::read_dir(template_dir).map_err(|e| dir_error(e.to_string()))? {
            let entry = entry.map_err(|e| dir_error(e.to_string()))?;
            if !entry.file_type().map_err(|e| dir_error(e.to_string()))?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if matcher.is_match(name) {
                    names.push(name.to_string());
                }
            }
        }
        if names.is_empty() {
            return Err(dir_error(format!("no files match '{TEMPLATE_GLOB}'")));
        }
        names.sort();

        let mut renderer = Self::new();
        for name in names {
            let source = fs::read_to_string(template_dir.join(&name))?;
            debug!("Loading template: {name}");
            renderer.add_template(name, source)?;
        }
        Ok(renderer)
    }

    /// Adds a template from source text.
    pub fn add_template(&mut self, name: String, source: String) -> Result<()> {
        self.env.add_template_owned(name, source).map_err(Error::MinijinjaError)
    }

    /// Adds `source` under `name` unless a template with that name is already loaded.
    ///
    /// Returns `true` if the fallback was added.
    pub fn add_fallback(&mut self, name: &str, source: &str) -> Result<bool> {
        if self.has_template(name) {
            return Ok(false);
        }
        self.add_template(name.to_string(), source.to_string())?;
        Ok(true)
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Renders a named template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template is missing or rendering fails
    fn render(&self, name: &str, context: &Value) -> Result<String> {
        let tmpl = self.env.get_template(name).map_err(Error::MinijinjaError)?;
        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}
