//! Template resolution and page composition.
//!
//! A page is rendered in two layers. The content template turns the page body
//! into a fragment, then `fullpage.tmpl` wraps that fragment with the shared
//! partials and site-wide values:
//!
//! ```text
//! body_html ──► <template>.tmpl ──► fragment ──► fullpage.tmpl ──► document
//! ```
//!
//! The content template is the first one that resolves from: the page's
//! `template` metadata, `<content_type>.tmpl`, `default.tmpl`.

use crate::constants::{DEFAULT_TEMPLATE, FULL_PAGE_TEMPLATE, TEMPLATE_KEY, TITLE_KEY};
use crate::context::BuildContext;
use crate::error::{Error, Result};
use crate::frontmatter::Metadata;
use crate::processor::ProcessedPage;
use crate::renderer::TemplateRenderer;
use log::debug;
use minijinja::{context, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Values handed to the page shell for one output page.
#[derive(Debug, Clone)]
pub struct PageRenderContext<'a> {
    pub site_name: &'a str,
    pub logo: &'a str,
    pub title: &'a str,
    pub content: String,
    pub template: &'a str,
    pub metadata: &'a Metadata,
}

/// Picks the content template for a page.
///
/// # Errors
/// * `Error::MissingTemplate` if the template named in metadata is not loaded, or
///   neither `<content_type>.tmpl` nor `default.tmpl` exists
pub fn resolve_template(renderer: &dyn TemplateRenderer, page: &ProcessedPage) -> Result<String> {
    let missing = |template: &str| Error::MissingTemplate {
        template: template.to_string(),
        page: page.entry.relative_path.clone(),
    };

    if let Some(explicit) = page.meta(TEMPLATE_KEY) {
        let explicit = explicit.trim();
        return if renderer.has_template(explicit) {
            Ok(explicit.to_string())
        } else {
            Err(missing(explicit))
        };
    }

    let by_type = format!("{}.tmpl", page.entry.content_type);
    if renderer.has_template(&by_type) {
        return Ok(by_type);
    }
    if renderer.has_template(DEFAULT_TEMPLATE) {
        return Ok(DEFAULT_TEMPLATE.to_string());
    }
    Err(missing(DEFAULT_TEMPLATE))
}

/// Writes a rendered document, creating parent directories and replacing any
/// existing file.
pub fn write_output(output_path: &Path, html: &str) -> Result<()> {
    let io_error = |source| Error::PageIoError { path: output_path.to_path_buf(), source };
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(output_path, html).map_err(io_error)
}

/// Renders pages through the two template layers.
pub struct Compositor<'a> {
    ctx: &'a BuildContext,
    renderer: &'a dyn TemplateRenderer,
    logo: String,
}

impl<'a> Compositor<'a> {
    pub fn new(ctx: &'a BuildContext, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { ctx, renderer, logo: ctx.logo_markup() }
    }

    pub fn renderer(&self) -> &dyn TemplateRenderer {
        self.renderer
    }

    pub fn logo(&self) -> &str {
        &self.logo
    }

    /// Renders a loaded template on behalf of `page`, naming both in any error.
    pub fn render(&self, template: &str, page: &Path, context: &Value) -> Result<String> {
        if !self.renderer.has_template(template) {
            return Err(Error::MissingTemplate {
                template: template.to_string(),
                page: page.to_path_buf(),
            });
        }
        self.renderer.render(template, context).map_err(|e| match e {
            Error::MinijinjaError(source) => Error::RenderError {
                page: page.to_path_buf(),
                template: template.to_string(),
                source,
            },
            other => other,
        })
    }

    /// Wraps a rendered fragment in the page shell.
    pub fn wrap(&self, page: &Path, render_ctx: PageRenderContext<'_>) -> Result<String> {
        let config = self.ctx.config();
        let shell_ctx = context! {
            site_name => render_ctx.site_name,
            logo => Value::from_safe_string(render_ctx.logo.to_string()),
            title => render_ctx.title,
            content => Value::from_safe_string(render_ctx.content),
            template => render_ctx.template,
            metadata => render_ctx.metadata,
            author => &config.author,
            url => &config.url,
        };
        self.render(FULL_PAGE_TEMPLATE, page, &shell_ctx)
    }

    /// Produces the complete HTML document for a processed page.
    pub fn compose(&self, page: &ProcessedPage) -> Result<String> {
        let entry = page.entry;
        let template = resolve_template(self.renderer, page)?;
        let title = page.meta(TITLE_KEY).unwrap_or(&entry.name);
        debug!("Rendering '{}' with {}", entry.relative_path.display(), template);

        let site_name = self.ctx.config().sitename.as_str();
        let content_ctx = context! {
            page => entry,
            title => title,
            content => Value::from_safe_string(page.body_html.clone()),
            metadata => &page.metadata,
            site_name => site_name,
        };
        let fragment = self.render(&template, &entry.relative_path, &content_ctx)?;

        self.wrap(
            &entry.relative_path,
            PageRenderContext {
                site_name,
                logo: &self.logo,
                title,
                content: fragment,
                template: &template,
                metadata: &page.metadata,
            },
        )
    }

    /// Composes a page and writes it to its output path.
    pub fn write_page(&self, page: &ProcessedPage) -> Result<PathBuf> {
        let html = self.compose(page)?;
        write_output(&page.entry.output_path, &html)?;
        Ok(page.entry.output_path.clone())
    }
}
