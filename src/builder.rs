//! Build orchestration.
//!
//! ```text
//! Builder::new()          parse templates             (fatal)
//! Builder::build()
//!     ├── check_output_dir()                          (fatal)
//!     ├── build_content_model()                       (fatal)
//!     ├── reconcile_output()                          (fatal / warn)
//!     ├── process + compose every file                (page-local)
//!     └── write listings for directories w/o index    (page-local)
//! ```
//!
//! Page-local failures are logged and collected in [`BuildSummary::failures`];
//! they never abort the build.

use crate::compositor::Compositor;
use crate::constants::{BUILTIN_LIST_TEMPLATE, LIST_TEMPLATE};
use crate::context::BuildContext;
use crate::error::{Error, Result};
use crate::listing::write_listing;
use crate::model::build_content_model;
use crate::processor::{self, ProcessedPage};
use crate::reconcile::{reconcile_output, ReconcileReport};
use crate::renderer::MiniJinjaRenderer;
use log::{error, info, warn};
use std::path::PathBuf;

/// A page that could not be built.
#[derive(Debug)]
pub struct PageFailure {
    /// Content-relative path of the page
    pub path: PathBuf,
    pub error: Error,
}

/// Outcome of a successful build.
#[derive(Debug, Default)]
pub struct BuildSummary {
    /// Output files written for content pages
    pub pages: Vec<PathBuf>,
    /// Output files written for synthesized listings
    pub listings: Vec<PathBuf>,
    pub failures: Vec<PageFailure>,
    pub reconcile: ReconcileReport,
}

impl BuildSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record_failure(&mut self, path: PathBuf, error: Error) {
        error!("{error}");
        self.failures.push(PageFailure { path, error });
    }
}

/// Builds a site from its content tree.
pub struct Builder<'a> {
    ctx: &'a BuildContext,
    renderer: MiniJinjaRenderer,
}

impl<'a> Builder<'a> {
    /// Parses every template of the project.
    ///
    /// # Errors
    /// * `Error::TemplateDirectoryError` or `Error::MinijinjaError` if templates cannot be loaded
    pub fn new(ctx: &'a BuildContext) -> Result<Self> {
        let mut renderer = MiniJinjaRenderer::from_dir(ctx.template_dir())?;
        if renderer.add_fallback(LIST_TEMPLATE, BUILTIN_LIST_TEMPLATE)? {
            warn!("Template '{LIST_TEMPLATE}' not found, using the built-in listing template");
        }
        Ok(Self { ctx, renderer })
    }

    /// Runs the whole pipeline.
    ///
    /// # Errors
    /// Only build-aborting errors are returned: content walk and output
    /// directory failures.
    pub fn build(&self) -> Result<BuildSummary> {
        let ctx = self.ctx;
        info!("Building site from {}", ctx.content_dir().display());
        ctx.check_output_dir()?;

        let model = build_content_model(ctx.content_dir(), ctx.output_dir())?;
        info!(
            "Found {} content files in {} directories",
            model.file_count(),
            model.directories().count()
        );

        let mut summary = BuildSummary {
            reconcile: reconcile_output(ctx.output_dir(), &ctx.assets_dir())?,
            ..BuildSummary::default()
        };

        for conflict in model.conflicts() {
            let error = Error::DuplicateOutput {
                path: conflict.file.relative_path.clone(),
                first: conflict.first.clone(),
                output: conflict.file.output_path.clone(),
            };
            summary.record_failure(conflict.file.relative_path.clone(), error);
        }

        let compositor = Compositor::new(ctx, &self.renderer);

        info!("Rendering pages");
        let mut processed: Vec<ProcessedPage> = Vec::with_capacity(model.file_count());
        for entry in model.files() {
            let page = match processor::process(ctx.content_dir(), entry) {
                Ok(page) => page,
                Err(e) => {
                    summary.record_failure(entry.relative_path.clone(), e);
                    continue;
                }
            };
            match compositor.write_page(&page) {
                Ok(path) => {
                    summary.pages.push(path);
                    processed.push(page);
                }
                Err(e) => summary.record_failure(entry.relative_path.clone(), e),
            }
        }

        info!("Building index files");
        for dir in model.directories().filter(|d| d.needs_listing()) {
            let pages: Vec<&ProcessedPage> = processed
                .iter()
                .filter(|p| p.entry.relative_path.parent() == Some(dir.relative_path()))
                .collect();
            match write_listing(&compositor, ctx, dir, &pages) {
                Ok(path) => summary.listings.push(path),
                Err(e) => summary.record_failure(dir.relative_path().join("index.html"), e),
            }
        }

        Ok(summary)
    }
}
