//! Listing pages for directories without an index document.

use crate::compositor::{write_output, Compositor, PageRenderContext};
use crate::constants::{LIST_TEMPLATE, OUTPUT_EXTENSION, TITLE_KEY};
use crate::context::BuildContext;
use crate::error::Result;
use crate::frontmatter::Metadata;
use crate::model::DirectoryEntry;
use crate::processor::ProcessedPage;
use crate::renderer::TemplateRenderer;
use log::debug;
use minijinja::context;
use serde::Serialize;
use std::path::PathBuf;

/// One entry of a listing page.
#[derive(Debug, Serialize)]
pub struct ListingLink<'a> {
    pub name: &'a str,
    pub title: &'a str,
    /// Output file name relative to the listed directory, e.g. `hello.html`
    pub link: String,
    pub url: &'a str,
    pub metadata: &'a Metadata,
}

impl<'a> ListingLink<'a> {
    pub fn from_page(page: &'a ProcessedPage<'a>) -> Self {
        let entry = page.entry;
        Self {
            name: &entry.name,
            title: page.meta(TITLE_KEY).unwrap_or(&entry.name),
            link: entry.output_name(),
            url: &entry.url,
            metadata: &page.metadata,
        }
    }
}

/// `<content_type>_list.tmpl` when loaded, otherwise `list.tmpl`.
pub fn list_template_name(renderer: &dyn TemplateRenderer, content_type: &str) -> String {
    let by_type = format!("{content_type}_list.tmpl");
    if renderer.has_template(&by_type) {
        by_type
    } else {
        LIST_TEMPLATE.to_string()
    }
}

/// Where the listing page of a directory is written.
pub fn listing_path(ctx: &BuildContext, dir: &DirectoryEntry) -> PathBuf {
    ctx.output_dir()
        .join(dir.relative_path())
        .join(format!("index.{OUTPUT_EXTENSION}"))
}

/// Renders the listing of `dir` and writes it to `<output>/<dir>/index.html`.
///
/// # Arguments
/// * `pages` - The successfully processed pages of `dir`
pub fn write_listing(
    compositor: &Compositor<'_>,
    ctx: &BuildContext,
    dir: &DirectoryEntry,
    pages: &[&ProcessedPage<'_>],
) -> Result<PathBuf> {
    let content_type = dir.content_type();
    let template = list_template_name(compositor.renderer(), content_type);
    let title = format!("All {content_type}s");
    let page = dir.relative_path().join(format!("index.{OUTPUT_EXTENSION}"));
    debug!("Building listing for '{}' with {}", dir.relative_path().display(), template);

    let files: Vec<ListingLink> = pages.iter().map(|p| ListingLink::from_page(p)).collect();
    let links: Vec<&String> = files.iter().map(|f| &f.link).collect();
    let site_name = ctx.config().sitename.as_str();
    let list_ctx = context! {
        title => &title,
        content_type => content_type,
        path => dir.relative_path(),
        links => links,
        files => &files,
        site_name => site_name,
    };
    let fragment = compositor.render(&template, &page, &list_ctx)?;

    let metadata = Metadata::new();
    let html = compositor.wrap(
        &page,
        PageRenderContext {
            site_name,
            logo: compositor.logo(),
            title: &title,
            content: fragment,
            template: &template,
            metadata: &metadata,
        },
    )?;

    let output_path = listing_path(ctx, dir);
    write_output(&output_path, &html)?;
    Ok(output_path)
}
