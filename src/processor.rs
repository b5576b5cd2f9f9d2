//! Content processing.
//! Reads a content file, separates its front matter from the body and renders
//! the body to HTML.

use crate::error::{Error, Result};
use crate::frontmatter::{self, Metadata};
use crate::model::{FileEntry, SourceFormat};
use log::debug;
use pulldown_cmark::{html, Options, Parser};
use std::fs;
use std::path::Path;

/// A content file after processing. Immutable from here on.
#[derive(Debug, Clone)]
pub struct ProcessedPage<'a> {
    pub entry: &'a FileEntry,
    pub metadata: Metadata,
    pub body_html: String,
}

impl ProcessedPage<'_> {
    /// Metadata value for `key`, if present and not blank.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str).filter(|v| !v.trim().is_empty())
    }
}

/// Converts CommonMark to HTML.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Processes already loaded source text for `entry`.
///
/// # Errors
/// * `Error::MalformedContent` if the source lacks a complete front matter block
pub fn process_source<'a>(entry: &'a FileEntry, source: &str) -> Result<ProcessedPage<'a>> {
    let document = frontmatter::split(source).ok_or_else(|| Error::MalformedContent {
        path: entry.relative_path.clone(),
        reason: "expected a front matter block delimited by two '---' lines".to_string(),
    })?;

    let metadata = frontmatter::parse(document.front_matter);
    let body_html = match entry.format {
        SourceFormat::Markdown => markdown_to_html(document.body),
        SourceFormat::Html => document.body.to_string(),
    };

    Ok(ProcessedPage { entry, metadata, body_html })
}

/// Reads and processes the content file for `entry`.
///
/// # Arguments
/// * `content_dir` - Root of the content tree `entry` is relative to
/// * `entry` - File skeleton from the content model
///
/// # Errors
/// * `Error::PageIoError` if the file cannot be read
/// * `Error::MalformedContent` if the front matter block is incomplete
pub fn process<'a>(content_dir: &Path, entry: &'a FileEntry) -> Result<ProcessedPage<'a>> {
    let path = content_dir.join(&entry.relative_path);
    debug!("Processing {} file: '{}'", entry.format, entry.relative_path.display());
    let source = fs::read_to_string(&path)
        .map_err(|source| Error::PageIoError { path: entry.relative_path.clone(), source })?;
    process_source(entry, &source)
}
