//! Creation of new content files with a pre-filled front matter block.

use crate::constants::NEW_CONTENT;
use crate::context::BuildContext;
use crate::error::{Error, Result};
use cruet::Inflector;
use log::{info, warn};
use minijinja::{context, Environment};
use std::fs;
use std::path::PathBuf;

/// Normalizes a requested file name and derives a title from it.
///
/// Names without a `.md` or `.html` extension get `.md` appended.
///
/// ```
/// use repose::scaffold::file_name_and_title;
/// assert_eq!(
///     file_name_and_title("hello-big_world"),
///     ("hello-big_world.md".to_string(), "Hello Big World".to_string())
/// );
/// ```
pub fn file_name_and_title(name: &str) -> (String, String) {
    let (file_name, stem) = match name.rsplit_once('.') {
        Some((stem, "md" | "html")) => (name.to_string(), stem),
        _ => (format!("{name}.md"), name),
    };
    let title = stem.replace(['-', '_'], " ").to_title_case();
    (file_name, title)
}

/// Fills the new content skeleton in a single render, so values are never
/// expanded twice.
///
/// Values are written inside double quotes as they are. The front matter
/// scanner strips only the outermost pair, so quotes inside a title survive.
pub fn default_content(content_type: &str, title: &str, author: &str) -> Result<String> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    let content = env.render_str(
        NEW_CONTENT,
        context! {
            title => title,
            content_type => content_type,
            author => author,
        },
    )?;
    Ok(content)
}

/// Creates a content file under `<content>/<type_dir>/`.
///
/// # Arguments
/// * `type_dir` - Directory under the content root; its first segment is the content type
/// * `name` - File name, with or without extension
///
/// # Errors
/// * `Error::ContentExistsError` if the file already exists
/// * `Error::IoError` if the file cannot be written
pub fn new_content(ctx: &BuildContext, type_dir: &str, name: &str) -> Result<PathBuf> {
    let (file_name, title) = file_name_and_title(name);
    let content_type = type_dir
        .split(['/', '\\'])
        .find(|s| !s.is_empty())
        .unwrap_or(type_dir);

    let path = ctx.content_dir().join(type_dir).join(&file_name);
    if path.exists() {
        return Err(Error::ContentExistsError { path });
    }

    info!("Creating new {content_type} in {}", ctx.content_dir().display());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = default_content(content_type, &title, &ctx.config().author)?;
    fs::write(&path, content)?;

    let template = format!("{content_type}.tmpl");
    if !ctx.template_dir().join(&template).is_file() {
        warn!("Template file not found: {template}");
    }

    Ok(path)
}
