//! In-memory model of the content tree.
//! A single walk over the content directory registers every directory and every
//! recognized content file. Nothing is read beyond directory listings here; file
//! bodies are handled later by the processor.

use crate::constants::{
    DEFAULT_CONTENT_TYPE, INDEX_NAME, OUTPUT_EXTENSION, ROOT_CONTENT_TYPE,
    UNLISTED_CONTENT_TYPES,
};
use crate::error::{Error, Result};
use log::{debug, warn};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Source format of a content file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Markdown,
    Html,
}

impl SourceFormat {
    /// Recognizes a content file extension; `None` means the file is not content.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "md" | "markdown" => Some(Self::Markdown),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Markdown => write!(f, "markdown"),
            SourceFormat::Html => write!(f, "html"),
        }
    }
}

/// One content file as discovered by the walk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    /// File name without extension
    pub name: String,
    /// Path relative to the content root, extension included
    pub relative_path: PathBuf,
    /// Destination of the rendered page
    pub output_path: PathBuf,
    /// Site-absolute link to the rendered page
    pub url: String,
    pub format: SourceFormat,
    pub content_type: String,
}

impl FileEntry {
    /// Name of the rendered file, e.g. `hello.html`.
    pub fn output_name(&self) -> String {
        format!("{}.{}", self.name, OUTPUT_EXTENSION)
    }

    /// Whether this file is its directory's own index document.
    pub fn is_index(&self) -> bool {
        self.name == INDEX_NAME
    }
}

/// One content directory and the files directly inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry {
    relative_path: PathBuf,
    content_type: String,
    files: Vec<FileEntry>,
}

impl DirectoryEntry {
    fn new(relative_path: PathBuf) -> Self {
        let content_type = first_segment(&relative_path)
            .unwrap_or_else(|| ROOT_CONTENT_TYPE.to_string());
        Self { relative_path, content_type, files: Vec::new() }
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn has_index(&self) -> bool {
        self.files.iter().any(FileEntry::is_index)
    }

    /// Whether the directory should receive a synthesized listing page.
    pub fn needs_listing(&self) -> bool {
        self.file_count() > 0
            && !self.has_index()
            && !UNLISTED_CONTENT_TYPES.contains(&self.content_type.as_str())
    }
}

/// A content file left out of the model because an earlier file already
/// renders to the same output path (`a.md` next to `a.html`).
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConflict {
    pub file: FileEntry,
    /// Content-relative path of the file that keeps the output
    pub first: PathBuf,
}

/// Directories of the content tree keyed by their path relative to the content root.
#[derive(Debug, Default)]
pub struct ContentModel {
    directories: BTreeMap<PathBuf, DirectoryEntry>,
    conflicts: Vec<OutputConflict>,
}

impl ContentModel {
    pub fn directories(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.directories.values()
    }

    pub fn directory<P: AsRef<Path>>(&self, relative_path: P) -> Option<&DirectoryEntry> {
        self.directories.get(relative_path.as_ref())
    }

    /// All files of all directories, in walk order.
    pub fn files(&self) -> impl Iterator<Item = &FileEntry> {
        self.directories.values().flat_map(|dir| dir.files.iter())
    }

    pub fn file_count(&self) -> usize {
        self.directories.values().map(DirectoryEntry::file_count).sum()
    }

    /// Files skipped because their output path was already taken.
    pub fn conflicts(&self) -> &[OutputConflict] {
        &self.conflicts
    }

    fn register_dir(&mut self, relative_path: &Path) -> &mut DirectoryEntry {
        self.directories
            .entry(relative_path.to_path_buf())
            .or_insert_with(|| DirectoryEntry::new(relative_path.to_path_buf()))
    }
}

fn first_segment(relative_path: &Path) -> Option<String> {
    relative_path.components().next().and_then(|c| match c {
        Component::Normal(s) => s.to_str().map(str::to_string),
        _ => None,
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}

/// Builds the skeleton entry for a content file, or `None` if the file is not content.
///
/// # Arguments
/// * `relative_path` - Path relative to the content root
/// * `output_dir` - Output root the rendered page is placed under
pub fn file_entry<P: AsRef<Path>>(relative_path: P, output_dir: &Path) -> Option<FileEntry> {
    let relative_path = relative_path.as_ref();
    let format = relative_path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(SourceFormat::from_extension)?;
    let name = relative_path.file_stem()?.to_str()?.to_string();

    let parent = relative_path.parent().unwrap_or_else(|| Path::new(""));
    let content_type = if parent.as_os_str().is_empty() {
        DEFAULT_CONTENT_TYPE.to_string()
    } else {
        first_segment(parent).unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string())
    };

    let output_relative = relative_path.with_extension(OUTPUT_EXTENSION);
    let url = std::iter::once(String::new())
        .chain(output_relative.components().filter_map(|c| match c {
            Component::Normal(s) => s.to_str().map(str::to_string),
            _ => None,
        }))
        .collect::<Vec<_>>()
        .join("/");

    Some(FileEntry {
        name,
        relative_path: relative_path.to_path_buf(),
        output_path: output_dir.join(&output_relative),
        url,
        format,
        content_type,
    })
}

/// Walks the content directory and builds the content model.
///
/// # Arguments
/// * `content_dir` - Root of the content tree
/// * `output_dir` - Output root used to compute each file's destination
///
/// Files are visited in file-name order; when two sources render to the same
/// output path the first one keeps it and the other becomes an [`OutputConflict`].
///
/// # Errors
/// * `Error::ContentWalkError` if the content root is missing or any entry cannot be read
pub fn build_content_model(content_dir: &Path, output_dir: &Path) -> Result<ContentModel> {
    debug!("Walking content directory: {}", content_dir.display());
    let mut model = ContentModel::default();
    let mut outputs: HashMap<PathBuf, PathBuf> = HashMap::new();

    let walker = WalkDir::new(content_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|source| Error::ContentWalkError {
            content_dir: content_dir.display().to_string(),
            source,
        })?;
        // walkdir only yields paths below its root, so the prefix always matches.
        let relative = entry.path().strip_prefix(content_dir).unwrap_or(entry.path());

        if entry.file_type().is_dir() {
            debug!("Registering directory: '{}'", relative.display());
            model.register_dir(relative);
            continue;
        }

        match file_entry(relative, output_dir) {
            Some(file) => {
                if let Some(first) = outputs.get(&file.output_path) {
                    warn!(
                        "'{}' and '{}' both render to '{}'",
                        first.display(),
                        relative.display(),
                        file.output_path.display()
                    );
                    model.conflicts.push(OutputConflict { file, first: first.clone() });
                    continue;
                }
                outputs.insert(file.output_path.clone(), file.relative_path.clone());
                debug!("Registering {} file: '{}'", file.format, relative.display());
                let parent = relative.parent().unwrap_or_else(|| Path::new(""));
                model.register_dir(parent).files.push(file);
            }
            None => debug!("Ignoring non-content file: '{}'", relative.display()),
        }
    }

    Ok(model)
}
