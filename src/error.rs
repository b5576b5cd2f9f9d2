//! Error handling for the Repose application.
//! Defines the error type shared by every build stage and the result alias used
//! throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for Repose operations.
///
/// Variants fall into two classes. Build-aborting errors (content walk, template
/// directory, output directory, configuration) are returned from
/// [`crate::builder::Builder::build`]. Page-local errors (malformed content,
/// missing template, render failure) are recorded per page and the build carries on.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors while reading or writing a single page
    #[error("IO error on '{path}': {source}.")]
    PageIoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Represents errors that occur during configuration loading
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The content root is missing or cannot be traversed
    #[error("Cannot walk content directory '{content_dir}': {source}.")]
    ContentWalkError {
        content_dir: String,
        #[source]
        source: walkdir::Error,
    },

    /// The output root cannot be created or walked
    #[error("Cannot prepare output directory '{output_dir}': {reason}.")]
    OutputDirectoryError { output_dir: String, reason: String },

    /// The template directory cannot be read or holds no templates
    #[error("Cannot load templates from '{template_dir}': {reason}.")]
    TemplateDirectoryError { template_dir: String, reason: String },

    /// A content file does not carry a complete front matter block
    #[error("Malformed content in '{path}': {reason}.")]
    MalformedContent { path: PathBuf, reason: String },

    /// Two content files render to the same output file
    #[error("'{path}' renders to '{output}', which '{first}' already produces.")]
    DuplicateOutput { path: PathBuf, first: PathBuf, output: PathBuf },

    /// A page requires a template that was not loaded
    #[error("Template '{template}' required by '{page}' was not found.")]
    MissingTemplate { template: String, page: PathBuf },

    /// A template failed while rendering a page
    #[error("Failed to render '{page}' with template '{template}': {source}.")]
    RenderError {
        page: PathBuf,
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// Represents MiniJinja errors raised while parsing templates
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// `new` refuses to replace an existing content file
    #[error("Content file '{path}' already exists.")]
    ContentExistsError { path: PathBuf },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
