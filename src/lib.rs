//! Repose is a small static site generator.
//! It turns a tree of markdown and HTML content files with front matter into a
//! tree of HTML pages composed from named templates, and generates listing
//! pages for directories that have no index of their own.

/// Build orchestration: walk, reconcile, render, list
pub mod builder;

/// Command-line interface module for the Repose application
pub mod cli;

/// Site configuration loaded from config.yml
pub mod config;

/// Common constants: file names, delimiters, default templates
pub mod constants;

/// Per-invocation build context
pub mod context;

/// Content template selection and full-page composition
pub mod compositor;

/// Error types and handling for the Repose application
pub mod error;

/// Front matter splitting and key/value parsing
pub mod frontmatter;

/// Listing pages for directories without an index document
pub mod listing;

/// Console logging setup
pub mod logger;

/// In-memory model of the content tree
pub mod model;

/// Front matter extraction and markdown rendering per content file
pub mod processor;

/// Clearing of stale output around the protected assets subtree
pub mod reconcile;

/// Template loading and rendering
pub mod renderer;

/// Creation of new content files
pub mod scaffold;
