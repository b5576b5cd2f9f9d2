//! Front matter splitting and parsing.
//!
//! A content file looks like:
//!
//! ```text
//! ---
//! title: Hello World
//! template: post.tmpl
//! ---
//! # Body
//! ```
//!
//! The block between the first two `---` lines is scanned line by line as flat
//! `key: value` pairs. This is deliberately not YAML: list values such as
//! `tags: [a, b]` are kept as raw text.

use crate::constants::FRONT_MATTER_DELIMITER;
use indexmap::IndexMap;
use log::warn;

/// Metadata extracted from a front matter block, in declaration order.
pub type Metadata = IndexMap<String, String>;

/// A content file split into its front matter block and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    pub front_matter: &'a str,
    pub body: &'a str,
}

fn is_delimiter(line: &str) -> bool {
    line.trim() == FRONT_MATTER_DELIMITER
}

/// Splits a source file into front matter and body.
///
/// Anything before the first delimiter line is discarded. Returns `None` if the
/// source does not contain two delimiter lines.
pub fn split(source: &str) -> Option<Document<'_>> {
    let mut delimiters = Vec::with_capacity(2);
    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        if is_delimiter(line) {
            delimiters.push((offset, offset + line.len()));
            if delimiters.len() == 2 {
                break;
            }
        }
        offset += line.len();
    }

    match delimiters.as_slice() {
        [(_, block_start), (block_end, body_start)] => Some(Document {
            front_matter: &source[*block_start..*block_end],
            body: &source[*body_start..],
        }),
        _ => None,
    }
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parses a front matter block into metadata.
///
/// Each line is split on its first colon and both sides are trimmed. Lines
/// without a colon are skipped with a warning, blank lines silently. A later
/// duplicate key replaces the earlier value.
pub fn parse(block: &str) -> Metadata {
    let mut metadata = Metadata::new();
    for line in block.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            warn!("Skipping front matter line without a key: '{}'", line.trim());
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            warn!("Skipping front matter line without a key: '{}'", line.trim());
            continue;
        }
        metadata.insert(key.to_string(), unquote(value.trim()).to_string());
    }
    metadata
}
