//! Output directory reconciliation.
//!
//! Before a build writes new pages, everything previously generated under the
//! output root is removed, except the protected assets subtree. Directories
//! cannot be removed while the walk is still inside them, so removal happens in
//! two passes: files are deleted during the walk and directories are collected,
//! then the collected directories are removed deepest first.

use crate::error::{Error, Result};
use log::{debug, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What a reconciliation pass removed and what it had to leave behind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    pub files_removed: usize,
    pub dirs_removed: usize,
    /// Directories that could not be removed, typically because they were not empty
    pub dirs_kept: Vec<PathBuf>,
}

/// Clears generated output under `output_dir`, leaving `protected_dir` untouched.
///
/// The output root is created if it does not exist yet.
///
/// # Errors
/// * `Error::OutputDirectoryError` if the output root cannot be created or walked,
///   or a stale file cannot be deleted
pub fn reconcile_output(output_dir: &Path, protected_dir: &Path) -> Result<ReconcileReport> {
    info!("Resetting output directory: {}", output_dir.display());
    let output_error = |reason: String| Error::OutputDirectoryError {
        output_dir: output_dir.display().to_string(),
        reason,
    };

    fs::create_dir_all(output_dir).map_err(|e| output_error(e.to_string()))?;

    let mut report = ReconcileReport::default();
    let mut dirs_to_delete = Vec::new();

    let walker = WalkDir::new(output_dir)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !e.path().starts_with(protected_dir));

    for entry in walker {
        let entry = entry.map_err(|e| output_error(e.to_string()))?;
        let path = entry.path();
        if entry.file_type().is_dir() {
            dirs_to_delete.push(path.to_path_buf());
        } else {
            debug!("Removing stale file: {}", path.display());
            fs::remove_file(path)
                .map_err(|e| output_error(format!("cannot remove '{}': {e}", path.display())))?;
            report.files_removed += 1;
        }
    }

    // Reverse order puts every directory before its parent.
    dirs_to_delete.sort_unstable_by(|a, b| b.cmp(a));

    for dir in dirs_to_delete {
        match fs::remove_dir(&dir) {
            Ok(()) => report.dirs_removed += 1,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                warn!("Failed to delete directory (may not be empty): {}: {e}", dir.display());
                report.dirs_kept.push(dir);
            }
        }
    }

    Ok(report)
}
