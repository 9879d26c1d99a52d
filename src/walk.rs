//! Source tree walking.
//!
//! Thin I/O glue around the scan pipeline: validate the root, walk it
//! recursively, and keep the files whose extension matches. Walk order is
//! whatever the filesystem gives us — an accepted non-determinism.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::ScanError;

/// Collect every file under `root` with the given extension (no dot).
///
/// Entries the walker cannot read below the root are warned about and
/// skipped; the walk continues.
///
/// # Errors
///
/// Returns [`ScanError::RootNotFound`] if `root` is missing, not a
/// directory, or unreadable at the top level.
pub fn source_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        match entry {
            Ok(e) if e.file_type().is_file() => {
                if e.path().extension().and_then(|x| x.to_str()) == Some(extension) {
                    files.push(e.into_path());
                }
            }
            Ok(_) => {}
            Err(err) if err.depth() == 0 => {
                // The root itself is unreadable — fatal at startup.
                return Err(ScanError::RootNotFound {
                    path: root.to_path_buf(),
                });
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
            }
        }
    }
    Ok(files)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
