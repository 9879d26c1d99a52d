//! Scan error types.
//!
//! Defines [`ScanError`], the unified error type for the scan pipeline.
//! The taxonomy follows a strict recovery policy: per-file and
//! per-occurrence errors are recovered locally and never abort the run;
//! only a bad scan root is fatal at startup.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ScanError
// ---------------------------------------------------------------------------

/// Unified error type for scan operations.
#[derive(Debug)]
pub enum ScanError {
    /// The scan root does not exist or is not a directory. Fatal at startup.
    RootNotFound {
        /// The path that was given as the scan root.
        path: PathBuf,
    },

    /// A source file could not be read (I/O failure or invalid UTF-8).
    /// The file is skipped with a warning; the walk continues.
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An invocation's argument list never closes before end of input.
    /// The occurrence is skipped with a warning; the rest of the file is
    /// still scanned.
    UnbalancedDelimiters {
        /// File containing the truncated invocation.
        path: PathBuf,
        /// Byte offset of the invocation's opening delimiter.
        offset: usize,
    },

    /// The property scanner received an improperly bounded block — depth
    /// went negative inside text the extractor claimed was balanced. This
    /// is an internal contract violation between extractor and scanner,
    /// fatal to that file's scan.
    MalformedBlock {
        /// File being scanned when the contract broke.
        path: PathBuf,
        /// Byte offset (within the block's inner text) of the stray close.
        offset: usize,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotFound { path } => {
                write!(
                    f,
                    "scan root '{}' not found or not a directory.\n  To fix: pass an existing directory, e.g.:\n    decolint path/to/lib",
                    path.display()
                )
            }
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::UnbalancedDelimiters { path, offset } => {
                write!(
                    f,
                    "unbalanced delimiters in '{}' at byte {offset}: argument list never closes",
                    path.display()
                )
            }
            Self::MalformedBlock { path, offset } => {
                write!(
                    f,
                    "malformed block in '{}': depth went negative at inner byte {offset} (extractor/scanner contract violation)",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
