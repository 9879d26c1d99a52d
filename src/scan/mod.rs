//! The scan pipeline.
//!
//! Per buffer: [`locator::Invocations`] finds each site of the target
//! constructor, [`extractor::extract`] turns the site into a balanced
//! argument-list block, [`properties::top_level_properties`] reduces the
//! block to its set of depth-zero property names, and [`rule::is_conflict`]
//! decides the verdict. Everything downstream of the locator is a pure
//! function of the input bytes — scanning the same buffer twice yields
//! identical results.
//!
//! This is a heuristic character scanner, not a Dart parser. Delimiters
//! inside string literals or comments corrupt depth tracking; that is an
//! accepted source of false positives and negatives, inherited from the
//! tool's original design, and must not be "fixed" here.
//!
//! Recovery policy: an unreadable file or a truncated invocation is
//! warned about and skipped; a scanner contract violation
//! ([`ScanError::MalformedBlock`]) kills that file's scan loudly; nothing
//! short of a bad scan root aborts the run.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, error, warn};

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::report::ConflictReport;
use crate::walk;

pub mod extractor;
pub mod locator;
pub mod properties;
pub mod rule;

// ---------------------------------------------------------------------------
// Identifier bytes
// ---------------------------------------------------------------------------

// Dart identifiers are approximated as ASCII [A-Za-z0-9_$]. Multi-byte
// UTF-8 never collides: continuation bytes are >= 0x80 and fail both tests.

pub(crate) const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

pub(crate) const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

// ---------------------------------------------------------------------------
// Per-buffer scan
// ---------------------------------------------------------------------------

/// One confirmed conflict within a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conflict<'a> {
    /// Byte offset of the constructor name.
    pub name_start: usize,
    /// Byte offset of the opening `(`.
    pub open: usize,
    /// Byte offset of the matching closing `)`.
    pub close: usize,
    /// Raw text of the full invocation, constructor name included.
    pub block: &'a str,
}

/// Result of scanning one buffer: conflicts plus any skipped occurrences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferScan<'a> {
    /// Confirmed conflicts, in buffer order.
    pub conflicts: Vec<Conflict<'a>>,
    /// Opening-delimiter offsets of invocations that never closed.
    pub unbalanced: Vec<usize>,
}

/// Scan one buffer for conflicting invocations.
///
/// Truncated invocations are collected in [`BufferScan::unbalanced`], not
/// reported as errors — per-occurrence recovery is the caller's business.
/// A negative-depth excursion inside an extracted block is an internal
/// contract violation and fails the whole buffer.
///
/// # Errors
///
/// Returns [`properties::NegativeDepth`] if the property scanner hits a
/// close with no matching open inside an extracted block.
pub fn scan_buffer<'a>(
    buffer: &'a str,
    cfg: &ScanConfig,
) -> Result<BufferScan<'a>, properties::NegativeDepth> {
    let mut scan = BufferScan::default();
    for site in locator::Invocations::new(buffer, &cfg.target_name) {
        match extractor::extract(buffer, site.open) {
            Ok(m) => {
                let props = properties::top_level_properties(m.inner())?;
                if rule::is_conflict(&props, &cfg.direct_property, &cfg.compound_property) {
                    scan.conflicts.push(Conflict {
                        name_start: site.name_start,
                        open: m.open,
                        close: m.close,
                        block: &buffer[site.name_start..=m.close],
                    });
                }
            }
            Err(unbalanced) => scan.unbalanced.push(unbalanced.offset),
        }
    }
    Ok(scan)
}

// ---------------------------------------------------------------------------
// Per-file scan
// ---------------------------------------------------------------------------

/// Read one file and scan it, turning conflicts into [`ConflictReport`]s.
///
/// Truncated invocations are warned about here (with file and offset) and
/// skipped; they never fail the file.
///
/// # Errors
///
/// - [`ScanError::Io`] if the file cannot be read or is not valid UTF-8.
/// - [`ScanError::MalformedBlock`] if the extractor/scanner invariant was
///   broken for some block in this file.
pub fn scan_file(path: &Path, cfg: &ScanConfig) -> Result<Vec<ConflictReport>, ScanError> {
    let buffer = fs::read_to_string(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let scan = scan_buffer(&buffer, cfg).map_err(|e| ScanError::MalformedBlock {
        path: path.to_path_buf(),
        offset: e.offset,
    })?;

    for &offset in &scan.unbalanced {
        let err = ScanError::UnbalancedDelimiters {
            path: path.to_path_buf(),
            offset,
        };
        warn!(error = %err, "skipping occurrence");
    }
    debug!(
        path = %path.display(),
        conflicts = scan.conflicts.len(),
        "scanned file"
    );

    Ok(scan
        .conflicts
        .iter()
        .map(|c| ConflictReport::new(path, c.name_start, c.block))
        .collect())
}

// ---------------------------------------------------------------------------
// Whole-tree scan
// ---------------------------------------------------------------------------

/// Outcome of a whole-tree scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// All confirmed conflicts, in walk order.
    pub reports: Vec<ConflictReport>,
    /// Files read and scanned to completion.
    pub files_scanned: usize,
    /// Files skipped (unreadable) or aborted (contract violation).
    pub files_skipped: usize,
}

/// Walk the tree under `cfg.root` and scan every matching file.
///
/// Files are independent, so they are scanned in parallel with rayon;
/// results are gathered per file and folded in walk order, so the output
/// never differs from a sequential scan of the same walk. Per-file errors
/// are logged and recovered here.
///
/// # Errors
///
/// Returns [`ScanError::RootNotFound`] if the root is missing or
/// unreadable. All other errors are recovered per file.
pub fn scan_tree(cfg: &ScanConfig) -> Result<ScanSummary, ScanError> {
    let files = walk::source_files(&cfg.root, &cfg.extension)?;

    let results: Vec<Result<Vec<ConflictReport>, ScanError>> =
        files.par_iter().map(|path| scan_file(path, cfg)).collect();

    let mut summary = ScanSummary::default();
    for result in results {
        match result {
            Ok(reports) => {
                summary.files_scanned += 1;
                summary.reports.extend(reports);
            }
            Err(err @ ScanError::MalformedBlock { .. }) => {
                // Extractor/scanner invariant broke — loud, but the run
                // continues with the remaining files.
                error!(error = %err, "aborting scan of file");
                summary.files_skipped += 1;
            }
            Err(err) => {
                warn!(error = %err, "skipping file");
                summary.files_skipped += 1;
            }
        }
    }
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
