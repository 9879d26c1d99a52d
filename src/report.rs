//! Conflict reports.
//!
//! A [`ConflictReport`] is created once per confirmed conflict and handed
//! straight to the printer — nothing is persisted. The `Display` form is
//! the tool's classic text output: a `CONFLICT in <path>` line, the raw
//! matched block, and a dashed separator.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Separator printed after each conflict block in text output.
pub const SEPARATOR: &str = "--------------------";

// ---------------------------------------------------------------------------
// ConflictReport
// ---------------------------------------------------------------------------

/// One confirmed conflict: an invocation setting both configured
/// properties at the top level of its argument list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    /// File the invocation was found in.
    pub path: PathBuf,
    /// Byte offset of the constructor name within the file.
    pub offset: usize,
    /// Raw text of the full invocation, constructor name included.
    pub block: String,
}

impl ConflictReport {
    /// Create a report for a conflict found at `offset` in `path`.
    #[must_use]
    pub fn new(path: &Path, offset: usize, block: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            offset,
            block: block.to_string(),
        }
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CONFLICT in {}\n{}\n{SEPARATOR}",
            self.path.display(),
            self.block
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::all, clippy::pedantic, clippy::nursery, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_classic_output() {
        let report = ConflictReport::new(
            Path::new("lib/widgets/card.dart"),
            120,
            "Container(color: a, decoration: b)",
        );
        let text = report.to_string();
        assert_eq!(
            text,
            "CONFLICT in lib/widgets/card.dart\nContainer(color: a, decoration: b)\n--------------------"
        );
    }

    #[test]
    fn serializes_path_offset_and_block() {
        let report = ConflictReport::new(Path::new("a.dart"), 0, "Container()");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["path"], "a.dart");
        assert_eq!(json["offset"], 0);
        assert_eq!(json["block"], "Container()");
    }
}
