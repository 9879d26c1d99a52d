//! Scan configuration.
//!
//! The original conflict finder hardcoded the scan root, the constructor
//! name, and the two conflicting property names at module level. Here they
//! are an explicit [`ScanConfig`] passed into the scan pipeline at call
//! time. There is deliberately no config file and no environment-variable
//! surface — everything arrives through CLI flags.

use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ScanConfig
// ---------------------------------------------------------------------------

/// Configuration for one scan run.
///
/// The defaults reproduce the tool's original behavior: scan `lib/` (the
/// Flutter source convention) for `Container` invocations that set both
/// `color:` and `decoration:` at the top level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Root directory of the scan.
    pub root: PathBuf,
    /// Constructor identifier to locate (whole-token match).
    pub target_name: String,
    /// The direct styling property (e.g. `color`).
    pub direct_property: String,
    /// The compound styling property that can itself carry the direct one
    /// (e.g. `decoration`).
    pub compound_property: String,
    /// Source file extension, without the leading dot.
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("lib"),
            target_name: "Container".to_string(),
            direct_property: "color".to_string(),
            compound_property: "decoration".to_string(),
            extension: "dart".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::all, clippy::pedantic, clippy::nursery)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_tool() {
        let cfg = ScanConfig::default();
        assert_eq!(cfg.root, PathBuf::from("lib"));
        assert_eq!(cfg.target_name, "Container");
        assert_eq!(cfg.direct_property, "color");
        assert_eq!(cfg.compound_property, "decoration");
        assert_eq!(cfg.extension, "dart");
    }
}
