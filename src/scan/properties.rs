//! Top-level property scanner.
//!
//! Reduces the inner text of an extracted block to the set of property
//! names appearing at nesting depth zero — the direct arguments of the
//! invocation, as opposed to arguments of nested invocations passed as
//! values. All three delimiter kinds share one depth counter here:
//! a property nested inside `BoxDecoration(...)`, a `{...}` closure, or a
//! `[...]` list is equally not a direct argument.
//!
//! Known approximation, inherited from the tool's original design:
//! delimiters inside string literals or comments still count toward
//! depth. That can corrupt tracking and is an accepted source of false
//! negatives and positives.

use std::collections::HashSet;

use super::{is_ident_byte, is_ident_start};

/// Set of property names found at depth zero within one block.
pub type PropertySet<'a> = HashSet<&'a str>;

// ---------------------------------------------------------------------------
// NegativeDepth
// ---------------------------------------------------------------------------

/// Depth went negative: the scanner hit a close with no matching open.
///
/// The inner text of a correctly extracted block can never do this with
/// round delimiters, so a negative excursion means the block handed over
/// was not properly bounded. The scanner fails fast rather than silently
/// continuing with corrupted depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NegativeDepth {
    /// Byte offset of the stray close, relative to the inner text.
    pub offset: usize,
}

// ---------------------------------------------------------------------------
// top_level_properties
// ---------------------------------------------------------------------------

/// Collect the property names at depth zero of `inner`.
///
/// A property name is a bare identifier followed by optional whitespace
/// and a `:`. Whitespace and newlines are insignificant to depth tracking.
///
/// # Errors
///
/// Returns [`NegativeDepth`] if a close appears with no matching open.
pub fn top_level_properties(inner: &str) -> Result<PropertySet<'_>, NegativeDepth> {
    let bytes = inner.as_bytes();
    let mut props = PropertySet::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'(' | b'{' | b'[' => {
                depth += 1;
                i += 1;
            }
            b')' | b'}' | b']' => {
                if depth == 0 {
                    return Err(NegativeDepth { offset: i });
                }
                depth -= 1;
                i += 1;
            }
            b if depth == 0 && is_ident_start(b) => {
                let start = i;
                while i < bytes.len() && is_ident_byte(bytes[i]) {
                    i += 1;
                }
                let mut j = i;
                while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                    j += 1;
                }
                if j < bytes.len() && bytes[j] == b':' {
                    props.insert(&inner[start..i]);
                    i = j + 1;
                }
            }
            _ => i += 1,
        }
    }
    Ok(props)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
