//! Invocation locator.
//!
//! Finds every site where the target constructor name is followed by an
//! opening parenthesis. Matching is whole-token: `Container` never matches
//! inside `MyContainer` or `Containers`. The locator is a lazy iterator —
//! it allocates nothing, never fails, and an empty buffer or absent name
//! simply yields an empty sequence.

use super::is_ident_byte;

// ---------------------------------------------------------------------------
// InvocationSite
// ---------------------------------------------------------------------------

/// One located invocation: the constructor name and its opening delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvocationSite {
    /// Byte offset of the first character of the constructor name.
    pub name_start: usize,
    /// Byte offset of the argument list's opening `(`.
    pub open: usize,
}

// ---------------------------------------------------------------------------
// Invocations
// ---------------------------------------------------------------------------

/// Lazy iterator over invocation sites of `name` within `buffer`.
///
/// Restartable: construct a fresh iterator to scan again; two passes over
/// the same buffer yield the same sites.
#[derive(Clone, Debug)]
pub struct Invocations<'a> {
    buffer: &'a str,
    name: &'a str,
    cursor: usize,
}

impl<'a> Invocations<'a> {
    /// Start a scan of `buffer` for invocations of `name`.
    #[must_use]
    pub const fn new(buffer: &'a str, name: &'a str) -> Self {
        Self {
            buffer,
            name,
            cursor: 0,
        }
    }
}

impl Iterator for Invocations<'_> {
    type Item = InvocationSite;

    fn next(&mut self) -> Option<Self::Item> {
        if self.name.is_empty() {
            return None;
        }
        let bytes = self.buffer.as_bytes();
        while self.cursor < self.buffer.len() {
            let rel = self.buffer[self.cursor..].find(self.name)?;
            let start = self.cursor + rel;
            // Advance by the name's first char, not one byte: `start + 1`
            // would land inside a multi-byte character and panic on the
            // next slice.
            self.cursor = start + self.name.chars().next().map_or(1, char::len_utf8);

            // Whole-token check on both sides of the name.
            if start > 0 && is_ident_byte(bytes[start - 1]) {
                continue;
            }
            let after = start + self.name.len();
            if after < bytes.len() && is_ident_byte(bytes[after]) {
                continue;
            }

            // Optional whitespace, then the opening delimiter.
            let mut open = after;
            while open < bytes.len() && bytes[open].is_ascii_whitespace() {
                open += 1;
            }
            if open < bytes.len() && bytes[open] == b'(' {
                return Some(InvocationSite {
                    name_start: start,
                    open,
                });
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
