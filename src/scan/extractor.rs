//! Balanced block extraction.
//!
//! Turns a located opening delimiter into the full argument-list block by
//! scanning forward with a depth counter. The opening delimiter already
//! consumed by the locator is the baseline: the first `)` encountered at
//! baseline depth is the block's end. Stopping at a nested close, or
//! overshooting into a later invocation's close, are both correctness bugs
//! this loop exists to avoid.
//!
//! Only round delimiters participate in extraction — the block belongs to
//! a constructor invocation and its boundaries are parentheses. Curly and
//! square delimiters matter to the property scanner, not here.

// ---------------------------------------------------------------------------
// InvocationMatch
// ---------------------------------------------------------------------------

/// A successfully extracted invocation block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvocationMatch<'a> {
    /// Byte offset of the opening `(`.
    pub open: usize,
    /// Byte offset of the matching closing `)`.
    pub close: usize,
    inner: &'a str,
}

impl<'a> InvocationMatch<'a> {
    /// The text strictly between the opening and closing delimiters.
    #[must_use]
    pub const fn inner(&self) -> &'a str {
        self.inner
    }
}

// ---------------------------------------------------------------------------
// Unbalanced
// ---------------------------------------------------------------------------

/// The argument list never closed before end of input.
///
/// Recoverable: the occurrence is skipped and the scan moves on to the
/// next located site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unbalanced {
    /// Byte offset of the opening delimiter that never closes.
    pub offset: usize,
}

// ---------------------------------------------------------------------------
// extract
// ---------------------------------------------------------------------------

/// Scan forward from `open` (which must point at a `(`) to the first close
/// that returns depth to the baseline.
///
/// # Errors
///
/// Returns [`Unbalanced`] if the buffer ends before the block closes.
pub fn extract(buffer: &str, open: usize) -> Result<InvocationMatch<'_>, Unbalanced> {
    let bytes = buffer.as_bytes();
    debug_assert_eq!(
        bytes.get(open),
        Some(&b'('),
        "extract must be handed an opening delimiter"
    );

    let mut depth = 0usize;
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                if depth == 0 {
                    return Ok(InvocationMatch {
                        open,
                        close: i,
                        inner: &buffer[open + 1..i],
                    });
                }
                depth -= 1;
            }
            _ => {}
        }
        i += 1;
    }
    Err(Unbalanced { offset: open })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::all, clippy::pedantic, clippy::nursery, clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn extract_at_first_open(buffer: &str) -> Result<InvocationMatch<'_>, Unbalanced> {
        extract(buffer, buffer.find('(').unwrap())
    }

    // -----------------------------------------------------------------------
    // Depth balance
    // -----------------------------------------------------------------------

    #[test]
    fn flat_block() {
        let m = extract_at_first_open("Container(color: red)").unwrap();
        assert_eq!(m.inner(), "color: red");
        assert_eq!(m.close, 20);
    }

    #[test]
    fn nested_invocation_close_is_not_the_end() {
        let buffer = "Container(decoration: BoxDecoration(color: red), color: blue)";
        let m = extract_at_first_open(buffer).unwrap();
        assert_eq!(
            m.inner(),
            "decoration: BoxDecoration(color: red), color: blue",
            "the block must extend past the nested close"
        );
        assert_eq!(m.close, buffer.len() - 1);
    }

    #[test]
    fn does_not_overshoot_into_a_later_invocation() {
        let buffer = "Container(a: b) Container(c: d)";
        let m = extract_at_first_open(buffer).unwrap();
        assert_eq!(m.inner(), "a: b", "must stop at the first baseline close");
    }

    #[test]
    fn empty_argument_list() {
        let m = extract_at_first_open("Container()").unwrap();
        assert_eq!(m.inner(), "");
        assert_eq!(m.close, m.open + 1);
    }

    #[test]
    fn deeply_nested_same_name() {
        // M nested invocations of the same name: the end is the outer close.
        let buffer = "Container(child: Container(child: Container(color: red)))";
        let m = extract_at_first_open(buffer).unwrap();
        assert_eq!(m.close, buffer.len() - 1);
    }

    // -----------------------------------------------------------------------
    // Unbalanced input
    // -----------------------------------------------------------------------

    #[test]
    fn truncated_block_is_unbalanced() {
        let buffer = "Container(color: red";
        let err = extract_at_first_open(buffer).unwrap_err();
        assert_eq!(err.offset, 9, "error names the open delimiter's offset");
    }

    #[test]
    fn truncated_nested_block_is_unbalanced() {
        let buffer = "Container(decoration: BoxDecoration(color: red)";
        assert!(extract_at_first_open(buffer).is_err());
    }

    // -----------------------------------------------------------------------
    // Property: depth-balance law over generated nested argument lists
    // -----------------------------------------------------------------------

    fn value_strategy() -> impl Strategy<Value = String> {
        let leaf = prop::string::string_regex("[a-z]{1,6}").unwrap();
        leaf.prop_recursive(3, 24, 3, |inner| {
            (
                prop::string::string_regex("[A-Z][a-z]{1,6}").unwrap(),
                prop::collection::vec(
                    (prop::string::string_regex("[a-z]{1,6}").unwrap(), inner),
                    0..3,
                ),
            )
                .prop_map(|(name, args)| {
                    let items: Vec<String> =
                        args.into_iter().map(|(k, v)| format!("{k}: {v}")).collect();
                    format!("{name}({})", items.join(", "))
                })
        })
    }

    proptest! {
        #[test]
        fn block_end_is_always_the_outer_close(
            args in prop::collection::vec(
                (prop::string::string_regex("[a-z]{1,6}").unwrap(), value_strategy()),
                0..4,
            )
        ) {
            let items: Vec<String> =
                args.into_iter().map(|(k, v)| format!("{k}: {v}")).collect();
            let body = items.join(", ");
            // A trailing invocation guards against overshoot.
            let buffer = format!("Container({body}) Container(color: red)");
            let m = extract(&buffer, 9).unwrap();
            prop_assert_eq!(m.inner(), body.as_str());
            prop_assert_eq!(m.close, 9 + 1 + body.len());
        }
    }
}
