//! The conflict rule.
//!
//! A `Container` that sets `color:` directly and also passes a
//! `decoration:` is redundant at best and contradictory at worst — the
//! decoration can carry its own color. The rule is the trivial last stage
//! of the pipeline: a pure predicate over the collected top-level
//! property names.

use super::properties::PropertySet;

/// True iff the set contains both the direct and the compound property.
#[must_use]
pub fn is_conflict(props: &PropertySet<'_>, direct: &str, compound: &str) -> bool {
    props.contains(direct) && props.contains(compound)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::all, clippy::pedantic, clippy::nursery, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn both_present_is_a_conflict() {
        let props = PropertySet::from_iter(["decoration", "color"]);
        assert!(is_conflict(&props, "color", "decoration"));
    }

    #[test]
    fn either_alone_is_not() {
        let just_color = PropertySet::from_iter(["color", "width"]);
        assert!(!is_conflict(&just_color, "color", "decoration"));

        let just_decoration = PropertySet::from_iter(["decoration", "child"]);
        assert!(!is_conflict(&just_decoration, "color", "decoration"));

        assert!(!is_conflict(&PropertySet::new(), "color", "decoration"));
    }

    #[test]
    fn pair_is_configurable() {
        let props = PropertySet::from_iter(["foregroundColor", "style"]);
        assert!(is_conflict(&props, "foregroundColor", "style"));
        assert!(!is_conflict(&props, "color", "decoration"));
    }
}
