//! Eager well-formedness checks for pattern trees.
//!
//! Runs at clause registration time so malformed patterns surface before
//! any value is matched. Sibling captures of the same name (under an
//! intersection, sequence, or structural pattern) are legal — the matcher
//! resolves them with an equality-checked merge. Only reuse of a name
//! strictly along one path is rejected, since one match could never bind
//! both occurrences distinctly.

use rustc_hash::FxHashSet;

use sift_value::Name;

use crate::errors::{
    capture_inside_each, duplicate_capture, duplicate_field, empty_combinator, suffix_without_rest,
    PatternError,
};
use crate::grammar::Pattern;

impl Pattern {
    /// Check structural well-formedness of this pattern tree.
    ///
    /// Detects duplicate captures along one path, duplicate structural
    /// fields, suffix anchors without a rest slot, empty combinators, and
    /// captures inside `each`.
    pub fn validate(&self) -> Result<(), PatternError> {
        let mut path = FxHashSet::default();
        self.check(&mut path)
    }

    /// First capture name bound anywhere in this subtree, if any.
    fn first_capture(&self) -> Option<&Name> {
        match self {
            Pattern::Wildcard
            | Pattern::Literal(_)
            | Pattern::Kind(_)
            | Pattern::Predicate(_) => None,
            Pattern::Not(inner) | Pattern::Each(inner) => inner.first_capture(),
            Pattern::Union(subs) | Pattern::Intersection(subs) => {
                subs.iter().find_map(Pattern::first_capture)
            }
            Pattern::Select { name, .. } => Some(name),
            Pattern::Sequence(sequence) => sequence
                .prefix
                .iter()
                .chain(sequence.rest.as_deref())
                .chain(sequence.suffix.iter())
                .find_map(Pattern::first_capture),
            Pattern::Structural(fields) => {
                fields.iter().find_map(|(_, pattern)| pattern.first_capture())
            }
        }
    }

    /// Recursive walk with the set of capture names bound on the path
    /// above this node. Names are inserted on descent and removed on the
    /// way back up, so siblings see the same enclosing scope.
    fn check(&self, path: &mut FxHashSet<Name>) -> Result<(), PatternError> {
        match self {
            Pattern::Wildcard
            | Pattern::Literal(_)
            | Pattern::Kind(_)
            | Pattern::Predicate(_) => Ok(()),

            Pattern::Not(inner) => inner.check(path),

            Pattern::Union(subs) => {
                if subs.is_empty() {
                    return Err(empty_combinator("union"));
                }
                for sub in subs {
                    sub.check(path)?;
                }
                Ok(())
            }

            Pattern::Intersection(subs) => {
                if subs.is_empty() {
                    return Err(empty_combinator("intersection"));
                }
                for sub in subs {
                    sub.check(path)?;
                }
                Ok(())
            }

            Pattern::Select { name, inner } => {
                if !path.insert(name.clone()) {
                    return Err(duplicate_capture(name.clone()));
                }
                let result = inner.check(path);
                path.remove(name);
                result
            }

            Pattern::Sequence(sequence) => {
                if sequence.rest.is_none() && !sequence.suffix.is_empty() {
                    return Err(suffix_without_rest());
                }
                for sub in &sequence.prefix {
                    sub.check(path)?;
                }
                if let Some(rest) = &sequence.rest {
                    rest.check(path)?;
                }
                for sub in &sequence.suffix {
                    sub.check(path)?;
                }
                Ok(())
            }

            Pattern::Each(element) => {
                if let Some(name) = element.first_capture() {
                    return Err(capture_inside_each(name.clone()));
                }
                element.check(path)
            }

            Pattern::Structural(fields) => {
                let mut seen = FxHashSet::default();
                for (name, sub) in fields {
                    if !seen.insert(name.clone()) {
                        return Err(duplicate_field(name.clone()));
                    }
                    sub.check(path)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::PatternError;

    use super::*;

    #[test]
    fn flat_patterns_are_well_formed() {
        assert_eq!(Pattern::wildcard().validate(), Ok(()));
        assert_eq!(Pattern::literal(1).validate(), Ok(()));
        assert_eq!(Pattern::capture("x").validate(), Ok(()));
    }

    #[test]
    fn nested_duplicate_capture_is_rejected() {
        let p = Pattern::select("x", Pattern::sequence([Pattern::capture("x")]));
        assert_eq!(
            p.validate(),
            Err(PatternError::DuplicateCapture { name: "x".into() })
        );
    }

    #[test]
    fn sibling_captures_may_share_a_name() {
        // Resolved at match time by the equality-checked merge.
        let p = Pattern::intersection([Pattern::capture("x"), Pattern::capture("x")]);
        assert_eq!(p.validate(), Ok(()));

        let p = Pattern::sequence([Pattern::capture("x"), Pattern::capture("x")]);
        assert_eq!(p.validate(), Ok(()));
    }

    #[test]
    fn union_alternatives_may_share_a_name() {
        let p = Pattern::union([
            Pattern::select("v", Pattern::of_kind(crate::ValueKind::Int)),
            Pattern::select("v", Pattern::of_kind(crate::ValueKind::Str)),
        ]);
        assert_eq!(p.validate(), Ok(()));
    }

    #[test]
    fn duplicate_structural_field_is_rejected() {
        let p = Pattern::structural([("a", Pattern::literal(1)), ("a", Pattern::literal(2))]);
        assert_eq!(
            p.validate(),
            Err(PatternError::DuplicateField { name: "a".into() })
        );
    }

    #[test]
    fn suffix_without_rest_is_rejected() {
        let p = Pattern::Sequence(crate::SequencePattern {
            prefix: vec![Pattern::literal(1)],
            rest: None,
            suffix: vec![Pattern::literal(2)],
        });
        assert_eq!(p.validate(), Err(PatternError::SuffixWithoutRest));
    }

    #[test]
    fn empty_combinators_are_rejected() {
        assert_eq!(
            Pattern::union([]).validate(),
            Err(PatternError::EmptyCombinator { combinator: "union" })
        );
        assert_eq!(
            Pattern::intersection([]).validate(),
            Err(PatternError::EmptyCombinator {
                combinator: "intersection"
            })
        );
    }

    #[test]
    fn capture_inside_each_is_rejected() {
        let p = Pattern::each(Pattern::capture("item"));
        assert_eq!(
            p.validate(),
            Err(PatternError::CaptureInsideEach {
                name: "item".into()
            })
        );
    }

    #[test]
    fn capture_wrapping_each_is_fine() {
        let p = Pattern::select("all", Pattern::each(Pattern::of_kind(crate::ValueKind::Int)));
        assert_eq!(p.validate(), Ok(()));
    }

    #[test]
    fn deep_nesting_validates() {
        let p = Pattern::structural([(
            "items",
            Pattern::sequence_with_rest(
                [Pattern::capture("head")],
                Pattern::capture("tail"),
                [],
            ),
        )]);
        assert_eq!(p.validate(), Ok(()));
    }
}
