//! Recursive pattern matching against runtime values.
//!
//! The walk is top-down and short-circuits on the first failure. Failed
//! attempts return [`MatchOutcome::NoMatch`] — never an error — and any
//! selections built inside a failed branch are dropped with it, so state
//! from a losing union alternative or a negated subtree can never leak.

use sift_pattern::{Pattern, SequencePattern};
use sift_value::Value;

use crate::selections::Selections;

/// Result of testing one pattern against one value.
#[derive(Clone, Debug)]
pub enum MatchOutcome {
    /// The pattern matched; captures are inside.
    Matched(Selections),
    /// The pattern did not match.
    NoMatch,
}

impl MatchOutcome {
    /// Whether this outcome is a match.
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    /// Extract the selections of a successful match.
    pub fn into_selections(self) -> Option<Selections> {
        match self {
            MatchOutcome::Matched(selections) => Some(selections),
            MatchOutcome::NoMatch => None,
        }
    }
}

/// Merge selections from a sub-match, collapsing conflicts to a no-match.
fn merged(acc: Selections, sub: Selections) -> Option<Selections> {
    match acc.merge(sub) {
        Ok(merged) => Some(merged),
        Err(conflict) => {
            tracing::trace!(name = %conflict.name, "selection conflict, treating as no-match");
            None
        }
    }
}

/// Test `pattern` against `value`.
///
/// Deterministic and side-effect-free apart from whatever host predicates
/// do; each predicate is called exactly once per attempt at its node.
pub fn match_pattern(pattern: &Pattern, value: &Value) -> MatchOutcome {
    match pattern {
        Pattern::Wildcard => MatchOutcome::Matched(Selections::new()),

        Pattern::Literal(expected) => {
            if value.equals(expected) {
                MatchOutcome::Matched(Selections::new())
            } else {
                MatchOutcome::NoMatch
            }
        }

        Pattern::Kind(kind) => {
            if value.kind() == *kind {
                MatchOutcome::Matched(Selections::new())
            } else {
                MatchOutcome::NoMatch
            }
        }

        Pattern::Predicate(accepts) => {
            if accepts(value) {
                MatchOutcome::Matched(Selections::new())
            } else {
                MatchOutcome::NoMatch
            }
        }

        // Selections from the rejected subtree are dropped with it.
        Pattern::Not(inner) => match match_pattern(inner, value) {
            MatchOutcome::Matched(_) => MatchOutcome::NoMatch,
            MatchOutcome::NoMatch => MatchOutcome::Matched(Selections::new()),
        },

        // First winner's selections only; later alternatives not evaluated.
        Pattern::Union(alternatives) => {
            for alternative in alternatives {
                if let MatchOutcome::Matched(selections) = match_pattern(alternative, value) {
                    return MatchOutcome::Matched(selections);
                }
            }
            MatchOutcome::NoMatch
        }

        Pattern::Intersection(parts) => {
            let mut selections = Selections::new();
            for part in parts {
                let MatchOutcome::Matched(sub) = match_pattern(part, value) else {
                    return MatchOutcome::NoMatch;
                };
                let Some(combined) = merged(selections, sub) else {
                    return MatchOutcome::NoMatch;
                };
                selections = combined;
            }
            MatchOutcome::Matched(selections)
        }

        Pattern::Select { name, inner } => {
            let MatchOutcome::Matched(sub) = match_pattern(inner, value) else {
                return MatchOutcome::NoMatch;
            };
            match merged(sub, Selections::bind(name.clone(), value.clone())) {
                Some(selections) => MatchOutcome::Matched(selections),
                None => MatchOutcome::NoMatch,
            }
        }

        Pattern::Sequence(sequence) => match_sequence(sequence, value),

        Pattern::Each(element) => {
            let Some(items) = value.items() else {
                return MatchOutcome::NoMatch;
            };
            for item in items {
                if !match_pattern(element, item).is_match() {
                    return MatchOutcome::NoMatch;
                }
            }
            MatchOutcome::Matched(Selections::new())
        }

        Pattern::Structural(fields) => {
            let Some(record) = value.as_record() else {
                return MatchOutcome::NoMatch;
            };
            let mut selections = Selections::new();
            for (name, sub_pattern) in fields {
                let Some(field) = record.get(name) else {
                    return MatchOutcome::NoMatch;
                };
                let MatchOutcome::Matched(sub) = match_pattern(sub_pattern, field) else {
                    return MatchOutcome::NoMatch;
                };
                let Some(combined) = merged(selections, sub) else {
                    return MatchOutcome::NoMatch;
                };
                selections = combined;
            }
            MatchOutcome::Matched(selections)
        }
    }
}

/// Positional matching with an optional variable-length middle.
///
/// Fixed positions are matched pairwise in index order, left to right,
/// failing fast; the middle sub-list is rebuilt as a fresh list value and
/// matched against the rest pattern.
fn match_sequence(sequence: &SequencePattern, value: &Value) -> MatchOutcome {
    let Some(items) = value.items() else {
        return MatchOutcome::NoMatch;
    };

    let fixed = sequence.prefix.len() + sequence.suffix.len();
    if items.len() < fixed {
        return MatchOutcome::NoMatch;
    }
    if sequence.rest.is_none() && items.len() != sequence.prefix.len() {
        return MatchOutcome::NoMatch;
    }

    let mut selections = Selections::new();

    for (sub_pattern, item) in sequence.prefix.iter().zip(items) {
        let MatchOutcome::Matched(sub) = match_pattern(sub_pattern, item) else {
            return MatchOutcome::NoMatch;
        };
        let Some(combined) = merged(selections, sub) else {
            return MatchOutcome::NoMatch;
        };
        selections = combined;
    }

    let tail_start = items.len() - sequence.suffix.len();
    for (sub_pattern, item) in sequence.suffix.iter().zip(&items[tail_start..]) {
        let MatchOutcome::Matched(sub) = match_pattern(sub_pattern, item) else {
            return MatchOutcome::NoMatch;
        };
        let Some(combined) = merged(selections, sub) else {
            return MatchOutcome::NoMatch;
        };
        selections = combined;
    }

    if let Some(rest) = &sequence.rest {
        let middle = Value::list(items[sequence.prefix.len()..tail_start].to_vec());
        let MatchOutcome::Matched(sub) = match_pattern(rest, &middle) else {
            return MatchOutcome::NoMatch;
        };
        let Some(combined) = merged(selections, sub) else {
            return MatchOutcome::NoMatch;
        };
        selections = combined;
    }

    MatchOutcome::Matched(selections)
}
