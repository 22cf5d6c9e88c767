//! The pattern grammar.
//!
//! A `Pattern` is an immutable tree describing value shapes plus capture,
//! guard, negation, and combination semantics. The grammar is pure data:
//! matching behavior lives in `sift_eval`, complement computation in
//! `exclusion`, well-formedness in `validate`.

use std::fmt;
use std::sync::Arc;

use sift_value::{Name, Value, ValueKind};

/// Host predicate tested by `Pattern::Predicate`.
///
/// Treated as pure: the matcher calls it exactly once per evaluation
/// attempt at its node, never memoizing or eliding the call.
pub type PredicateFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A declarative description of the values a clause accepts.
///
/// Closed set, extensible only by adding a variant.
#[derive(Clone)]
pub enum Pattern {
    /// Matches any value, binds nothing.
    Wildcard,
    /// Matches values deep-equal to the payload.
    Literal(Value),
    /// Matches values of one runtime kind.
    Kind(ValueKind),
    /// Matches values the predicate accepts.
    Predicate(PredicateFn),
    /// Matches values the sub-pattern rejects; binds nothing.
    Not(Box<Pattern>),
    /// Matches if any alternative matches; first winner's selections only.
    Union(Vec<Pattern>),
    /// Matches if every part matches; selections merged.
    Intersection(Vec<Pattern>),
    /// Matches if the sub-pattern matches, additionally binding the
    /// matched value under `name`.
    Select { name: Name, inner: Box<Pattern> },
    /// Matches list-like values positionally, with an optional
    /// variable-length middle segment.
    Sequence(SequencePattern),
    /// Matches list-like values whose every element matches the
    /// sub-pattern; binds nothing.
    Each(Box<Pattern>),
    /// Matches record-like values field-wise; fields absent from the
    /// pattern are ignored (open matching).
    Structural(Vec<(Name, Pattern)>),
}

/// Positional layout of a sequence pattern.
///
/// Without a rest slot the match is exact-length and `suffix` must be
/// empty (enforced by `Pattern::validate`). With a rest slot, `prefix`
/// anchors the front, `suffix` anchors the back, and the contiguous middle
/// is bound as a fresh list matched against `rest`.
#[derive(Clone)]
pub struct SequencePattern {
    pub prefix: Vec<Pattern>,
    pub rest: Option<Box<Pattern>>,
    pub suffix: Vec<Pattern>,
}

// Constructors

impl Pattern {
    /// The pattern that matches everything.
    pub fn wildcard() -> Self {
        Pattern::Wildcard
    }

    /// Match values deep-equal to `value`.
    pub fn literal(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    /// Match values of the given runtime kind.
    pub fn of_kind(kind: ValueKind) -> Self {
        Pattern::Kind(kind)
    }

    /// Match values accepted by a predicate.
    pub fn predicate(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Pattern::Predicate(Arc::new(f))
    }

    /// Match values the sub-pattern rejects.
    pub fn not(inner: Pattern) -> Self {
        Pattern::Not(Box::new(inner))
    }

    /// Match if any alternative matches, trying them in order.
    pub fn union(alternatives: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Union(alternatives.into_iter().collect())
    }

    /// Match if every part matches.
    pub fn intersection(parts: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Intersection(parts.into_iter().collect())
    }

    /// Bind the matched value under `name` when `inner` matches.
    pub fn select(name: impl Into<Name>, inner: Pattern) -> Self {
        Pattern::Select {
            name: name.into(),
            inner: Box::new(inner),
        }
    }

    /// Capture any value under `name`: `select(name, wildcard())`.
    pub fn capture(name: impl Into<Name>) -> Self {
        Pattern::select(name, Pattern::Wildcard)
    }

    /// Match a list-like value of exactly these elements, in order.
    pub fn sequence(elements: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Sequence(SequencePattern {
            prefix: elements.into_iter().collect(),
            rest: None,
            suffix: Vec::new(),
        })
    }

    /// Match a list-like value with fixed front and back anchors around a
    /// variable-length middle, which is bound as a list against `rest`.
    pub fn sequence_with_rest(
        prefix: impl IntoIterator<Item = Pattern>,
        rest: Pattern,
        suffix: impl IntoIterator<Item = Pattern>,
    ) -> Self {
        Pattern::Sequence(SequencePattern {
            prefix: prefix.into_iter().collect(),
            rest: Some(Box::new(rest)),
            suffix: suffix.into_iter().collect(),
        })
    }

    /// Match a list-like value whose every element matches `element`.
    pub fn each(element: Pattern) -> Self {
        Pattern::Each(Box::new(element))
    }

    /// Match a record-like value field-wise (open matching).
    pub fn structural<N: Into<Name>>(fields: impl IntoIterator<Item = (N, Pattern)>) -> Self {
        Pattern::Structural(
            fields
                .into_iter()
                .map(|(name, pattern)| (name.into(), pattern))
                .collect(),
        )
    }
}

// Display

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Wildcard => write!(f, "_"),
            Pattern::Literal(value) => write!(f, "{value}"),
            Pattern::Kind(kind) => write!(f, "<{kind}>"),
            Pattern::Predicate(_) => write!(f, "<predicate>"),
            Pattern::Not(inner) => write!(f, "!{inner}"),
            Pattern::Union(alternatives) => {
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{alternative}")?;
                }
                Ok(())
            }
            Pattern::Intersection(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, " & ")?;
                    }
                    write!(f, "{part}")?;
                }
                Ok(())
            }
            Pattern::Select { name, inner } => write!(f, "{name} @ {inner}"),
            Pattern::Sequence(sequence) => write!(f, "{sequence}"),
            Pattern::Each(element) => write!(f, "each({element})"),
            Pattern::Structural(fields) => {
                write!(f, "{{")?;
                for (i, (name, pattern)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {pattern}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Display for SequencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut first = true;
        for pattern in &self.prefix {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{pattern}")?;
        }
        if let Some(rest) = &self.rest {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "..{rest}")?;
        }
        for pattern in &self.suffix {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{pattern}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Wildcard => write!(f, "Wildcard"),
            Pattern::Literal(value) => write!(f, "Literal({value:?})"),
            Pattern::Kind(kind) => write!(f, "Kind({kind:?})"),
            Pattern::Predicate(_) => write!(f, "Predicate(..)"),
            Pattern::Not(inner) => write!(f, "Not({inner:?})"),
            Pattern::Union(alternatives) => f.debug_tuple("Union").field(alternatives).finish(),
            Pattern::Intersection(parts) => f.debug_tuple("Intersection").field(parts).finish(),
            Pattern::Select { name, inner } => f
                .debug_struct("Select")
                .field("name", name)
                .field("inner", inner)
                .finish(),
            Pattern::Sequence(sequence) => f
                .debug_struct("Sequence")
                .field("prefix", &sequence.prefix)
                .field("rest", &sequence.rest)
                .field("suffix", &sequence.suffix)
                .finish(),
            Pattern::Each(element) => f.debug_tuple("Each").field(element).finish(),
            Pattern::Structural(fields) => f.debug_tuple("Structural").field(fields).finish(),
        }
    }
}

impl fmt::Debug for SequencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequencePattern")
            .field("prefix", &self.prefix)
            .field("rest", &self.rest)
            .field("suffix", &self.suffix)
            .finish()
    }
}
