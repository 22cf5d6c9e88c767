//! Programmer-error type for malformed patterns.
//!
//! Malformation is detected eagerly, at clause registration time, never at
//! match time. No-match and selection-conflict conditions are not errors
//! and never appear here; they are internal control values of the matcher.

use std::fmt;

use sift_value::Name;

/// A structurally invalid pattern tree.
///
/// Each variant carries the offending name or position so callers can
/// build an actionable diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// A capture name is reused strictly inside its own subtree, so one
    /// match could never bind both occurrences distinctly.
    DuplicateCapture { name: Name },
    /// A structural pattern lists the same field twice.
    DuplicateField { name: Name },
    /// A sequence pattern has suffix anchors but no rest slot; without a
    /// rest the match is exact-length and a suffix is inexpressible.
    SuffixWithoutRest,
    /// A union or intersection with no sub-patterns.
    EmptyCombinator { combinator: &'static str },
    /// A capture inside `each` would bind once per element; captures must
    /// wrap the list, not its elements.
    CaptureInsideEach { name: Name },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCapture { name } => {
                write!(f, "capture name `{name}` is bound twice along one path")
            }
            Self::DuplicateField { name } => {
                write!(f, "structural pattern lists field `{name}` twice")
            }
            Self::SuffixWithoutRest => {
                write!(f, "sequence pattern has a suffix but no rest slot")
            }
            Self::EmptyCombinator { combinator } => {
                write!(f, "{combinator} pattern has no sub-patterns")
            }
            Self::CaptureInsideEach { name } => {
                write!(f, "capture `{name}` inside an each pattern")
            }
        }
    }
}

impl std::error::Error for PatternError {}

#[cold]
pub(crate) fn duplicate_capture(name: Name) -> PatternError {
    PatternError::DuplicateCapture { name }
}

#[cold]
pub(crate) fn duplicate_field(name: Name) -> PatternError {
    PatternError::DuplicateField { name }
}

#[cold]
pub(crate) fn suffix_without_rest() -> PatternError {
    PatternError::SuffixWithoutRest
}

#[cold]
pub(crate) fn empty_combinator(combinator: &'static str) -> PatternError {
    PatternError::EmptyCombinator { combinator }
}

#[cold]
pub(crate) fn capture_inside_each(name: Name) -> PatternError {
    PatternError::CaptureInsideEach { name }
}
