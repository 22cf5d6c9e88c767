//! Error types for terminal operations.
//!
//! No-match and selection-conflict conditions are internal control values
//! of the matcher and never appear here. The only conditions a caller must
//! handle are the three below, each carrying enough structured context to
//! build an actionable diagnostic.

use std::fmt;

use sift_pattern::PatternError;
use sift_value::Value;

/// Failure of a terminal operation.
#[derive(Clone, Debug)]
pub enum MatchError {
    /// No clause matched the supplied value during a `run`-style terminal.
    ///
    /// Either a genuinely unexpected input or a coverage gap that was not
    /// caught ahead of time.
    Unhandled {
        /// How many clauses were registered.
        clause_count: usize,
        /// Display summaries of the registered patterns, in order.
        registered: Vec<String>,
        /// The value no clause matched.
        value: Value,
    },
    /// A registered pattern was structurally invalid.
    ///
    /// Detected at registration time; reported by the terminal operation.
    MalformedPattern(PatternError),
    /// The coverage audit flagged the clause list as possibly
    /// non-covering, before the value was even matched.
    CoverageGap {
        /// How many clauses were registered.
        clause_count: usize,
        /// A value no clause matches, when the declared shape was finite
        /// enough to produce one.
        witness: Option<Value>,
    },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unhandled {
                clause_count,
                registered,
                value,
            } => {
                write!(
                    f,
                    "no clause matched value {value}: {clause_count} clause(s) registered"
                )?;
                if !registered.is_empty() {
                    write!(f, " ({})", registered.join("; "))?;
                }
                Ok(())
            }
            Self::MalformedPattern(error) => write!(f, "malformed pattern: {error}"),
            Self::CoverageGap {
                clause_count,
                witness,
            } => {
                write!(
                    f,
                    "clause list ({clause_count} clause(s)) may not cover its declared shape"
                )?;
                if let Some(witness) = witness {
                    write!(f, "; unmatched witness: {witness}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedPattern(error) => Some(error),
            Self::Unhandled { .. } | Self::CoverageGap { .. } => None,
        }
    }
}

impl From<PatternError> for MatchError {
    fn from(error: PatternError) -> Self {
        MatchError::MalformedPattern(error)
    }
}

#[cold]
pub(crate) fn unhandled(registered: Vec<String>, value: Value) -> MatchError {
    MatchError::Unhandled {
        clause_count: registered.len(),
        registered,
        value,
    }
}

#[cold]
pub(crate) fn coverage_gap(clause_count: usize, witness: Option<Value>) -> MatchError {
    MatchError::CoverageGap {
        clause_count,
        witness,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unhandled_message_names_patterns_and_value() {
        let error = unhandled(vec!["1".to_string(), "\"two\"".to_string()], Value::Int(3));
        assert_eq!(
            error.to_string(),
            "no clause matched value 3: 2 clause(s) registered (1; \"two\")"
        );
    }

    #[test]
    fn coverage_gap_message_includes_witness() {
        let error = coverage_gap(1, Some(Value::Bool(false)));
        assert_eq!(
            error.to_string(),
            "clause list (1 clause(s)) may not cover its declared shape; unmatched witness: false"
        );

        let error = coverage_gap(0, None);
        assert_eq!(
            error.to_string(),
            "clause list (0 clause(s)) may not cover its declared shape"
        );
    }

    #[test]
    fn malformed_wraps_the_pattern_error() {
        let inner = sift_pattern::Pattern::union([]).validate().unwrap_err();
        let error = MatchError::from(inner);
        assert_eq!(
            error.to_string(),
            "malformed pattern: union pattern has no sub-patterns"
        );
        assert!(std::error::Error::source(&error).is_some());
    }
}
