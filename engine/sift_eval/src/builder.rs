//! Fluent match expressions over one input value.
//!
//! [`MatchExpr`] accumulates clauses append-only; every registration
//! consumes and returns the builder, and terminal operations consume it
//! outright, so nothing can be registered after finalization. The first
//! malformed pattern poisons the builder and is reported by whichever
//! terminal runs.

use sift_pattern::{audit, Coverage, Pattern, PatternError, Shape};
use sift_value::Value;

use crate::clause::{Clause, ClauseList};
use crate::errors::{coverage_gap, MatchError};
use crate::selections::Selections;

/// Start a match expression over `value`.
pub fn match_value<O>(value: impl Into<Value>) -> MatchExpr<O> {
    MatchExpr {
        value: value.into(),
        clauses: ClauseList::new(),
        malformed: None,
    }
}

/// Accumulator for a pattern-matching expression.
pub struct MatchExpr<O> {
    value: Value,
    clauses: ClauseList<O>,
    malformed: Option<PatternError>,
}

impl<O> MatchExpr<O> {
    /// Register a pattern with a handler.
    pub fn with(
        self,
        pattern: Pattern,
        handler: impl Fn(Selections, &Value) -> O + Send + Sync + 'static,
    ) -> Self {
        self.push(Clause::new(pattern, handler))
    }

    /// Register a pattern with a guard and a handler.
    pub fn with_guard(
        self,
        pattern: Pattern,
        guard: impl Fn(&Value) -> bool + Send + Sync + 'static,
        handler: impl Fn(Selections, &Value) -> O + Send + Sync + 'static,
    ) -> Self {
        self.push(Clause::with_guard(pattern, guard, handler))
    }

    /// Register several alternative patterns for one handler.
    pub fn with_any(
        self,
        patterns: impl IntoIterator<Item = Pattern>,
        handler: impl Fn(Selections, &Value) -> O + Send + Sync + 'static,
    ) -> Self {
        self.push(Clause::new(Pattern::union(patterns), handler))
    }

    /// Register a predicate-only clause.
    pub fn when(
        self,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
        handler: impl Fn(Selections, &Value) -> O + Send + Sync + 'static,
    ) -> Self {
        self.push(Clause::new(Pattern::predicate(predicate), handler))
    }

    fn push(mut self, clause: Result<Clause<O>, PatternError>) -> Self {
        match clause {
            Ok(clause) => self.clauses.push(clause),
            Err(error) => {
                if self.malformed.is_none() {
                    self.malformed = Some(error);
                }
            }
        }
        self
    }

    fn take_poison(&mut self) -> Result<(), MatchError> {
        match self.malformed.take() {
            Some(error) => Err(MatchError::MalformedPattern(error)),
            None => Ok(()),
        }
    }

    /// Evaluate the clauses; no winner is the fatal `Unhandled` error.
    pub fn run(mut self) -> Result<O, MatchError> {
        self.take_poison()?;
        self.clauses.evaluate(&self.value)
    }

    /// Evaluate the clauses, falling back to `default` when no clause
    /// fires; never `Unhandled`.
    pub fn otherwise(mut self, default: impl FnOnce(&Value) -> O) -> Result<O, MatchError> {
        self.take_poison()?;
        Ok(self.clauses.evaluate_or(&self.value, default))
    }

    /// Audit coverage against a declared shape, then evaluate.
    ///
    /// A flagged clause list fails with `CoverageGap` before the value is
    /// even matched.
    pub fn checked_run(mut self, shape: &Shape) -> Result<O, MatchError> {
        self.take_poison()?;
        if let Coverage::Gap { witness } = audit(shape, self.clauses.unguarded_patterns()) {
            return Err(coverage_gap(self.clauses.len(), witness));
        }
        self.clauses.evaluate(&self.value)
    }
}
