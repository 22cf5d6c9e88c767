//! Clauses and ordered clause evaluation.
//!
//! A clause pairs a pattern with a handler and an optional guard. A
//! [`ClauseList`] holds clauses in registration order, immutably once
//! built, and evaluates them with first-match-wins semantics. Evaluation
//! takes `&self`: a finalized list can be shared across threads and run
//! against any number of values concurrently.

use sift_pattern::{Pattern, PatternError};
use sift_value::Value;

use crate::errors::{unhandled, MatchError};
use crate::matcher::{match_pattern, MatchOutcome};
use crate::selections::Selections;

/// Guard predicate, consulted with the raw input value after the pattern
/// matched.
pub type GuardFn = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// Clause handler, invoked with the match's selections and the raw value.
pub type HandlerFn<O> = Box<dyn Fn(Selections, &Value) -> O + Send + Sync>;

/// One registered (pattern, optional guard, handler) triple.
///
/// Created at registration time, never mutated afterward. Construction
/// validates the pattern, so a clause in hand is always well-formed.
pub struct Clause<O> {
    pattern: Pattern,
    guard: Option<GuardFn>,
    handler: HandlerFn<O>,
}

impl<O> Clause<O> {
    /// Register a pattern with a handler.
    pub fn new(
        pattern: Pattern,
        handler: impl Fn(Selections, &Value) -> O + Send + Sync + 'static,
    ) -> Result<Self, PatternError> {
        pattern.validate()?;
        Ok(Clause {
            pattern,
            guard: None,
            handler: Box::new(handler),
        })
    }

    /// Register a pattern with a guard and a handler.
    ///
    /// The guard runs only after the pattern matched; a false result makes
    /// the clause count as a non-match.
    pub fn with_guard(
        pattern: Pattern,
        guard: impl Fn(&Value) -> bool + Send + Sync + 'static,
        handler: impl Fn(Selections, &Value) -> O + Send + Sync + 'static,
    ) -> Result<Self, PatternError> {
        pattern.validate()?;
        Ok(Clause {
            pattern,
            guard: Some(Box::new(guard)),
            handler: Box::new(handler),
        })
    }

    /// The clause's pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Whether a guard is attached.
    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }
}

/// Ordered, immutable sequence of clauses.
pub struct ClauseList<O> {
    clauses: Vec<Clause<O>>,
}

impl<O> ClauseList<O> {
    /// Empty clause list.
    pub fn new() -> Self {
        ClauseList {
            clauses: Vec::new(),
        }
    }

    /// Append a clause; registration order is evaluation order.
    pub fn push(&mut self, clause: Clause<O>) {
        self.clauses.push(clause);
    }

    /// Number of registered clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Check if no clauses are registered.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Patterns of clauses without guards, in registration order.
    ///
    /// This is the set the coverage audit may count on: a guard can reject
    /// a matched value, so guarded clauses never contribute to coverage.
    pub fn unguarded_patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.clauses
            .iter()
            .filter(|clause| clause.guard.is_none())
            .map(Clause::pattern)
    }

    /// Display summaries of every registered pattern, in order.
    pub(crate) fn pattern_summaries(&self) -> Vec<String> {
        self.clauses
            .iter()
            .map(|clause| clause.pattern.to_string())
            .collect()
    }

    /// Evaluate the clauses against a value, strictly in registration
    /// order, invoking the first winner's handler.
    ///
    /// Returns the fatal `Unhandled` error if no clause fires.
    #[tracing::instrument(level = "debug", skip_all, fields(clauses = self.clauses.len()))]
    pub fn evaluate(&self, value: &Value) -> Result<O, MatchError> {
        match self.try_evaluate(value) {
            Some(output) => Ok(output),
            None => Err(unhandled(self.pattern_summaries(), value.clone())),
        }
    }

    /// Evaluate the clauses, falling back to a default handler when no
    /// clause fires.
    pub fn evaluate_or(&self, value: &Value, default: impl FnOnce(&Value) -> O) -> O {
        match self.try_evaluate(value) {
            Some(output) => output,
            None => default(value),
        }
    }

    fn try_evaluate(&self, value: &Value) -> Option<O> {
        for (index, clause) in self.clauses.iter().enumerate() {
            let MatchOutcome::Matched(selections) = match_pattern(&clause.pattern, value) else {
                continue;
            };
            if let Some(guard) = &clause.guard {
                if !guard(value) {
                    tracing::trace!(index, "guard rejected matched clause");
                    continue;
                }
            }
            tracing::debug!(index, "clause matched");
            return Some((clause.handler)(selections, value));
        }
        None
    }
}

impl<O> Default for ClauseList<O> {
    fn default() -> Self {
        Self::new()
    }
}
