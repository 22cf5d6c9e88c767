//! Sift Eval - matcher and clause evaluation for the sift match engine.
//!
//! This crate provides:
//! - The recursive matcher (`match_pattern`, `MatchOutcome`)
//! - Selection maps with the equality-checked merge (`Selections`)
//! - Clauses and first-match-wins evaluation (`Clause`, `ClauseList`)
//! - The fluent builder (`match_value`, `MatchExpr`) with `run`,
//!   `otherwise`, and `checked_run` terminals
//! - `MatchError`, the only error type terminal operations return
//!
//! # Evaluation Model
//!
//! Matching is synchronous, deterministic, and free of engine-side
//! effects: failed attempts return control values, never errors, and any
//! selections built inside a failed branch die with it. Finalized clause
//! lists are immutable and `Send + Sync`; concurrent evaluations each
//! build their own transient selection map.
//!
//! ```
//! use sift_eval::{match_value, Pattern};
//!
//! let label = match_value(7)
//!     .with(Pattern::literal(0), |_, _| "zero".to_string())
//!     .with(
//!         Pattern::capture("n"),
//!         |selections, _| format!("nonzero {}", selections.get("n").unwrap()),
//!     )
//!     .run()
//!     .unwrap();
//! assert_eq!(label, "nonzero 7");
//! ```

mod builder;
mod clause;
mod errors;
mod matcher;
mod selections;

pub use builder::{match_value, MatchExpr};
pub use clause::{Clause, ClauseList, GuardFn, HandlerFn};
pub use errors::MatchError;
pub use matcher::{match_pattern, MatchOutcome};
pub use selections::Selections;

// Re-export the grammar and value domain so callers need only this crate.
pub use sift_pattern::{audit, Coverage, Exclusion, Pattern, PatternError, Shape};
pub use sift_value::{Name, Value, ValueKind};

/// Test whether a value matches a pattern, without building clauses.
pub fn is_match(pattern: &Pattern, value: &Value) -> bool {
    match_pattern(pattern, value).is_match()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_match_is_a_plain_membership_test() {
        let pattern = Pattern::union([Pattern::literal(1), Pattern::of_kind(ValueKind::Str)]);
        assert!(is_match(&pattern, &Value::Int(1)));
        assert!(is_match(&pattern, &Value::string("any")));
        assert!(!is_match(&pattern, &Value::Int(2)));
    }
}
