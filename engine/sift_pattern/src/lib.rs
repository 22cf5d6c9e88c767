//! Sift Pattern - pattern grammar and static analysis for the sift match
//! engine.
//!
//! This crate provides:
//! - The closed `Pattern` grammar (pure data, no matching behavior)
//! - Eager well-formedness validation (`Pattern::validate`)
//! - The exclusion/coverage helper (`audit`, `Exclusion`, `Shape`)
//! - `PatternError`, the programmer-error type for malformed patterns
//!
//! # Architecture
//!
//! Patterns are immutable trees built once per match expression. Matching
//! them against values lives in `sift_eval`; this crate only describes and
//! analyzes. The coverage helper is consulted ahead of execution by
//! checked terminal operations and never during matching.

mod errors;
mod exclusion;
mod grammar;
mod validate;

pub use errors::PatternError;
pub use exclusion::{audit, Coverage, Exclusion, Shape};
pub use grammar::{Pattern, PredicateFn, SequencePattern};

// Re-export the value domain for callers that build literals.
pub use sift_value::{Name, Value, ValueKind};
