//! Sift Value - runtime value domain for the sift match engine.
//!
//! This crate provides:
//! - The closed `Value` enum the engine matches against
//! - `Heap<T>`, the enforced-`Arc` wrapper for heap values
//! - `RecordValue`/`RecordLayout` for record instances with O(1) field access
//! - `Name`, the cheap-to-clone field/capture identifier
//!
//! # Introspection Boundary
//!
//! The matcher in `sift_eval` consumes values exclusively through the
//! introspection surface defined here (`items`, `as_record`, `kind`,
//! `equals`). Swapping this crate for another value domain leaves the
//! engine untouched.
//!
//! # Value Types
//!
//! All heap allocations go through `Value::` factory methods; the
//! `Heap<T>` wrapper enforces this invariant and shares allocations via
//! `Arc`, so cloning a value is always cheap.

mod name;
mod value;

pub use name::Name;
pub use value::{Heap, RecordLayout, RecordValue, Value, ValueKind};
