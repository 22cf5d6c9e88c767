//! Structural complements and the coverage audit.
//!
//! For a subset of pattern variants the complement ("the values this
//! pattern does NOT match") has a usable structural description. The
//! audit intersects the complements of every unguarded clause pattern and
//! searches a declared [`Shape`] for a witness value no clause matches.
//!
//! The result is advisory: it is consulted ahead of execution by checked
//! terminal operations and never influences runtime matching. Unsupported
//! variants (predicates, negation, intersections, sequences, `each`) get
//! an opaque complement that is conservatively assumed non-empty, so the
//! audit may flag a covering clause list, but never blesses a gappy one
//! whose patterns it understands.

use sift_value::{Name, Value, ValueKind};

use crate::grammar::Pattern;

/// Abstract description of the values a pattern does not match.
#[derive(Clone, Debug, PartialEq)]
pub enum Exclusion {
    /// Nothing is excluded: the pattern matches every value.
    Empty,
    /// Any value not deep-equal to the payload.
    NotEqual(Value),
    /// Any value whose runtime kind differs.
    NotKind(ValueKind),
    /// All sub-exclusions hold at once (complement of a union).
    AllOf(Vec<Exclusion>),
    /// Non-records, records missing a listed field, and records where
    /// some listed field falls in its sub-exclusion.
    Record(Vec<(Name, Exclusion)>),
    /// Complement not computable for this pattern variant.
    Opaque,
}

impl Exclusion {
    /// Whether the excluded set is provably empty (the pattern is total).
    pub fn is_empty(&self) -> bool {
        match self {
            Exclusion::Empty => true,
            Exclusion::AllOf(parts) => parts.iter().any(Exclusion::is_empty),
            Exclusion::NotEqual(_)
            | Exclusion::NotKind(_)
            | Exclusion::Record(_)
            | Exclusion::Opaque => false,
        }
    }

    /// Whether `value` lies in the excluded set.
    ///
    /// `Opaque` admits everything: a value is only ruled out when the
    /// complement is understood well enough to rule it out.
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            Exclusion::Empty => false,
            Exclusion::NotEqual(excluded) => !value.equals(excluded),
            Exclusion::NotKind(kind) => value.kind() != *kind,
            Exclusion::AllOf(parts) => parts.iter().all(|part| part.admits(value)),
            Exclusion::Record(fields) => match value.as_record() {
                Some(record) => fields.iter().any(|(name, sub)| {
                    record.get(name).is_none_or(|field| sub.admits(field))
                }),
                None => true,
            },
            Exclusion::Opaque => true,
        }
    }
}

impl Pattern {
    /// Structural complement of this pattern.
    ///
    /// Complement of the wildcard is empty; of a literal, "anything
    /// unequal"; of a kind, "anything of another kind"; of a union, the
    /// intersection of the alternatives' complements; of a structural
    /// pattern, the listed fields fixed to their sub-complements with
    /// other fields unconstrained. `select` is transparent. Everything
    /// else is opaque.
    pub fn exclusion(&self) -> Exclusion {
        match self {
            Pattern::Wildcard => Exclusion::Empty,
            Pattern::Literal(value) => Exclusion::NotEqual(value.clone()),
            Pattern::Kind(kind) => Exclusion::NotKind(*kind),
            Pattern::Select { inner, .. } => inner.exclusion(),
            Pattern::Union(alternatives) => {
                let parts: Vec<Exclusion> =
                    alternatives.iter().map(Pattern::exclusion).collect();
                if parts.iter().any(Exclusion::is_empty) {
                    Exclusion::Empty
                } else {
                    Exclusion::AllOf(parts)
                }
            }
            Pattern::Structural(fields) => Exclusion::Record(
                fields
                    .iter()
                    .map(|(name, sub)| (name.clone(), sub.exclusion()))
                    .collect(),
            ),
            Pattern::Predicate(_)
            | Pattern::Not(_)
            | Pattern::Intersection(_)
            | Pattern::Sequence(_)
            | Pattern::Each(_) => Exclusion::Opaque,
        }
    }
}

// Shapes

/// Candidate values per shape the audit will enumerate before giving up.
const ENUMERATION_CAP: usize = 1024;

/// Declared description of the input value domain, used only by the
/// coverage audit.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// No declaration: only a total pattern proves coverage.
    Any,
    /// Exactly `false` and `true`.
    Bool,
    /// Exactly the unit value.
    Unit,
    /// A finite enumeration of values.
    OneOf(Vec<Value>),
    /// Records whose listed fields each range over a sub-shape.
    Record(Vec<(Name, Shape)>),
}

impl Shape {
    /// Enumerate the shape's values when finite and small enough.
    fn enumerate(&self) -> Option<Vec<Value>> {
        match self {
            Shape::Any => None,
            Shape::Bool => Some(vec![Value::Bool(false), Value::Bool(true)]),
            Shape::Unit => Some(vec![Value::Unit]),
            Shape::OneOf(values) => {
                if values.len() > ENUMERATION_CAP {
                    return None;
                }
                Some(values.clone())
            }
            Shape::Record(fields) => {
                // Cartesian product of the field shapes, capped.
                let mut combinations: Vec<Vec<(Name, Value)>> = vec![Vec::new()];
                for (name, shape) in fields {
                    let field_values = shape.enumerate()?;
                    let mut grown =
                        Vec::with_capacity(combinations.len().saturating_mul(field_values.len()));
                    for combination in &combinations {
                        for value in &field_values {
                            if grown.len() >= ENUMERATION_CAP {
                                return None;
                            }
                            let mut extended = combination.clone();
                            extended.push((name.clone(), value.clone()));
                            grown.push(extended);
                        }
                    }
                    combinations = grown;
                }
                Some(combinations.into_iter().map(Value::record).collect())
            }
        }
    }
}

// Audit

/// Verdict of the coverage audit.
#[derive(Clone, Debug, PartialEq)]
pub enum Coverage {
    /// Every value of the declared shape is matched by some pattern.
    Covering,
    /// Some value may escape every pattern. The witness is present when
    /// the shape was finite enough to search.
    Gap { witness: Option<Value> },
}

/// Audit a set of clause patterns against a declared shape.
///
/// Guarded clauses must not be passed in: a guard can reject a matched
/// value, so a guarded clause never contributes to coverage.
pub fn audit<'p>(shape: &Shape, patterns: impl IntoIterator<Item = &'p Pattern>) -> Coverage {
    let exclusions: Vec<Exclusion> = patterns.into_iter().map(Pattern::exclusion).collect();

    // A total pattern covers any shape, declared or not.
    if exclusions.iter().any(Exclusion::is_empty) {
        tracing::debug!("coverage audit: total pattern present");
        return Coverage::Covering;
    }

    match shape.enumerate() {
        Some(values) => {
            let witness = values
                .into_iter()
                .find(|value| exclusions.iter().all(|exclusion| exclusion.admits(value)));
            match witness {
                Some(value) => {
                    tracing::debug!(witness = %value, "coverage audit: gap");
                    Coverage::Gap {
                        witness: Some(value),
                    }
                }
                None => Coverage::Covering,
            }
        }
        // Infinite or oversized domain and no total pattern: flag it.
        None => {
            tracing::debug!("coverage audit: domain not enumerable, no total pattern");
            Coverage::Gap { witness: None }
        }
    }
}
