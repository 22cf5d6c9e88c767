//! Named captures produced during matching.

use smallvec::SmallVec;

use sift_value::{Name, Value};

/// Captures bound by a successful match, in binding order.
///
/// Built bottom-up during matching and discarded when an attempt fails.
/// Most patterns bind a handful of names, so entries live inline.
#[derive(Clone, Debug, Default)]
pub struct Selections {
    entries: SmallVec<[(Name, Value); 4]>,
}

/// Two bindings for one name with unequal values.
///
/// Internal control value: the matcher collapses it to a no-match, it
/// never surfaces to handlers or callers.
#[derive(Debug)]
pub(crate) struct SelectionConflict {
    pub(crate) name: Name,
}

impl Selections {
    /// Empty selection map.
    pub fn new() -> Self {
        Selections::default()
    }

    /// Single binding of `name` to `value`.
    pub(crate) fn bind(name: Name, value: Value) -> Self {
        let mut entries = SmallVec::new();
        entries.push((name, value));
        Selections { entries }
    }

    /// Look up a binding by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no names were bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate bindings in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.entries.iter().map(|(name, value)| (name, value))
    }

    /// Merge another selection map into this one.
    ///
    /// A name present in both maps must bind deep-equal values, or the
    /// merge fails. Names present in only one map pass through unchanged.
    /// Associative and commutative in the success case.
    pub(crate) fn merge(mut self, other: Selections) -> Result<Selections, SelectionConflict> {
        for (name, value) in other.entries {
            match self.get(name.as_str()) {
                Some(existing) if existing.equals(&value) => {}
                Some(_) => return Err(SelectionConflict { name }),
                None => self.entries.push((name, value)),
            }
        }
        Ok(self)
    }
}
