//! Record values with O(1) field access.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::name::Name;

use super::Value;

// RecordLayout

/// Layout information for O(1) record field access.
#[derive(Clone, Debug)]
pub struct RecordLayout {
    /// Field names in declared order.
    names: Vec<Name>,
    /// Map from field name to index.
    indices: FxHashMap<Name, usize>,
}

impl RecordLayout {
    /// Create a layout from field names, preserving declared order.
    ///
    /// A repeated name keeps its first slot.
    pub fn new(field_names: &[Name]) -> Self {
        let mut names = Vec::with_capacity(field_names.len());
        let mut indices = FxHashMap::default();
        for name in field_names {
            if !indices.contains_key(name) {
                indices.insert(name.clone(), names.len());
                names.push(name.clone());
            }
        }
        RecordLayout { names, indices }
    }

    /// Get the index of a field by name.
    pub fn index_of(&self, field: &Name) -> Option<usize> {
        self.indices.get(field).copied()
    }

    /// Field names in declared order.
    pub fn names(&self) -> &[Name] {
        &self.names
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the layout has no fields.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// RecordValue

/// Record instance: named fields with efficient access.
#[derive(Clone)]
pub struct RecordValue {
    /// Field values in layout order.
    fields: Arc<Vec<Value>>,
    /// Layout for O(1) field access.
    layout: Arc<RecordLayout>,
}

impl RecordValue {
    /// Create a record from (name, value) entries, preserving entry order.
    ///
    /// A repeated name overwrites the earlier value but keeps its slot.
    pub fn new(entries: Vec<(Name, Value)>) -> Self {
        let names: Vec<Name> = entries.iter().map(|(name, _)| name.clone()).collect();
        let layout = Arc::new(RecordLayout::new(&names));
        let mut fields = vec![Value::Unit; layout.len()];
        for (name, value) in entries {
            if let Some(index) = layout.index_of(&name) {
                fields[index] = value;
            }
        }
        RecordValue {
            fields: Arc::new(fields),
            layout,
        }
    }

    /// Get a field value by name with O(1) lookup.
    pub fn get(&self, field: &Name) -> Option<&Value> {
        let index = self.layout.index_of(field)?;
        self.fields.get(index)
    }

    /// Check whether a field of the given name is present.
    pub fn has_field(&self, field: &Name) -> bool {
        self.layout.index_of(field).is_some()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.layout.names().iter().zip(self.fields.iter())
    }

    /// Structural equality: same field set, each field deep-equal.
    ///
    /// Field order is not significant.
    pub fn equals(&self, other: &RecordValue) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, value)| other.get(name).is_some_and(|o| value.equals(o)))
    }
}

impl PartialEq for RecordValue {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Debug for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in self.iter() {
            map.entry(name, value);
        }
        map.finish()
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}
