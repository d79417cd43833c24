//! Immutable attribute containers
//!
//! An `AttributeContainer` is the attribute set attached to a consumer
//! request or a candidate variant. Containers are never mutated after
//! construction: `with_value` returns a fresh container, and everything
//! else is query-only. Iteration order is lexicographic by attribute name,
//! which is also the deterministic printing order diagnostics use.

use crate::model::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Immutable mapping from attribute name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeContainer {
    entries: BTreeMap<String, AttributeValue>,
}

impl AttributeContainer {
    /// The empty container (a consumer that requests nothing)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start building a container
    pub fn builder() -> AttributeContainerBuilder {
        AttributeContainerBuilder {
            entries: BTreeMap::new(),
        }
    }

    /// Produce a new container with one additional (or replaced) entry.
    ///
    /// The receiver is left untouched; containers are immutable.
    pub fn with_value(&self, name: impl Into<String>, value: AttributeValue) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(name.into(), value);
        Self { entries }
    }

    /// Look up the value declared for an attribute, if any
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.get(name)
    }

    /// Whether the container declares the attribute at all
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Attribute names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// (name, value) pairs in lexicographic name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of declared attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no attributes are declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for AttributeContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        write!(f, "}}")
    }
}

/// Consuming builder for `AttributeContainer`.
pub struct AttributeContainerBuilder {
    entries: BTreeMap<String, AttributeValue>,
}

impl AttributeContainerBuilder {
    /// Declare an attribute value; a repeated name replaces the earlier value
    pub fn attribute(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.entries.insert(name.into(), value);
        self
    }

    /// Finish the container
    pub fn build(self) -> AttributeContainer {
        AttributeContainer {
            entries: self.entries,
        }
    }
}
