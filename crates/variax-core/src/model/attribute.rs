//! Attribute domain model
//!
//! This module defines attributes, the named, typed dimensions along which
//! candidate variants are described and consumers express requirements, and
//! the typed values bound to them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared value type of an attribute.
///
/// An attribute is registered once with a kind; registering the same name
/// again with a different kind is a schema misconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeValueKind {
    /// Free-form string value
    #[serde(rename = "TEXT")]
    Text,
    /// Enum-like token value (e.g. "blue", "runtime")
    #[serde(rename = "TOKEN")]
    Token,
    /// Ordered integer value (e.g. a language level)
    #[serde(rename = "ORDINAL")]
    Ordinal,
}

impl fmt::Display for AttributeValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttributeValueKind::Text => "text",
            AttributeValueKind::Token => "token",
            AttributeValueKind::Ordinal => "ordinal",
        };
        write!(f, "{}", s)
    }
}

/// A named, typed attribute.
///
/// Identity is the name; two attributes with the same name are the same
/// attribute. The kind records the declared value type and is checked on
/// schema registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    /// Unique attribute name (e.g. "color", "category")
    pub name: String,

    /// Declared value type
    pub kind: AttributeValueKind,
}

impl Attribute {
    /// Create a new attribute with the given name and declared value kind
    pub fn new(name: impl Into<String>, kind: AttributeValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Shorthand for a token-kinded attribute (the common case)
    pub fn token(name: impl Into<String>) -> Self {
        Self::new(name, AttributeValueKind::Token)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Attribute({}, kind={})", self.name, self.kind)
    }
}

/// A typed value bound to an attribute.
///
/// Equality is exact equality of the tagged representation: a `Token("a")`
/// never equals a `Text("a")`. `Ord` is derived so sets of values have a
/// deterministic iteration order, which diagnostics rely on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Free-form string value
    #[serde(rename = "TEXT")]
    Text(String),
    /// Enum-like token value
    #[serde(rename = "TOKEN")]
    Token(String),
    /// Ordered integer value
    #[serde(rename = "ORDINAL")]
    Ordinal(i64),
}

impl AttributeValue {
    /// Construct a text value
    pub fn text(s: impl Into<String>) -> Self {
        AttributeValue::Text(s.into())
    }

    /// Construct a token value
    pub fn token(s: impl Into<String>) -> Self {
        AttributeValue::Token(s.into())
    }

    /// Construct an ordinal value
    pub fn ordinal(n: i64) -> Self {
        AttributeValue::Ordinal(n)
    }

    /// The kind of this value
    pub fn kind(&self) -> AttributeValueKind {
        match self {
            AttributeValue::Text(_) => AttributeValueKind::Text,
            AttributeValue::Token(_) => AttributeValueKind::Token,
            AttributeValue::Ordinal(_) => AttributeValueKind::Ordinal,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => write!(f, "{}", s),
            AttributeValue::Token(s) => write!(f, "{}", s),
            AttributeValue::Ordinal(n) => write!(f, "{}", n),
        }
    }
}
