//! Attribute schema registry
//!
//! This module defines the `AttributeSchema`: the process-wide registry of
//! known attributes, their compatibility and disambiguation rule strategies,
//! and the precedence order consulted during disambiguation.
//!
//! The schema follows a one-time-initialization lifecycle: it is assembled
//! through `AttributeSchemaBuilder` at configuration-load time, `build()`
//! validates it, and the result is immutable for the remainder of its
//! lifetime. After `build()` it may be read concurrently by any number of
//! simultaneous selections without synchronization.
//!
//! Rule dispatch is a tagged strategy per attribute (default-equality vs.
//! custom closure), not a trait hierarchy.

use crate::errors::{VxError, VxErrorKind};
use crate::model::{Attribute, AttributeValue};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// Outcome of a per-attribute compatibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    Compatible,
    Incompatible,
}

/// Signature of a custom compatibility check.
///
/// Receives the requested value and the candidate's value for the attribute,
/// or `None` if the candidate does not declare it.
pub type CompatibilityFn =
    dyn Fn(&AttributeValue, Option<&AttributeValue>) -> Compatibility + Send + Sync;

/// Per-attribute compatibility strategy.
///
/// The default strategy is strict equality with absence counting as
/// incompatible. Anything softer (coercion, closest-value) belongs inside a
/// `Custom` rule; compatibility stays a boolean gate either way.
#[derive(Clone)]
pub enum CompatibilityRule {
    /// Compatible iff the candidate declares the attribute with an equal value
    EqualityDefault,
    /// Caller-supplied check
    Custom(Arc<CompatibilityFn>),
}

impl CompatibilityRule {
    /// Wrap a closure as a custom rule
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&AttributeValue, Option<&AttributeValue>) -> Compatibility + Send + Sync + 'static,
    {
        CompatibilityRule::Custom(Arc::new(f))
    }

    /// Evaluate the rule for one requested/candidate value pair
    pub fn evaluate(
        &self,
        requested: &AttributeValue,
        candidate: Option<&AttributeValue>,
    ) -> Compatibility {
        match self {
            CompatibilityRule::EqualityDefault => match candidate {
                Some(value) if value == requested => Compatibility::Compatible,
                _ => Compatibility::Incompatible,
            },
            CompatibilityRule::Custom(f) => f(requested, candidate),
        }
    }
}

impl fmt::Debug for CompatibilityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatibilityRule::EqualityDefault => write!(f, "CompatibilityRule::EqualityDefault"),
            CompatibilityRule::Custom(_) => write!(f, "CompatibilityRule::Custom(..)"),
        }
    }
}

/// Signature of a custom disambiguation preference.
///
/// Receives the distinct values present among currently-tied candidates and
/// returns the preferred subset.
pub type DisambiguationFn =
    dyn Fn(&BTreeSet<AttributeValue>) -> BTreeSet<AttributeValue> + Send + Sync;

/// Per-attribute disambiguation strategy.
#[derive(Clone)]
pub enum DisambiguationRule {
    /// Every present value is preferred: the attribute cannot break ties
    NoPreference,
    /// Caller-supplied preference over the distinct value set
    Custom(Arc<DisambiguationFn>),
}

impl DisambiguationRule {
    /// Wrap a closure as a custom rule
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&BTreeSet<AttributeValue>) -> BTreeSet<AttributeValue> + Send + Sync + 'static,
    {
        DisambiguationRule::Custom(Arc::new(f))
    }

    /// Compute the preferred subset of `values`.
    ///
    /// A custom rule's output is sanitized: values it invents are dropped,
    /// and an empty result degrades to the full input set. A rule can
    /// prefer; it can never reject every candidate.
    pub fn preferred(&self, values: &BTreeSet<AttributeValue>) -> BTreeSet<AttributeValue> {
        match self {
            DisambiguationRule::NoPreference => values.clone(),
            DisambiguationRule::Custom(f) => {
                let chosen: BTreeSet<AttributeValue> =
                    f(values).intersection(values).cloned().collect();
                if chosen.is_empty() {
                    values.clone()
                } else {
                    chosen
                }
            }
        }
    }
}

impl fmt::Debug for DisambiguationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisambiguationRule::NoPreference => write!(f, "DisambiguationRule::NoPreference"),
            DisambiguationRule::Custom(_) => write!(f, "DisambiguationRule::Custom(..)"),
        }
    }
}

#[derive(Debug, Clone)]
struct RegisteredAttribute {
    attribute: Attribute,
    compatibility: CompatibilityRule,
    disambiguation: DisambiguationRule,
}

/// Immutable registry of attributes, rules, and precedence order.
///
/// Built once via [`AttributeSchemaBuilder`]; shared by reference across any
/// number of concurrent selections.
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    registered: BTreeMap<String, RegisteredAttribute>,
    precedence: Vec<String>,
}

impl AttributeSchema {
    /// Start building a schema
    pub fn builder() -> AttributeSchemaBuilder {
        AttributeSchemaBuilder {
            registered: BTreeMap::new(),
            registration_order: Vec::new(),
            explicit_precedence: Vec::new(),
        }
    }

    /// Look up a registered attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.registered.get(name).map(|r| &r.attribute)
    }

    /// Whether an attribute with this name is registered
    pub fn is_registered(&self, name: &str) -> bool {
        self.registered.contains_key(name)
    }

    /// The compatibility strategy for an attribute.
    ///
    /// Unregistered attributes fall back to the default equality rule, so a
    /// consumer may request attributes the schema never heard of.
    pub fn compatibility_rule(&self, name: &str) -> CompatibilityRule {
        self.registered
            .get(name)
            .map(|r| r.compatibility.clone())
            .unwrap_or(CompatibilityRule::EqualityDefault)
    }

    /// The disambiguation strategy for an attribute
    pub fn disambiguation_rule(&self, name: &str) -> DisambiguationRule {
        self.registered
            .get(name)
            .map(|r| r.disambiguation.clone())
            .unwrap_or(DisambiguationRule::NoPreference)
    }

    /// The full effective precedence order: explicitly ordered attributes
    /// first, then the remaining registered attributes in registration order.
    pub fn precedence_order(&self) -> &[String] {
        &self.precedence
    }

    /// Number of registered attributes
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Whether the schema has no registered attributes
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

/// Builder for [`AttributeSchema`].
///
/// Collects registrations and the explicit precedence list; `build()`
/// validates and freezes the schema.
pub struct AttributeSchemaBuilder {
    registered: BTreeMap<String, RegisteredAttribute>,
    registration_order: Vec<String>,
    explicit_precedence: Vec<String>,
}

impl AttributeSchemaBuilder {
    /// Register an attribute with the default rules.
    ///
    /// # Errors
    ///
    /// `VxErrorKind::DuplicateAttribute` if the name was already registered
    /// with a different declared value kind. Re-registration with the same
    /// kind is allowed and replaces the stored rules.
    pub fn register_attribute(self, attribute: Attribute) -> Result<Self, VxError> {
        self.register_attribute_with_rules(
            attribute,
            CompatibilityRule::EqualityDefault,
            DisambiguationRule::NoPreference,
        )
    }

    /// Register an attribute together with its rule strategies.
    ///
    /// # Errors
    ///
    /// `VxErrorKind::DuplicateAttribute` if the name was already registered
    /// with a different declared value kind.
    pub fn register_attribute_with_rules(
        mut self,
        attribute: Attribute,
        compatibility: CompatibilityRule,
        disambiguation: DisambiguationRule,
    ) -> Result<Self, VxError> {
        if let Some(existing) = self.registered.get(&attribute.name) {
            if existing.attribute.kind != attribute.kind {
                return Err(VxError::new(VxErrorKind::DuplicateAttribute)
                    .with_attribute(attribute.name.clone())
                    .with_op("register_attribute")
                    .with_message(format!(
                        "attribute '{}' already registered with kind {}, now {}",
                        attribute.name, existing.attribute.kind, attribute.kind
                    )));
            }
        } else {
            self.registration_order.push(attribute.name.clone());
        }

        self.registered.insert(
            attribute.name.clone(),
            RegisteredAttribute {
                attribute,
                compatibility,
                disambiguation,
            },
        );
        Ok(self)
    }

    /// Declare the explicit head of the disambiguation precedence order.
    ///
    /// Attributes not listed here are evaluated after all explicitly ordered
    /// ones, in registration order. Names are validated at `build()`.
    pub fn precedence<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.explicit_precedence = names.into_iter().map(Into::into).collect();
        self
    }

    /// Validate and freeze the schema.
    ///
    /// # Errors
    ///
    /// `VxErrorKind::UnknownAttribute` if the explicit precedence list names
    /// an attribute that was never registered.
    pub fn build(self) -> Result<AttributeSchema, VxError> {
        for name in &self.explicit_precedence {
            if !self.registered.contains_key(name) {
                return Err(VxError::new(VxErrorKind::UnknownAttribute)
                    .with_attribute(name.clone())
                    .with_op("build_schema")
                    .with_message("precedence order names an unregistered attribute"));
            }
        }

        let mut precedence = self.explicit_precedence.clone();
        for name in &self.registration_order {
            if !precedence.contains(name) {
                precedence.push(name.clone());
            }
        }

        Ok(AttributeSchema {
            registered: self.registered,
            precedence,
        })
    }
}
