//! Candidate variant model
//!
//! A candidate variant is one option a consumer might resolve to: an opaque,
//! caller-owned identifier paired with the attribute container the producer
//! declared for it. The engine treats variants as plain values and owns no
//! resources through them.

use crate::model::AttributeContainer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One selectable producer variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateVariant {
    /// Caller-owned identifier (e.g. which producer/configuration this is)
    pub id: String,

    /// The attributes this variant declares
    pub attributes: AttributeContainer,
}

impl CandidateVariant {
    /// Create a new candidate variant
    pub fn new(id: impl Into<String>, attributes: AttributeContainer) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }
}

impl fmt::Display for CandidateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CandidateVariant({}, {})", self.id, self.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttributeValue;

    #[test]
    fn test_variant_new() {
        let attrs = AttributeContainer::builder()
            .attribute("color", AttributeValue::token("blue"))
            .build();
        let v = CandidateVariant::new("lib:release", attrs.clone());

        assert_eq!(v.id, "lib:release");
        assert_eq!(v.attributes, attrs);
    }

    #[test]
    fn test_variant_display() {
        let v = CandidateVariant::new(
            "v1",
            AttributeContainer::builder()
                .attribute("color", AttributeValue::token("blue"))
                .build(),
        );
        assert_eq!(v.to_string(), "CandidateVariant(v1, {color=blue})");
    }

    #[test]
    fn test_variant_is_a_value_type() {
        let v = CandidateVariant::new("v1", AttributeContainer::empty());
        let copy = v.clone();
        assert_eq!(v, copy);
    }
}
