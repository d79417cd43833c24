//! Compatibility evaluator
//!
//! Filters a candidate list against a consumer's requested attributes. A
//! candidate is retained only if every requested attribute evaluates
//! COMPATIBLE under its rule (or the default equality rule). Attributes a
//! candidate declares but the consumer never requested are ignored entirely;
//! under this open-world policy, irrelevant extra structure on a candidate
//! is not a defect.
//!
//! ## Rejection capture
//!
//! Diagnostics must show every mismatch, not merely the earliest, so a
//! rejected candidate records ALL incompatible attributes. Requested
//! attributes are evaluated in lexicographic name order (the container's
//! iteration order); the first mismatch in that order is the primary reason.

use crate::model::{AttributeContainer, AttributeValue, CandidateVariant};
use crate::schema::{AttributeSchema, Compatibility};
use serde::{Deserialize, Serialize};

/// One requested attribute a candidate failed to satisfy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeMismatch {
    /// The requested attribute's name
    pub attribute: String,
    /// The value the consumer asked for
    pub requested: AttributeValue,
    /// What the candidate declared, or `None` if it is silent on the attribute
    pub found: Option<AttributeValue>,
}

/// A candidate rejected by the compatibility evaluator, with every mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRejection {
    /// The rejected candidate (full container included for diagnostics)
    pub candidate: CandidateVariant,
    /// All incompatible attributes, in requested-attribute order
    pub mismatches: Vec<AttributeMismatch>,
}

impl CandidateRejection {
    /// The primary incompatibility: the first mismatch in requested-attribute
    /// order. `None` never occurs for rejections produced by
    /// [`filter_compatible`], which only rejects on at least one mismatch.
    pub fn primary(&self) -> Option<&AttributeMismatch> {
        self.mismatches.first()
    }
}

/// Result of filtering a candidate list for compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityOutcome {
    /// Candidates satisfying every requested attribute, in input order
    pub compatible: Vec<CandidateVariant>,
    /// Rejected candidates with their recorded mismatches, in input order
    pub rejections: Vec<CandidateRejection>,
}

/// Filter `candidates` against the consumer's `requested` attributes.
///
/// Each candidate is judged independently; the outcome partitions the input
/// (every candidate appears in exactly one of the two lists, input order
/// preserved). An empty `requested` container is compatible with everything.
pub fn filter_compatible(
    requested: &AttributeContainer,
    candidates: &[CandidateVariant],
    schema: &AttributeSchema,
) -> CompatibilityOutcome {
    let mut compatible = Vec::new();
    let mut rejections = Vec::new();

    for candidate in candidates {
        let mut mismatches = Vec::new();

        for (name, requested_value) in requested.iter() {
            let candidate_value = candidate.attributes.get(name);
            let verdict = schema
                .compatibility_rule(name)
                .evaluate(requested_value, candidate_value);

            if verdict == Compatibility::Incompatible {
                mismatches.push(AttributeMismatch {
                    attribute: name.to_string(),
                    requested: requested_value.clone(),
                    found: candidate_value.cloned(),
                });
            }
        }

        if mismatches.is_empty() {
            compatible.push(candidate.clone());
        } else {
            rejections.push(CandidateRejection {
                candidate: candidate.clone(),
                mismatches,
            });
        }
    }

    CompatibilityOutcome {
        compatible,
        rejections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Attribute;
    use crate::schema::CompatibilityRule;

    fn schema() -> AttributeSchema {
        AttributeSchema::builder()
            .register_attribute(Attribute::token("color"))
            .unwrap()
            .register_attribute(Attribute::token("shape"))
            .unwrap()
            .build()
            .unwrap()
    }

    fn variant(id: &str, attrs: &[(&str, &str)]) -> CandidateVariant {
        let mut builder = AttributeContainer::builder();
        for (name, value) in attrs {
            builder = builder.attribute(*name, AttributeValue::token(*value));
        }
        CandidateVariant::new(id, builder.build())
    }

    #[test]
    fn test_equal_value_is_retained() {
        let requested = AttributeContainer::builder()
            .attribute("color", AttributeValue::token("blue"))
            .build();
        let candidates = vec![variant("v1", &[("color", "blue")])];

        let outcome = filter_compatible(&requested, &candidates, &schema());
        assert_eq!(outcome.compatible.len(), 1);
        assert!(outcome.rejections.is_empty());
    }

    #[test]
    fn test_unequal_value_is_rejected_with_mismatch() {
        let requested = AttributeContainer::builder()
            .attribute("color", AttributeValue::token("green"))
            .build();
        let candidates = vec![variant("v1", &[("color", "blue")])];

        let outcome = filter_compatible(&requested, &candidates, &schema());
        assert!(outcome.compatible.is_empty());
        assert_eq!(outcome.rejections.len(), 1);

        let rejection = &outcome.rejections[0];
        let primary = rejection.primary().expect("rejection carries a mismatch");
        assert_eq!(primary.attribute, "color");
        assert_eq!(primary.requested, AttributeValue::token("green"));
        assert_eq!(primary.found, Some(AttributeValue::token("blue")));
    }

    #[test]
    fn test_absent_attribute_is_incompatible_by_default() {
        let requested = AttributeContainer::builder()
            .attribute("color", AttributeValue::token("blue"))
            .build();
        let candidates = vec![variant("v1", &[("shape", "round")])];

        let outcome = filter_compatible(&requested, &candidates, &schema());
        assert_eq!(outcome.rejections.len(), 1);
        assert_eq!(outcome.rejections[0].mismatches[0].found, None);
    }

    #[test]
    fn test_all_mismatches_recorded_in_requested_order() {
        let requested = AttributeContainer::builder()
            .attribute("shape", AttributeValue::token("square"))
            .attribute("color", AttributeValue::token("green"))
            .build();
        let candidates = vec![variant("v1", &[("color", "blue"), ("shape", "round")])];

        let outcome = filter_compatible(&requested, &candidates, &schema());
        let mismatches = &outcome.rejections[0].mismatches;

        // Both mismatches captured, lexicographic requested order
        assert_eq!(mismatches.len(), 2);
        assert_eq!(mismatches[0].attribute, "color");
        assert_eq!(mismatches[1].attribute, "shape");
    }

    #[test]
    fn test_extra_candidate_attributes_are_ignored() {
        let requested = AttributeContainer::builder()
            .attribute("color", AttributeValue::token("blue"))
            .build();
        // Candidate declares shape, which was never requested
        let candidates = vec![variant("v1", &[("color", "blue"), ("shape", "round")])];

        let outcome = filter_compatible(&requested, &candidates, &schema());
        assert_eq!(outcome.compatible.len(), 1);
    }

    #[test]
    fn test_empty_request_is_compatible_with_everything() {
        let candidates = vec![
            variant("v1", &[("color", "blue")]),
            variant("v2", &[]),
        ];
        let outcome = filter_compatible(&AttributeContainer::empty(), &candidates, &schema());
        assert_eq!(outcome.compatible.len(), 2);
    }

    #[test]
    fn test_custom_rule_can_tolerate_absence() {
        let schema = AttributeSchema::builder()
            .register_attribute_with_rules(
                Attribute::token("color"),
                CompatibilityRule::custom(|requested, candidate| match candidate {
                    // Absent counts as a wildcard under this rule
                    None => Compatibility::Compatible,
                    Some(v) if v == requested => Compatibility::Compatible,
                    Some(_) => Compatibility::Incompatible,
                }),
                crate::schema::DisambiguationRule::NoPreference,
            )
            .unwrap()
            .build()
            .unwrap();

        let requested = AttributeContainer::builder()
            .attribute("color", AttributeValue::token("blue"))
            .build();
        let candidates = vec![variant("v1", &[]), variant("v2", &[("color", "red")])];

        let outcome = filter_compatible(&requested, &candidates, &schema);
        assert_eq!(outcome.compatible.len(), 1);
        assert_eq!(outcome.compatible[0].id, "v1");
        assert_eq!(outcome.rejections.len(), 1);
        assert_eq!(outcome.rejections[0].candidate.id, "v2");
    }

    #[test]
    fn test_outcome_partitions_input_preserving_order() {
        let requested = AttributeContainer::builder()
            .attribute("color", AttributeValue::token("blue"))
            .build();
        let candidates = vec![
            variant("v3", &[("color", "red")]),
            variant("v1", &[("color", "blue")]),
            variant("v2", &[("color", "blue")]),
        ];

        let outcome = filter_compatible(&requested, &candidates, &schema());
        let kept: Vec<&str> = outcome.compatible.iter().map(|c| c.id.as_str()).collect();
        let dropped: Vec<&str> = outcome
            .rejections
            .iter()
            .map(|r| r.candidate.id.as_str())
            .collect();

        assert_eq!(kept, vec!["v1", "v2"]);
        assert_eq!(dropped, vec!["v3"]);
    }
}
