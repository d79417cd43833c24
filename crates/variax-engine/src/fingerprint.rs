//! Selection request fingerprinting
//!
//! Selection is referentially transparent, so a graph resolver may cache
//! results keyed by request content. This module computes that key: a
//! SHA-256 digest over a canonical JSON serialization of the requested
//! container, the candidate list, and the schema's precedence order (the
//! schema input that affects the outcome ordering-wise).
//!
//! Canonical means deterministic: containers serialize in lexicographic
//! attribute order and the top-level keys are emitted sorted, so equal
//! inputs always digest identically.

use crate::selection::SelectionRequest;
use sha2::{Digest, Sha256};
use variax_core::errors::{VxError, VxErrorKind};
use variax_core::schema::AttributeSchema;

/// Compute the cache key for a selection request against a schema.
///
/// # Errors
///
/// `VxErrorKind::Serialization` if the request cannot be serialized (not
/// expected for well-formed model types).
#[allow(clippy::result_large_err)]
pub fn selection_fingerprint(
    schema: &AttributeSchema,
    request: &SelectionRequest,
) -> Result<String, VxError> {
    let canonical = serde_json::json!({
        "candidates": request.candidates,
        "precedence": schema.precedence_order(),
        "requested": request.requested,
    });
    let bytes = serde_json::to_string(&canonical).map_err(|e| {
        VxError::new(VxErrorKind::Serialization)
            .with_op("selection_fingerprint")
            .with_message(format!("failed to serialize fingerprint input: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(bytes.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use variax_core::model::{
        Attribute, AttributeContainer, AttributeValue, CandidateVariant,
    };

    fn schema() -> AttributeSchema {
        AttributeSchema::builder()
            .register_attribute(Attribute::token("color"))
            .unwrap()
            .build()
            .unwrap()
    }

    fn request(color: &str) -> SelectionRequest {
        SelectionRequest::new(
            AttributeContainer::builder()
                .attribute("color", AttributeValue::token(color))
                .build(),
            vec![CandidateVariant::new(
                "v1",
                AttributeContainer::builder()
                    .attribute("color", AttributeValue::token("blue"))
                    .build(),
            )],
        )
    }

    #[test]
    fn test_fingerprint_is_stable_across_calls() {
        let schema = schema();
        let req = request("blue");
        let f1 = selection_fingerprint(&schema, &req).unwrap();
        let f2 = selection_fingerprint(&schema, &req).unwrap();
        assert_eq!(f1, f2);
    }

    #[test]
    fn test_fingerprint_is_hex_sha256() {
        let f = selection_fingerprint(&schema(), &request("blue")).unwrap();
        assert_eq!(f.len(), 64);
        assert!(f.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_changes_with_request() {
        let schema = schema();
        let f1 = selection_fingerprint(&schema, &request("blue")).unwrap();
        let f2 = selection_fingerprint(&schema, &request("green")).unwrap();
        assert_ne!(f1, f2);
    }

    #[test]
    fn test_fingerprint_changes_with_precedence_order() {
        let req = request("blue");
        let s1 = AttributeSchema::builder()
            .register_attribute(Attribute::token("color"))
            .unwrap()
            .register_attribute(Attribute::token("shape"))
            .unwrap()
            .precedence(["color", "shape"])
            .build()
            .unwrap();
        let s2 = AttributeSchema::builder()
            .register_attribute(Attribute::token("color"))
            .unwrap()
            .register_attribute(Attribute::token("shape"))
            .unwrap()
            .precedence(["shape", "color"])
            .build()
            .unwrap();

        let f1 = selection_fingerprint(&s1, &req).unwrap();
        let f2 = selection_fingerprint(&s2, &req).unwrap();
        assert_ne!(f1, f2);
    }
}
