use variax_core::model::{Attribute, AttributeContainer, AttributeValue, CandidateVariant};
use variax_core::schema::{AttributeSchema, CompatibilityRule, DisambiguationRule};

/// Build a schema registering each name as a token attribute with default
/// rules, in the given order.
#[allow(dead_code)]
pub fn token_schema(names: &[&str]) -> AttributeSchema {
    let mut builder = AttributeSchema::builder();
    for name in names {
        builder = builder
            .register_attribute(Attribute::token(*name))
            .expect("Should register attribute");
    }
    builder.build().expect("Should build schema")
}

/// Build a schema where `attribute` prefers `preferred` during
/// disambiguation (falling back to no preference when the value is absent
/// from the tied set).
#[allow(dead_code)]
pub fn preferring_schema(attribute: &str, preferred: &'static str) -> AttributeSchema {
    AttributeSchema::builder()
        .register_attribute_with_rules(
            Attribute::token(attribute),
            CompatibilityRule::EqualityDefault,
            DisambiguationRule::custom(move |values| {
                let wanted = AttributeValue::token(preferred);
                if values.contains(&wanted) {
                    [wanted].into_iter().collect()
                } else {
                    values.clone()
                }
            }),
        )
        .expect("Should register attribute")
        .build()
        .expect("Should build schema")
}

/// Build a container from (name, token-value) pairs.
#[allow(dead_code)]
pub fn container(attrs: &[(&str, &str)]) -> AttributeContainer {
    let mut builder = AttributeContainer::builder();
    for (name, value) in attrs {
        builder = builder.attribute(*name, AttributeValue::token(*value));
    }
    builder.build()
}

/// Build a candidate variant from (name, token-value) pairs.
#[allow(dead_code)]
pub fn variant(id: &str, attrs: &[(&str, &str)]) -> CandidateVariant {
    CandidateVariant::new(id, container(attrs))
}
