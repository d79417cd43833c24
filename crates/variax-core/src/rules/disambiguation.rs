//! Disambiguation engine
//!
//! Narrows a compatibility-filtered candidate set by applying per-attribute
//! tie-break rules in the schema's precedence order.
//!
//! ## Narrowing rules
//!
//! For each attribute in precedence order: collect the distinct values
//! declared among the current candidates. Fewer than 2 distinct values means
//! the attribute cannot discriminate and the step is recorded as not applied.
//! Otherwise the attribute's disambiguation rule yields a preferred value
//! subset, and the candidate set is replaced by the candidates declaring a
//! preferred value UNION the candidates silent on the attribute.
//!
//! Silence is neutral: a candidate that never declares a disambiguating
//! attribute is never penalized by that attribute's tie-break, and can
//! outlast candidates declaring a non-preferred value. Callers depend on
//! this exact behavior.
//!
//! A step never empties a non-empty set (every candidate either matches a
//! preferred value or is exempt by absence), so the survivors of a non-empty
//! input are always non-empty.

use crate::model::{AttributeValue, CandidateVariant};
use crate::schema::AttributeSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One precedence-order step of the narrowing trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisambiguationStep {
    /// The attribute examined
    pub attribute: String,
    /// Distinct values declared among the candidates at this step (sorted)
    pub distinct_values: Vec<AttributeValue>,
    /// The preferred subset the rule produced (sorted); equals
    /// `distinct_values` when the step was not applied
    pub preferred_values: Vec<AttributeValue>,
    /// Whether the tie-break was applied (at least 2 distinct values present)
    pub applied: bool,
    /// Candidates remaining after this step
    pub remaining: usize,
}

/// Result of a disambiguation pass: the surviving candidates and the full
/// narrowing trace for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisambiguationOutcome {
    /// Survivors in input order; non-empty whenever the input was non-empty
    pub survivors: Vec<CandidateVariant>,
    /// Every attribute examined, in precedence order
    pub trace: Vec<DisambiguationStep>,
}

impl DisambiguationOutcome {
    /// The last attribute whose applied tie-break still left more than one
    /// candidate: the axis a consumer should additionally specify to break
    /// the tie. `None` if no attribute ever presented two distinct values.
    pub fn insufficient_attribute(&self) -> Option<&str> {
        self.trace
            .iter()
            .rev()
            .find(|step| step.applied && step.remaining > 1)
            .map(|step| step.attribute.as_str())
    }
}

/// Narrow `candidates` using the schema's precedence-ordered tie-break rules.
///
/// The input must already be filtered for compatibility; this function never
/// re-checks compatibility. One pass over the precedence order; an attribute
/// is never revisited. Stops early once a single candidate remains.
pub fn disambiguate(
    candidates: &[CandidateVariant],
    schema: &AttributeSchema,
) -> DisambiguationOutcome {
    let mut survivors: Vec<CandidateVariant> = candidates.to_vec();
    let mut trace = Vec::new();

    for name in schema.precedence_order() {
        if survivors.len() <= 1 {
            break;
        }

        let distinct: BTreeSet<AttributeValue> = survivors
            .iter()
            .filter_map(|c| c.attributes.get(name))
            .cloned()
            .collect();

        if distinct.len() < 2 {
            // Attribute cannot discriminate here; examined but not applied
            trace.push(DisambiguationStep {
                attribute: name.clone(),
                distinct_values: distinct.iter().cloned().collect(),
                preferred_values: distinct.iter().cloned().collect(),
                applied: false,
                remaining: survivors.len(),
            });
            continue;
        }

        let preferred = schema.disambiguation_rule(name).preferred(&distinct);

        let narrowed: Vec<CandidateVariant> = survivors
            .iter()
            .filter(|c| match c.attributes.get(name) {
                // Silence is neutral
                None => true,
                Some(value) => preferred.contains(value),
            })
            .cloned()
            .collect();
        debug_assert!(!narrowed.is_empty(), "a step must never empty the set");

        trace.push(DisambiguationStep {
            attribute: name.clone(),
            distinct_values: distinct.iter().cloned().collect(),
            preferred_values: preferred.iter().cloned().collect(),
            applied: true,
            remaining: narrowed.len(),
        });
        survivors = narrowed;
    }

    DisambiguationOutcome { survivors, trace }
}
