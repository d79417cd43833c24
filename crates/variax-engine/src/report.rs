//! Structured failure reports
//!
//! When selection cannot produce a single variant, the caller gets one of
//! these read-only report objects instead of a bare error. They reconstruct,
//! after the fact, a human-auditable explanation of the matching decision:
//! per candidate, its identifier, its full attribute container, and the
//! reason(s) it was rejected or remains tied. The presentation layer renders
//! these into text; the content of what to render is fully determined here.
//!
//! Candidates are ordered by identifier so report contents are deterministic
//! regardless of the caller's input order.

use serde::{Deserialize, Serialize};
use variax_core::model::{AttributeContainer, CandidateVariant};
use variax_core::rules::{CandidateRejection, DisambiguationStep};

/// Diagnosis for a selection where no candidate satisfied every requested
/// attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoMatchReport {
    /// What the consumer asked for
    pub requested: AttributeContainer,
    /// Every original candidate with all of its recorded mismatches,
    /// sorted by candidate identifier
    pub rejections: Vec<CandidateRejection>,
}

impl NoMatchReport {
    /// Build a report from the compatibility evaluator's rejections.
    pub fn new(requested: AttributeContainer, mut rejections: Vec<CandidateRejection>) -> Self {
        rejections.sort_by(|a, b| a.candidate.id.cmp(&b.candidate.id));
        Self {
            requested,
            rejections,
        }
    }

    /// Rejected candidate identifiers, in report order
    pub fn candidate_ids(&self) -> Vec<&str> {
        self.rejections
            .iter()
            .map(|r| r.candidate.id.as_str())
            .collect()
    }

    /// The rejection recorded for one candidate, if present
    pub fn rejection_for(&self, candidate_id: &str) -> Option<&CandidateRejection> {
        self.rejections
            .iter()
            .find(|r| r.candidate.id == candidate_id)
    }
}

/// Diagnosis for a selection where more than one candidate survived
/// compatibility filtering and the full disambiguation precedence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbiguousReport {
    /// What the consumer asked for
    pub requested: AttributeContainer,
    /// Every remaining candidate with its full attribute container,
    /// sorted by candidate identifier
    pub tied: Vec<CandidateVariant>,
    /// The ordered narrowing trace: which attributes were tried and what
    /// values survived each step
    pub trace: Vec<DisambiguationStep>,
    /// The last attribute whose tie-break was applied but still left more
    /// than one candidate: the axis the consumer should additionally
    /// specify to break the tie
    pub insufficient_attribute: Option<String>,
}

impl AmbiguousReport {
    /// Build a report from the disambiguation engine's survivors and trace.
    pub fn new(
        requested: AttributeContainer,
        mut tied: Vec<CandidateVariant>,
        trace: Vec<DisambiguationStep>,
    ) -> Self {
        tied.sort_by(|a, b| a.id.cmp(&b.id));
        let insufficient_attribute = trace
            .iter()
            .rev()
            .find(|step| step.applied && step.remaining > 1)
            .map(|step| step.attribute.clone());
        Self {
            requested,
            tied,
            trace,
            insufficient_attribute,
        }
    }

    /// Tied candidate identifiers, in report order
    pub fn candidate_ids(&self) -> Vec<&str> {
        self.tied.iter().map(|c| c.id.as_str()).collect()
    }
}
