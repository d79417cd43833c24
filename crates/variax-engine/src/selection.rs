//! Selection orchestrator
//!
//! Drives the full node-local selection algorithm as a one-pass state
//! machine: `Start → Filtered → {NoMatch | Disambiguating → {Resolved |
//! Ambiguous}}`. Compatibility filtering runs first; if more than one
//! candidate survives, the disambiguation engine narrows the set using the
//! schema's precedence order.
//!
//! `NoMatch` and `Ambiguous` are terminal VALUES, not errors: they travel in
//! `SelectionResult` so a diagnostic-only caller can surface them without
//! aborting a larger run. The only `Err` out of `select` is the fail-fast
//! `NoCandidates` caller contract violation.
//!
//! Selection is a pure function of (request, candidates, schema): no hidden
//! state, no suspension points, identical inputs give bit-identical results.
//! Callers may run any number of selections concurrently against a shared
//! schema.

use crate::report::{AmbiguousReport, NoMatchReport};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use variax_core::errors::{VxError, VxErrorKind};
use variax_core::model::{AttributeContainer, CandidateVariant};
use variax_core::rules::{disambiguate, filter_compatible};
use variax_core::schema::AttributeSchema;
use variax_core::{log_op_end, log_op_error, log_op_start};
use variax_core_types::schema::{OUTCOME_AMBIGUOUS, OUTCOME_NO_MATCH, OUTCOME_SELECTED};

/// A node-local resolution request from the graph resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// The consumer's requested attributes
    pub requested: AttributeContainer,
    /// The producer variants on offer, with stable caller-owned identifiers
    pub candidates: Vec<CandidateVariant>,
}

impl SelectionRequest {
    /// Create a new selection request
    pub fn new(requested: AttributeContainer, candidates: Vec<CandidateVariant>) -> Self {
        Self {
            requested,
            candidates,
        }
    }
}

/// Terminal outcome of a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionResult {
    /// Exactly one variant satisfied the request
    Selected(CandidateVariant),
    /// No candidate satisfied every requested attribute
    NoMatch(NoMatchReport),
    /// More than one candidate survived the full precedence order
    Ambiguous(AmbiguousReport),
}

impl SelectionResult {
    /// The selected variant, if resolution succeeded
    pub fn selected(&self) -> Option<&CandidateVariant> {
        match self {
            SelectionResult::Selected(v) => Some(v),
            _ => None,
        }
    }

    /// Whether resolution succeeded
    pub fn is_selected(&self) -> bool {
        matches!(self, SelectionResult::Selected(_))
    }

    /// Canonical outcome tag for structured logging
    pub fn outcome_label(&self) -> &'static str {
        match self {
            SelectionResult::Selected(_) => OUTCOME_SELECTED,
            SelectionResult::NoMatch(_) => OUTCOME_NO_MATCH,
            SelectionResult::Ambiguous(_) => OUTCOME_AMBIGUOUS,
        }
    }
}

/// Select exactly one variant for `request`, or diagnose why that is
/// impossible.
///
/// # Errors
///
/// `VxErrorKind::NoCandidates` if the request carries an empty candidate
/// list. That is a caller contract violation, distinct from the `NoMatch`
/// resolution outcome; supplying zero candidates means the caller's graph
/// traversal is broken, not that the content failed to match.
#[allow(clippy::result_large_err)]
pub fn select(
    schema: &AttributeSchema,
    request: &SelectionRequest,
) -> Result<SelectionResult, VxError> {
    let started = Instant::now();
    log_op_start!("select", candidate_count = request.candidates.len() as u64);

    if request.candidates.is_empty() {
        let err = VxError::new(VxErrorKind::NoCandidates)
            .with_op("select")
            .with_message("candidate list must be non-empty");
        log_op_error!(
            "select",
            err.clone(),
            duration_ms = started.elapsed().as_millis() as u64
        );
        return Err(err);
    }

    let filtered = filter_compatible(&request.requested, &request.candidates, schema);

    let result = match filtered.compatible.len() {
        0 => SelectionResult::NoMatch(NoMatchReport::new(
            request.requested.clone(),
            filtered.rejections,
        )),
        1 => SelectionResult::Selected(filtered.compatible[0].clone()),
        _ => {
            let narrowed = disambiguate(&filtered.compatible, schema);
            if narrowed.survivors.len() == 1 {
                SelectionResult::Selected(narrowed.survivors[0].clone())
            } else {
                SelectionResult::Ambiguous(AmbiguousReport::new(
                    request.requested.clone(),
                    narrowed.survivors,
                    narrowed.trace,
                ))
            }
        }
    };

    log_op_end!(
        "select",
        duration_ms = started.elapsed().as_millis() as u64,
        outcome = result.outcome_label(),
        candidate_count = request.candidates.len() as u64
    );
    Ok(result)
}
