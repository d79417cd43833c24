//! VariaX Core - Attribute-based variant selection primitives
//!
//! This crate provides the foundational data structures and evaluators for
//! VariaX, including:
//! - Attribute, value and container models with immutable semantics
//! - The attribute schema registry with per-attribute rule strategies
//! - The compatibility evaluator (candidate filtering with full mismatch capture)
//! - The disambiguation engine (precedence-ordered tie-breaking with trace)
//! - Canonical error and logging facilities
//!
//! The selection orchestrator that composes these evaluators into the full
//! `select()` algorithm lives in `variax-engine`.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;
pub mod schema;

// Re-export commonly used types
pub use errors::{Result, VariaxError, VxError, VxErrorKind};
pub use model::{Attribute, AttributeContainer, AttributeValue, AttributeValueKind, CandidateVariant};
pub use rules::{
    disambiguate, filter_compatible, AttributeMismatch, CandidateRejection, Compatibility,
    CompatibilityOutcome, DisambiguationOutcome, DisambiguationStep,
};
pub use schema::{AttributeSchema, AttributeSchemaBuilder, CompatibilityRule, DisambiguationRule};
