use crate::model::AttributeValueKind;
use thiserror::Error;
use variax_core_types::{RequestId, TraceId};

/// Result type alias using VariaxError
pub type Result<T> = std::result::Result<T, VariaxError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the VariaX engine. Each kind maps to a stable error code that can be
/// used for programmatic error handling, testing, and external API responses.
///
/// Note that `NoMatch` and `Ambiguous` selection outcomes are NOT errors:
/// they are terminal values of the selection state machine and travel as
/// `SelectionResult` variants. Only contract violations and setup
/// misconfigurations appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VxErrorKind {
    // Caller contract violations
    InvalidInput,
    /// Empty candidate list supplied to `select` (programming error,
    /// distinct from a NoMatch resolution failure)
    NoCandidates,

    // Schema misconfiguration (setup time)
    /// Same attribute name registered twice with different value kinds
    DuplicateAttribute,
    /// Precedence order references an attribute that was never registered
    UnknownAttribute,

    // Internal
    /// An invariant the engine relies on for reproducible output was broken
    DeterminismViolation,
    Serialization,
    Internal,
}

impl VxErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            VxErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            VxErrorKind::NoCandidates => "ERR_NO_CANDIDATES",
            VxErrorKind::DuplicateAttribute => "ERR_DUPLICATE_ATTRIBUTE",
            VxErrorKind::UnknownAttribute => "ERR_UNKNOWN_ATTRIBUTE",
            VxErrorKind::DeterminismViolation => "ERR_DETERMINISM_VIOLATION",
            VxErrorKind::Serialization => "ERR_SERIALIZATION",
            VxErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Provides a structured representation of errors with classification fields
/// for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct VxError {
    kind: VxErrorKind,
    op: Option<String>,
    attribute: Option<String>,
    candidate_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    candidates: Option<Vec<String>>,
}

impl VxError {
    /// Create a new error with the specified kind
    pub fn new(kind: VxErrorKind) -> Self {
        Self {
            kind,
            op: None,
            attribute: None,
            candidate_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            candidates: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add attribute name context
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attribute = Some(name.into());
        self
    }

    /// Add candidate identifier context
    pub fn with_candidate_id(mut self, id: impl Into<String>) -> Self {
        self.candidate_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add candidate ids (carried by NoCandidates/ambiguity-adjacent contexts)
    pub fn with_candidates(mut self, ids: Vec<String>) -> Self {
        self.candidates = Some(ids);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> VxErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the attribute name context, if any
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// Get the candidate identifier context, if any
    pub fn candidate_id(&self) -> Option<&str> {
        self.candidate_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get candidate ids, if any
    pub fn candidates(&self) -> Option<&[String]> {
        self.candidates.as_deref()
    }
}

impl std::fmt::Display for VxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(attribute) = &self.attribute {
            write!(f, " (attribute: {})", attribute)?;
        }
        if let Some(candidate_id) = &self.candidate_id {
            write!(f, " (candidate_id: {})", candidate_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for VxError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for VariaX operations
///
/// These are the failures a caller can hit before a selection has an
/// outcome: contract violations and schema misconfiguration. Resolution
/// outcomes (`NoMatch`, `Ambiguous`) live in `SelectionResult`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VariaxError {
    /// Empty candidate list supplied (caller contract violation)
    #[error("No candidates supplied to {op}: candidate list must be non-empty")]
    NoCandidates { op: String },

    /// Attribute registered twice with conflicting value kinds
    #[error("Attribute '{name}' already registered with kind {existing_kind}, cannot re-register with kind {requested_kind}")]
    DuplicateAttribute {
        name: String,
        existing_kind: AttributeValueKind,
        requested_kind: AttributeValueKind,
    },

    /// Precedence order references an unregistered attribute
    #[error("Unknown attribute in precedence order: {name}")]
    UnknownAttribute { name: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from VariaxError to the canonical facility
impl From<VariaxError> for VxError {
    fn from(err: VariaxError) -> Self {
        match err {
            VariaxError::NoCandidates { op } => VxError::new(VxErrorKind::NoCandidates)
                .with_op(op)
                .with_message("candidate list must be non-empty"),

            VariaxError::DuplicateAttribute {
                name,
                existing_kind,
                requested_kind,
            } => VxError::new(VxErrorKind::DuplicateAttribute)
                .with_attribute(name)
                .with_op("register_attribute")
                .with_message(format!(
                    "already registered with kind {}, now {}",
                    existing_kind, requested_kind
                )),

            VariaxError::UnknownAttribute { name } => {
                VxError::new(VxErrorKind::UnknownAttribute)
                    .with_attribute(name)
                    .with_message("precedence order names an unregistered attribute")
            }

            VariaxError::Serialization { message } => {
                VxError::new(VxErrorKind::Serialization).with_message(message)
            }

            VariaxError::Internal { message } => {
                VxError::new(VxErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to VariaxError
impl From<serde_json::Error> for VariaxError {
    fn from(err: serde_json::Error) -> Self {
        VariaxError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (VxErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (VxErrorKind::NoCandidates, "ERR_NO_CANDIDATES"),
            (VxErrorKind::DuplicateAttribute, "ERR_DUPLICATE_ATTRIBUTE"),
            (VxErrorKind::UnknownAttribute, "ERR_UNKNOWN_ATTRIBUTE"),
            (
                VxErrorKind::DeterminismViolation,
                "ERR_DETERMINISM_VIOLATION",
            ),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_vx_error_carries_builder_context() {
        let err = VxError::new(VxErrorKind::DuplicateAttribute)
            .with_op("register_attribute")
            .with_attribute("color")
            .with_message("already registered");

        assert_eq!(err.kind(), VxErrorKind::DuplicateAttribute);
        assert_eq!(err.op(), Some("register_attribute"));
        assert_eq!(err.attribute(), Some("color"));
        assert_eq!(err.message(), "already registered");
    }

    #[test]
    fn test_vx_error_candidates_field() {
        let err = VxError::new(VxErrorKind::NoCandidates)
            .with_candidates(vec!["v:a".into(), "v:b".into()]);
        let candidates = err.candidates().expect("candidates should be Some");
        assert_eq!(candidates, &["v:a".to_string(), "v:b".to_string()]);
    }

    #[test]
    fn test_vx_error_candidates_none_by_default() {
        let err = VxError::new(VxErrorKind::InvalidInput);
        assert!(err.candidates().is_none());
    }

    #[test]
    fn test_display_includes_code_op_and_context() {
        let err = VxError::new(VxErrorKind::NoCandidates)
            .with_op("select")
            .with_message("candidate list must be non-empty");
        let s = err.to_string();
        assert!(s.contains("ERR_NO_CANDIDATES"));
        assert!(s.contains("'select'"));
        assert!(s.contains("non-empty"));
    }

    #[test]
    fn test_domain_error_conversion_maps_kinds() {
        let err: VxError = VariaxError::NoCandidates {
            op: "select".to_string(),
        }
        .into();
        assert_eq!(err.kind(), VxErrorKind::NoCandidates);
        assert_eq!(err.op(), Some("select"));

        let err: VxError = VariaxError::DuplicateAttribute {
            name: "level".to_string(),
            existing_kind: AttributeValueKind::Token,
            requested_kind: AttributeValueKind::Ordinal,
        }
        .into();
        assert_eq!(err.kind(), VxErrorKind::DuplicateAttribute);
        assert_eq!(err.attribute(), Some("level"));
    }
}
