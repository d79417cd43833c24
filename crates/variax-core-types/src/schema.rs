//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Selection identifiers
pub const FIELD_ATTRIBUTE: &str = "attribute";
pub const FIELD_CANDIDATE_ID: &str = "candidate_id";

// Collection sizes
pub const FIELD_CANDIDATE_COUNT: &str = "candidate_count";
pub const FIELD_COMPATIBLE_COUNT: &str = "compatible_count";
pub const FIELD_SURVIVOR_COUNT: &str = "survivor_count";

// Selection outcome tag (selected / no_match / ambiguous)
pub const FIELD_OUTCOME: &str = "outcome";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical outcome values
pub const OUTCOME_SELECTED: &str = "selected";
pub const OUTCOME_NO_MATCH: &str = "no_match";
pub const OUTCOME_AMBIGUOUS: &str = "ambiguous";
