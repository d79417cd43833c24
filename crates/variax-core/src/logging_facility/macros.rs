//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log selection
//! operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use variax_core::log_op_start;
/// log_op_start!("select");
/// log_op_start!("select", candidate_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = variax_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = variax_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use variax_core::log_op_end;
/// log_op_end!("select", duration_ms = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = variax_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = variax_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```ignore
/// # use variax_core::{log_op_error, errors::VariaxError};
/// let err = VariaxError::NoCandidates { op: "select".to_string() };
/// log_op_error!("select", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::VxError;
        let vx_err: VxError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = variax_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?vx_err.kind(),
            err_code = vx_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::VxError;
        let vx_err: VxError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = variax_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?vx_err.kind(),
            err_code = vx_err.code(),
            $($field)*
        );
    }};
}
