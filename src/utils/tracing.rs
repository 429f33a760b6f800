//! Tracing helpers shared across modules.

/// Log an audit event at INFO level
///
/// Use this for data modifications: creating, moving, and deleting students.
///
/// # Example
/// ```ignore
/// audit_event!("delete", "student", student.id = id);
/// ```
#[macro_export]
macro_rules! audit_event {
    ($action:expr, $resource:expr, $($field:tt)*) => {
        tracing::info!(
            audit.action = $action,
            audit.resource = $resource,
            $($field)*
        )
    };
}

/// Trait extension for logging errors before propagating them
pub trait ErrorExt {
    /// Log the error and return it unchanged
    fn log_error(self, context: &str) -> Self;
}

impl<T, E: std::fmt::Display> ErrorExt for Result<T, E> {
    fn log_error(self, context: &str) -> Self {
        if let Err(ref e) = self {
            tracing::error!(error = %e, context = context, "Operation failed");
        }
        self
    }
}
