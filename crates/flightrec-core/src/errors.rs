use thiserror::Error;

/// Errors raised for malformed caller input.
///
/// These are raised synchronously at the call site and never retried.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a required textual field is empty.
    #[error("{field} must be non-empty")]
    EmptyField {
        /// Field name that was empty.
        field: &'static str,
    },
}

/// Invariant violations the library itself should never produce.
///
/// These are fatal to the current construction or dispatch call and are
/// never caught internally.
#[derive(Debug, Error)]
pub enum InternalError {
    /// Stack-trace capture produced no usable text.
    #[error("stack trace capture produced no usable text")]
    TraceCapture,
    /// A shared structure's lock was poisoned by a panicking thread.
    #[error("lock poisoned: {what}")]
    LockPoisoned {
        /// The structure whose lock was poisoned.
        what: &'static str,
    },
    /// A source outlived the hub it was registered with.
    #[error("source outlived its hub")]
    HubGone,
}
