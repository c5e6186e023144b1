use flightrec_core::{InternalError, SourceId, ValidationError};
use thiserror::Error;

/// Errors raised by the registry and the dispatch protocol.
///
/// All variants are raised synchronously and propagate to the immediate
/// caller; the recorder performs no retries and no silent recovery beyond
/// the two documented permissive degradations (severity defaulting and
/// idempotent duplicate registration).
#[derive(Debug, Error)]
pub enum HubError {
    /// Malformed caller input to event or source construction.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    /// An invariant violation inside the recorder.
    #[error("internal error: {0}")]
    Internal(#[from] InternalError),
    /// A source with this id exists under a different name and description.
    #[error("source '{id}' is already registered with a different name and description")]
    DuplicateSource {
        /// The contested identifier.
        id: SourceId,
    },
    /// No source is registered under this id.
    #[error("source '{id}' does not exist")]
    SourceNotFound {
        /// The identifier that was looked up.
        id: SourceId,
    },
}
