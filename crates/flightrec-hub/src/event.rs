use once_cell::sync::OnceCell;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use flightrec_core::{trace, ModuleId, Severity, SourceId, Symbolicate, ValidationError};

use crate::errors::HubError;
use crate::source::Source;

/// Structured construction fields for an event.
///
/// This is the structured entry point; [`Source::emit`] covers the common
/// positional shorthand. Every field except `message` may be left at its
/// default.
#[derive(Debug, Clone, Default)]
pub struct EventFields {
    /// Event message; required, non-empty.
    pub message: String,
    /// Free-form details; empty if omitted.
    pub details: String,
    /// Severity; [`Severity::Notset`] if omitted.
    pub severity: Severity,
    /// Symbol substring anchoring trace capture: frames up to and including
    /// the last match are excluded. Without an anchor, the recorder's own
    /// frames are excluded.
    pub anchor: Option<String>,
    /// Pre-captured trace text; captured from the current stack if `None`.
    pub trace: Option<String>,
    /// Opaque caller-supplied association (e.g., affected user identifiers).
    /// Passed through unvalidated.
    pub users: Option<serde_json::Value>,
    /// Eagerly supplied module attribution; derived lazily from the trace
    /// if `None`.
    pub modules: Option<Vec<ModuleId>>,
}

impl EventFields {
    /// Fields for the common positional shorthand.
    pub fn positional(
        message: impl Into<String>,
        details: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            message: message.into(),
            details: details.into(),
            severity,
            ..Self::default()
        }
    }
}

/// A validated, immutable record of one occurrence.
///
/// Created by [`Source::emit`] and consumed by the listener chain. An
/// event is mutable only during construction; if no listener vetoes it,
/// dispatch freezes it and appends it to the master log, after which it is
/// permanently immutable. A vetoed event is dropped.
///
/// The event holds a back-reference to its emitting source; it never owns
/// the source.
pub struct Event {
    source: Arc<Source>,
    message: String,
    details: String,
    severity: Severity,
    trace: String,
    users: Option<serde_json::Value>,
    modules: OnceCell<Vec<ModuleId>>,
    symbolicator: Arc<dyn Symbolicate>,
    frozen: OnceCell<()>,
}

impl Event {
    /// Constructs and validates an event scoped to `source`.
    ///
    /// No listener is invoked during construction. If no trace was
    /// supplied, one is captured synchronously from the current stack with
    /// the recorder's own frames excluded.
    pub(crate) fn new(
        source: Arc<Source>,
        symbolicator: Arc<dyn Symbolicate>,
        fields: EventFields,
    ) -> Result<Self, HubError> {
        if fields.message.is_empty() {
            return Err(ValidationError::EmptyField { field: "message" }.into());
        }

        let trace = match fields.trace {
            Some(trace) => trace,
            None => trace::capture(fields.anchor.as_deref())?,
        };

        let modules = OnceCell::new();
        if let Some(eager) = fields.modules {
            let _ = modules.set(eager);
        }

        Ok(Self {
            source,
            message: fields.message,
            details: fields.details,
            severity: fields.severity,
            trace,
            users: fields.users,
            modules,
            symbolicator,
            frozen: OnceCell::new(),
        })
    }

    /// The source that emitted this event.
    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    /// The event message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Free-form details; empty if none were supplied.
    pub fn details(&self) -> &str {
        &self.details
    }

    /// The event severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The captured or supplied stack trace.
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// The opaque caller-supplied association, if any.
    pub fn users(&self) -> Option<&serde_json::Value> {
        self.users.as_ref()
    }

    /// The ordered list of modules implicated by this event.
    ///
    /// Computed from the trace through the symbolication collaborator on
    /// first read, then cached; the collaborator is called at most once
    /// per event. Eagerly supplied modules are used verbatim.
    pub fn modules(&self) -> &[ModuleId] {
        self.modules
            .get_or_init(|| self.symbolicator.collect_all(&self.trace))
            .as_slice()
    }

    /// Whether this event has been accepted by dispatch and frozen.
    pub fn is_frozen(&self) -> bool {
        self.frozen.get().is_some()
    }

    /// Freezes the event after every listener accepted it.
    ///
    /// Resolves the modules cell first if it has not been read yet, so the
    /// record never changes after this point.
    pub(crate) fn freeze(&self) {
        let _ = self.modules();
        let _ = self.frozen.set(());
    }

    /// A serializable copy of the record, with modules resolved.
    pub fn snapshot(&self) -> EventSnapshot {
        EventSnapshot {
            source: self.source.id().clone(),
            message: self.message.clone(),
            details: self.details.clone(),
            severity: self.severity,
            trace: self.trace.clone(),
            users: self.users.clone(),
            modules: self.modules().to_vec(),
        }
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("source", self.source.id())
            .field("message", &self.message)
            .field("details", &self.details)
            .field("severity", &self.severity)
            .field("users", &self.users)
            .field("modules", &self.modules.get())
            .field("frozen", &self.is_frozen())
            .finish_non_exhaustive()
    }
}

/// Serializable view of an [`Event`], suitable for export to viewers.
#[derive(Debug, Clone, Serialize)]
pub struct EventSnapshot {
    /// Identifier of the emitting source.
    pub source: SourceId,
    /// Event message.
    pub message: String,
    /// Free-form details.
    pub details: String,
    /// Event severity.
    pub severity: Severity,
    /// Stack-trace text.
    pub trace: String,
    /// Opaque caller-supplied association, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<serde_json::Value>,
    /// Resolved module attribution.
    pub modules: Vec<ModuleId>,
}
