use std::fmt;
use std::sync::{Arc, Weak};

use flightrec_core::{InternalError, ModuleId, Severity, SourceId};

use crate::errors::HubError;
use crate::event::{Event, EventFields};
use crate::hub::HubShared;
use crate::listener::{Listen, Listener, ListenerSet};

/// A named emission endpoint.
///
/// Sources are created by [`Hub::register_source`](crate::Hub::register_source),
/// live as long as their hub, and are never removed. Each source carries
/// its own ordered listener tier, consulted before the global tier during
/// dispatch.
pub struct Source {
    id: SourceId,
    name: String,
    description: String,
    listeners: ListenerSet,
    hub: Weak<HubShared>,
}

impl Source {
    pub(crate) fn new(
        id: SourceId,
        name: String,
        description: String,
        hub: Weak<HubShared>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            listeners: ListenerSet::new(),
            hub,
        }
    }

    /// The unique, normalized source identifier.
    pub fn id(&self) -> &SourceId {
        &self.id
    }

    /// The human-readable source name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Appends a source-scoped listener, observed from the next dispatch on.
    pub fn subscribe<L>(&self, package: ModuleId, handler: L) -> Result<(), HubError>
    where
        L: Listen + 'static,
    {
        self.listeners.subscribe(package, handler)?;
        Ok(())
    }

    /// Emits an event with the positional shorthand.
    ///
    /// Constructs and validates the event, then hands it to the listener
    /// chain. Returns `Ok(true)` if the event was accepted and appended to
    /// the master log, `Ok(false)` if a listener vetoed it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flightrec_hub::{Hub, Severity};
    ///
    /// let hub = Hub::new();
    /// let src = hub.register_source("console", "Console", "Console messages")?;
    /// assert!(src.emit("boom", "", Severity::Error)?);
    /// # Ok::<(), flightrec_hub::HubError>(())
    /// ```
    pub fn emit(
        self: &Arc<Self>,
        message: impl Into<String>,
        details: impl Into<String>,
        severity: Severity,
    ) -> Result<bool, HubError> {
        self.emit_fields(EventFields::positional(message, details, severity))
    }

    /// Emits with a caller-supplied trace anchor.
    ///
    /// The captured trace excludes every frame up to and including the
    /// last one whose symbol contains `anchor`, letting adapters hide
    /// their own forwarding frames.
    pub fn emit_anchored(
        self: &Arc<Self>,
        message: impl Into<String>,
        details: impl Into<String>,
        severity: Severity,
        anchor: impl Into<String>,
    ) -> Result<bool, HubError> {
        let mut fields = EventFields::positional(message, details, severity);
        fields.anchor = Some(anchor.into());
        self.emit_fields(fields)
    }

    /// Emits an event from structured fields.
    pub fn emit_fields(self: &Arc<Self>, fields: EventFields) -> Result<bool, HubError> {
        let hub = self.hub.upgrade().ok_or(InternalError::HubGone)?;
        let event = Event::new(Arc::clone(self), hub.symbolicator(), fields)?;
        hub.dispatch(event)
    }

    pub(crate) fn listeners_snapshot(&self) -> Result<Vec<Listener>, InternalError> {
        self.listeners.snapshot()
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
