use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use flightrec_core::{
    InternalError, ModuleId, NullSymbolicator, SourceId, Symbolicate, ValidationError,
};

use crate::errors::HubError;
use crate::event::Event;
use crate::listener::{Listen, ListenerSet};
use crate::source::Source;

/// Process-scoped state shared between a hub and its sources.
pub(crate) struct HubShared {
    sources: RwLock<HashMap<SourceId, Arc<Source>>>,
    globals: ListenerSet,
    log: RwLock<Vec<Arc<Event>>>,
    symbolicator: Arc<dyn Symbolicate>,
}

impl HubShared {
    pub(crate) fn symbolicator(&self) -> Arc<dyn Symbolicate> {
        Arc::clone(&self.symbolicator)
    }

    /// Runs the two-tier dispatch protocol for a freshly constructed event.
    ///
    /// Listener tiers are iterated over snapshots taken at entry, so
    /// subscription during dispatch cannot corrupt the iteration. A `false`
    /// return from any listener vetoes the event: no later listener runs
    /// and nothing is appended. Otherwise the event is frozen and appended
    /// to the master log.
    pub(crate) fn dispatch(&self, event: Event) -> Result<bool, HubError> {
        let event = Arc::new(event);

        for listener in event.source().listeners_snapshot()? {
            if !listener.on_event(&event) {
                return Ok(false);
            }
        }
        for listener in self.globals.snapshot()? {
            if !listener.on_event(&event) {
                return Ok(false);
            }
        }

        event.freeze();
        let mut log = self
            .log
            .write()
            .map_err(|_| InternalError::LockPoisoned { what: "master log" })?;
        log.push(event);
        Ok(true)
    }
}

/// Composition root for one isolated recorder instance.
///
/// Owns the source registry, the global listener tier, the master event
/// log, and the symbolication collaborator. Multiple hubs may coexist in
/// one process; each is fully isolated from the others.
pub struct Hub {
    shared: Arc<HubShared>,
}

impl Hub {
    /// Creates a hub with no symbolication collaborator.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a hub.
    pub fn builder() -> HubBuilder {
        HubBuilder::default()
    }

    /// Registers a source, or returns the existing one under this id.
    ///
    /// Registration is idempotent: if a source already exists under `id`,
    /// the existing instance is returned unless **both** its name and its
    /// description differ from the arguments, in which case
    /// [`HubError::DuplicateSource`] is raised.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::PatternMismatch`] if `id` is not `[A-Za-z0-9_-]+`
    /// - [`ValidationError::EmptyField`] if `name` or `description` is empty
    /// - [`HubError::DuplicateSource`] per the policy above
    pub fn register_source(
        &self,
        id: &str,
        name: &str,
        description: &str,
    ) -> Result<Arc<Source>, HubError> {
        let id = SourceId::parse(id)?;
        if name.is_empty() {
            return Err(ValidationError::EmptyField { field: "name" }.into());
        }
        if description.is_empty() {
            return Err(ValidationError::EmptyField { field: "description" }.into());
        }

        let mut sources = self
            .shared
            .sources
            .write()
            .map_err(|_| InternalError::LockPoisoned { what: "source registry" })?;

        if let Some(existing) = sources.get(&id) {
            if existing.name() != name && existing.description() != description {
                return Err(HubError::DuplicateSource { id });
            }
            return Ok(Arc::clone(existing));
        }

        let source = Arc::new(Source::new(
            id.clone(),
            name.to_string(),
            description.to_string(),
            Arc::downgrade(&self.shared),
        ));
        sources.insert(id, Arc::clone(&source));
        Ok(source)
    }

    /// Looks up a registered source by id.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::PatternMismatch`] if `id` is malformed
    /// - [`HubError::SourceNotFound`] if nothing is registered under `id`
    pub fn source(&self, id: &str) -> Result<Arc<Source>, HubError> {
        let id = SourceId::parse(id)?;
        let sources = self
            .shared
            .sources
            .read()
            .map_err(|_| InternalError::LockPoisoned { what: "source registry" })?;
        sources
            .get(&id)
            .cloned()
            .ok_or(HubError::SourceNotFound { id })
    }

    /// Number of registered sources.
    pub fn source_count(&self) -> Result<usize, HubError> {
        let sources = self
            .shared
            .sources
            .read()
            .map_err(|_| InternalError::LockPoisoned { what: "source registry" })?;
        Ok(sources.len())
    }

    /// Appends a global listener, consulted after every source tier.
    pub fn subscribe_global<L>(&self, package: ModuleId, handler: L) -> Result<(), HubError>
    where
        L: Listen + 'static,
    {
        self.shared.globals.subscribe(package, handler)?;
        Ok(())
    }

    /// An ordered snapshot of the master event log.
    ///
    /// The log is unbounded and append-only; every event in it is frozen.
    pub fn events(&self) -> Result<Vec<Arc<Event>>, HubError> {
        let log = self
            .shared
            .log
            .read()
            .map_err(|_| InternalError::LockPoisoned { what: "master log" })?;
        Ok(log.clone())
    }

    /// Number of accepted events in the master log.
    pub fn event_count(&self) -> Result<usize, HubError> {
        let log = self
            .shared
            .log
            .read()
            .map_err(|_| InternalError::LockPoisoned { what: "master log" })?;
        Ok(log.len())
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Hub`].
pub struct HubBuilder {
    symbolicator: Arc<dyn Symbolicate>,
}

impl Default for HubBuilder {
    fn default() -> Self {
        Self {
            symbolicator: Arc::new(NullSymbolicator),
        }
    }
}

impl HubBuilder {
    /// Injects the symbolication collaborator used for module attribution.
    pub fn symbolicator(mut self, symbolicator: Arc<dyn Symbolicate>) -> Self {
        self.symbolicator = symbolicator;
        self
    }

    /// Builds the hub.
    pub fn build(self) -> Hub {
        Hub {
            shared: Arc::new(HubShared {
                sources: RwLock::new(HashMap::new()),
                globals: ListenerSet::new(),
                log: RwLock::new(Vec::new()),
                symbolicator: self.symbolicator,
            }),
        }
    }
}
