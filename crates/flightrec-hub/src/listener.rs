use std::fmt;
use std::sync::{Arc, RwLock};

use flightrec_core::{InternalError, ModuleId};

use crate::event::Event;

/// A registered event handler.
///
/// Returning `true` lets propagation continue; returning `false` vetoes
/// the event: no later listener (in this tier or the global tier) observes
/// it and it is never appended to the master log.
///
/// Implemented for any `Fn(&Event) -> bool + Send + Sync` closure.
pub trait Listen: Send + Sync {
    /// Observes one event; `false` vetoes further propagation.
    fn on_event(&self, event: &Event) -> bool;
}

impl<F> Listen for F
where
    F: Fn(&Event) -> bool + Send + Sync,
{
    fn on_event(&self, event: &Event) -> bool {
        self(event)
    }
}

/// A handler bound to the package that registered it.
///
/// Immutable once constructed. The package binding exists for attribution;
/// no unsubscription operation is defined.
#[derive(Clone)]
pub struct Listener {
    package: ModuleId,
    handler: Arc<dyn Listen>,
}

impl Listener {
    pub(crate) fn new(package: ModuleId, handler: Arc<dyn Listen>) -> Self {
        Self { package, handler }
    }

    /// The package that registered this listener.
    pub fn package(&self) -> &ModuleId {
        &self.package
    }

    pub(crate) fn on_event(&self, event: &Event) -> bool {
        self.handler.on_event(event)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("package", &self.package)
            .finish_non_exhaustive()
    }
}

/// An append-only, ordered sequence of listeners.
///
/// Dispatch iterates a snapshot of the sequence, so subscribing while a
/// dispatch is in flight cannot corrupt it; the new listener is observed
/// from the next dispatch on.
#[derive(Debug, Default)]
pub(crate) struct ListenerSet {
    inner: RwLock<Vec<Listener>>,
}

impl ListenerSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a listener; registration order is dispatch order.
    pub(crate) fn subscribe<L>(&self, package: ModuleId, handler: L) -> Result<(), InternalError>
    where
        L: Listen + 'static,
    {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| InternalError::LockPoisoned { what: "listener set" })?;
        inner.push(Listener::new(package, Arc::new(handler)));
        Ok(())
    }

    /// Returns the current listeners in registration order.
    pub(crate) fn snapshot(&self) -> Result<Vec<Listener>, InternalError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| InternalError::LockPoisoned { what: "listener set" })?;
        Ok(inner.clone())
    }
}
