//! Event records, source registry, and listener dispatch for flightrec.
//!
//! This crate provides:
//! - [`Event`]: a validated, immutable record of one occurrence with lazy
//!   module attribution
//! - [`Source`]: a named, de-duplicated emission endpoint
//! - [`Listen`]/[`Listener`]: the two-tier listener chain with veto
//!   ("ignore") semantics
//! - [`Hub`]: the composition root owning the source registry, the global
//!   listener tier, and the master event log
//!
//! Core invariants:
//! - Events are mutable only during construction; once dispatch accepts an
//!   event it is frozen and appended to the master log, permanently immutable
//! - A vetoing listener stops all later listeners (both tiers) and suppresses
//!   the master-log append
//! - Source-tier listeners always observe an event strictly before global
//!   listeners, each tier in registration order
//! - At most one source exists per identifier; re-registration with matching
//!   name and description is idempotent
//! - Module attribution is computed at most once per event, from its trace,
//!   through the injected [`Symbolicate`] collaborator
//!
//! ## Quick Start
//!
//! ```rust
//! use flightrec_hub::{Hub, Severity};
//!
//! let hub = Hub::new();
//! let console = hub.register_source("console", "Console", "Console messages")?;
//!
//! // Veto events below WARNING at the source tier.
//! console.subscribe("my-filter".into(), |ev: &flightrec_hub::Event| {
//!     ev.severity() >= Severity::Warning
//! })?;
//!
//! assert!(console.emit("boom", "", Severity::Error)?);
//! assert!(!console.emit("chatter", "", Severity::Debug)?);
//! assert_eq!(hub.event_count()?, 1);
//! # Ok::<(), flightrec_hub::HubError>(())
//! ```

#![deny(missing_docs)]

/// Error types for registry and dispatch operations.
pub mod errors;
/// Validated, immutable event records.
pub mod event;
/// Hub: registry, global listener tier, and master log.
pub mod hub;
/// Listener trait, bound listeners, and ordered listener sets.
pub mod listener;
/// Named emission endpoints.
pub mod source;

pub use errors::HubError;
pub use event::{Event, EventFields, EventSnapshot};
pub use hub::{Hub, HubBuilder};
pub use listener::{Listen, Listener};
pub use source::Source;

pub use flightrec_core::{
    InternalError, ModuleId, NullSymbolicator, Severity, SeverityKey, SourceId, Symbolicate,
    ValidationError,
};
