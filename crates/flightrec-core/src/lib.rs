//! Primitives shared across the flightrec event recorder.
//!
//! This crate provides:
//! - The ordered [`Severity`] enumeration with by-name and by-rank lookup
//! - Validated identifier newtypes ([`SourceId`], [`ModuleId`])
//! - The error taxonomy split between caller misuse ([`ValidationError`])
//!   and library invariant violations ([`InternalError`])
//! - Synchronous stack-trace capture with frame trimming
//! - The [`Symbolicate`] boundary for deriving module attribution from
//!   captured trace text
//!
//! Core invariants:
//! - Severity lookup never fails; unknown keys resolve to a caller-supplied
//!   default
//! - Source identifiers are case-insensitive and normalized at parse time
//! - Captured traces never contain flightrec's own frames
//!
#![deny(missing_docs)]

/// Error types for validation and internal invariant violations.
pub mod errors;
/// Identifier newtypes for sources and modules.
pub mod identifiers;
/// Ordered severity levels with lookup helpers.
pub mod severity;
/// Symbolication boundary for module attribution.
pub mod symbolicate;
/// Stack-trace capture and frame trimming.
pub mod trace;

pub use errors::{InternalError, ValidationError};
pub use identifiers::{ModuleId, SourceId};
pub use severity::{Severity, SeverityKey};
pub use symbolicate::{NullSymbolicator, Symbolicate};
pub use trace::{capture, trim_frames};
