use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered severity levels for diagnostic events.
///
/// Each level carries a fixed numeric rank used only for ordering and
/// lookup, never for arithmetic. The total order follows the ranks:
/// `Notset < Debug < Info < Warning < Error < Critical`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No severity assigned (rank 0). The default.
    #[default]
    Notset,
    /// Diagnostic detail (rank 100).
    Debug,
    /// Informational (rank 200).
    Info,
    /// Something unexpected but recoverable (rank 300).
    Warning,
    /// A failure (rank 400).
    Error,
    /// A failure that compromises the process (rank 500).
    Critical,
}

/// All severity levels in ascending rank order.
const ALL: [Severity; 6] = [
    Severity::Notset,
    Severity::Debug,
    Severity::Info,
    Severity::Warning,
    Severity::Error,
    Severity::Critical,
];

impl Severity {
    /// Returns the numeric rank of this level.
    pub fn rank(&self) -> u16 {
        match self {
            Severity::Notset => 0,
            Severity::Debug => 100,
            Severity::Info => 200,
            Severity::Warning => 300,
            Severity::Error => 400,
            Severity::Critical => 500,
        }
    }

    /// Looks up a level by exact numeric rank.
    pub fn from_rank(rank: u16) -> Option<Severity> {
        ALL.iter().copied().find(|s| s.rank() == rank)
    }

    /// Looks up a level by symbolic name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Severity> {
        ALL.iter().copied().find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Resolves a level from a name or rank key, falling back to `default`.
    ///
    /// Never fails: unknown keys map to the supplied default rather than
    /// an error, so a misclassified severity cannot drop an event.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flightrec_core::Severity;
    ///
    /// assert_eq!(Severity::resolve("warning", Severity::Notset), Severity::Warning);
    /// assert_eq!(Severity::resolve(400, Severity::Notset), Severity::Error);
    /// assert_eq!(Severity::resolve("bogus", Severity::Notset), Severity::Notset);
    /// ```
    pub fn resolve<'a>(key: impl Into<SeverityKey<'a>>, default: Severity) -> Severity {
        match key.into() {
            SeverityKey::Name(name) => Severity::from_name(name),
            SeverityKey::Rank(rank) => Severity::from_rank(rank),
        }
        .unwrap_or(default)
    }

    /// Returns the upper-case symbolic name of this level.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Notset => "NOTSET",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookup key for [`Severity::resolve`]: either a symbolic name or a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityKey<'a> {
    /// Symbolic name, matched case-insensitively.
    Name(&'a str),
    /// Exact numeric rank.
    Rank(u16),
}

impl<'a> From<&'a str> for SeverityKey<'a> {
    fn from(name: &'a str) -> Self {
        SeverityKey::Name(name)
    }
}

impl From<u16> for SeverityKey<'_> {
    fn from(rank: u16) -> Self {
        SeverityKey::Rank(rank)
    }
}
