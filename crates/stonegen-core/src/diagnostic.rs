//! Non-fatal generator diagnostics
//!
//! A generation run never stops for a single bad type or route. Each problem is
//! logged through `tracing` and recorded here so callers can inspect what was
//! degraded to placeholder output.

use std::cell::RefCell;
use std::fmt;

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Output was produced with a best-effort substitute
    Warning,
    /// The affected item was skipped
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single recorded problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,

    /// Qualified name of the schema item, e.g. `files.list_folder`
    pub subject: String,

    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.subject, self.message)
    }
}

/// Collector shared by every emitter of a run
///
/// Emitters hold it by shared reference; recording goes through interior
/// mutability since a run is single-threaded. An entry identical to one
/// already recorded is dropped, so a type visited by several emitters is
/// reported once.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: RefCell<Vec<Diagnostic>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem that was papered over with placeholder output
    pub fn warn(&self, subject: impl Into<String>, message: impl Into<String>) {
        let (subject, message) = (subject.into(), message.into());
        if self.push(Severity::Warning, &subject, &message) {
            tracing::warn!(subject = %subject, "{}", message);
        }
    }

    /// Record a problem that caused an item to be skipped
    pub fn error(&self, subject: impl Into<String>, message: impl Into<String>) {
        let (subject, message) = (subject.into(), message.into());
        if self.push(Severity::Error, &subject, &message) {
            tracing::error!(subject = %subject, "{}", message);
        }
    }

    /// Returns `false` when the same entry was already recorded.
    fn push(&self, severity: Severity, subject: &str, message: &str) -> bool {
        let mut entries = self.entries.borrow_mut();
        let seen = entries
            .iter()
            .any(|d| d.severity == severity && d.subject == subject && d.message == message);
        if seen {
            return false;
        }
        entries.push(Diagnostic {
            severity,
            subject: subject.to_string(),
            message: message.to_string(),
        });
        true
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Copy of everything recorded so far
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries.into_inner()
    }
}
