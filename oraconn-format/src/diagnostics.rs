//! Diagnostics recorded while formatting.
//!
//! The formatter never fails on a missing attribute. It records a
//! [`Diagnostic`] in a [`DiagnosticsSink`] and carries on. Errors a
//! collaborator records for a referenced server are copied to the
//! referencing descriptor with [`DiagnosticsSink::forward`].

use parking_lot::Mutex;
use std::fmt;
use tracing::warn;

/// Severity of a diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A required attribute was absent.
    Missing,
    /// An error reported by a collaborator.
    Error,
    /// Errors copied from a referenced descriptor.
    Forwarded,
}

impl Severity {
    /// Get the severity name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Error => "error",
            Self::Forwarded => "forwarded",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Descriptor the entry is recorded under.
    pub id: String,
    /// Entry severity.
    pub severity: Severity,
    /// Attribute name for missing-attribute entries.
    pub attribute: Option<String>,
    /// Messages carried by the entry.
    pub messages: Vec<String>,
}

impl Diagnostic {
    /// Create a missing-attribute entry.
    pub fn missing(id: impl Into<String>, attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        Self {
            id: id.into(),
            severity: Severity::Missing,
            messages: vec![format!("missing {}", attribute)],
            attribute: Some(attribute),
        }
    }

    /// Create an error entry.
    pub fn error(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            severity: Severity::Error,
            attribute: None,
            messages: vec![message.into()],
        }
    }

    /// Create a forwarded entry.
    pub fn forwarded(id: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            id: id.into(),
            severity: Severity::Forwarded,
            attribute: None,
            messages,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.id, self.severity, self.messages.join(", "))
    }
}

/// Records diagnostics keyed by descriptor id.
pub trait DiagnosticsSink: Send + Sync {
    /// Record that `attribute` is missing on descriptor `id`.
    fn warn_missing(&self, id: &str, attribute: &str);

    /// Record an error message for descriptor `id`.
    fn error(&self, id: &str, message: &str);

    /// Record messages copied from another descriptor under `id`.
    fn forward(&self, id: &str, messages: Vec<String>);

    /// Messages of the missing and error entries recorded under `id`.
    ///
    /// Forwarded entries are not included, so copying errors across a
    /// reference never feeds back into the next lookup.
    fn errors_for(&self, id: &str) -> Vec<String>;
}

/// In-memory diagnostics sink.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, entry: Diagnostic) {
        warn!(
            id = %entry.id,
            severity = %entry.severity,
            attribute = ?entry.attribute,
            messages = ?entry.messages,
            "diagnostic recorded"
        );
        self.entries.lock().push(entry);
    }

    /// Snapshot of every entry in recording order.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Snapshot of the entries recorded under `id`.
    pub fn entries_for(&self, id: &str) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.id == id)
            .cloned()
            .collect()
    }

    /// All messages recorded under `id`, forwarded ones included.
    pub fn messages_for(&self, id: &str) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.id == id)
            .flat_map(|entry| entry.messages.iter().cloned())
            .collect()
    }

    /// Distinct ids with entries, in first-seen order.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for entry in self.entries.lock().iter() {
            if !ids.contains(&entry.id) {
                ids.push(entry.id.clone());
            }
        }
        ids
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if no entries were recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl DiagnosticsSink for MemorySink {
    fn warn_missing(&self, id: &str, attribute: &str) {
        self.push(Diagnostic::missing(id, attribute));
    }

    fn error(&self, id: &str, message: &str) {
        self.push(Diagnostic::error(id, message));
    }

    fn forward(&self, id: &str, messages: Vec<String>) {
        self.push(Diagnostic::forwarded(id, messages));
    }

    fn errors_for(&self, id: &str) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.id == id && entry.severity != Severity::Forwarded)
            .flat_map(|entry| entry.messages.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_warn_missing() {
        let sink = MemorySink::new();
        sink.warn_missing("app", "host");

        let entries = sink.entries_for("app");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Missing);
        assert_eq!(entries[0].attribute.as_deref(), Some("host"));
        assert_eq!(sink.errors_for("app"), vec!["missing host".to_string()]);
    }

    #[test]
    fn test_errors_for_is_per_id() {
        let sink = MemorySink::new();
        sink.error("srv", "unknown target srv");
        sink.warn_missing("app", "sid");

        assert_eq!(sink.errors_for("srv"), vec!["unknown target srv".to_string()]);
        assert_eq!(sink.errors_for("app"), vec!["missing sid".to_string()]);
        assert!(sink.errors_for("other").is_empty());
    }

    #[test]
    fn test_forwarded_excluded_from_errors_for() {
        let sink = MemorySink::new();
        sink.error("app", "boom");
        sink.forward("app", vec!["boom".into()]);

        assert_eq!(sink.errors_for("app"), vec!["boom".to_string()]);
        assert_eq!(sink.messages_for("app"), vec!["boom".to_string(), "boom".to_string()]);
    }

    #[test]
    fn test_ids_first_seen_order() {
        let sink = MemorySink::new();
        sink.warn_missing("b", "host");
        sink.warn_missing("a", "host");
        sink.warn_missing("b", "port");

        assert_eq!(sink.ids(), vec!["b".to_string(), "a".to_string()]);
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn test_clear() {
        let sink = MemorySink::new();
        sink.error("x", "y");
        assert!(!sink.is_empty());
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_display() {
        let entry = Diagnostic::forwarded("app", vec!["a".into(), "b".into()]);
        assert_eq!(entry.to_string(), "app [forwarded] a, b");
    }
}
