// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use chrono::{DateTime, Utc};

/// Severity of a captured diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSeverity {
    Warning,
    Error,
}

/// A single entry in the diagnostics buffer.
///
/// Events carry the message key rather than the rendered text so the buffer
/// stays locale-independent.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    severity: EventSeverity,
    key: String,
    timestamp: DateTime<Utc>,
}

impl DiagnosticEvent {
    pub fn new(severity: EventSeverity, key: impl Into<String>) -> Self {
        Self {
            severity,
            key: key.into(),
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn severity(&self) -> EventSeverity {
        self.severity
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_preserves_key_and_severity() {
        let event = DiagnosticEvent::new(EventSeverity::Error, "notification-division-by-zero");
        assert_eq!(event.severity(), EventSeverity::Error);
        assert_eq!(event.key(), "notification-division-by-zero");
    }

    #[test]
    fn timestamps_are_monotonic_enough() {
        let first = DiagnosticEvent::new(EventSeverity::Warning, "a");
        let second = DiagnosticEvent::new(EventSeverity::Warning, "b");
        assert!(second.timestamp() >= first.timestamp());
    }
}
