// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting warning and error events in memory.
//!
//! Events are stored in a memory-bounded buffer behind a cloneable handle.
//! Components that report user-facing problems (the toast store in
//! particular) log the message key here so recent problems can be inspected
//! without any on-disk state.

mod events;

pub use events::{DiagnosticEvent, EventSeverity};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Default number of events retained before the oldest are dropped.
pub const DEFAULT_CAPACITY: usize = 256;

/// Cloneable handle to the shared diagnostics buffer.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<VecDeque<DiagnosticEvent>>>,
    capacity: usize,
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl DiagnosticsHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle whose buffer retains at most `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(64)))),
            capacity: capacity.max(1),
        }
    }

    /// Records a warning event.
    pub fn log_warning(&self, key: impl Into<String>) {
        self.log(DiagnosticEvent::new(EventSeverity::Warning, key));
    }

    /// Records an error event.
    pub fn log_error(&self, key: impl Into<String>) {
        self.log(DiagnosticEvent::new(EventSeverity::Error, key));
    }

    fn log(&self, event: DiagnosticEvent) {
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(event);
        }
    }

    /// Returns a snapshot of the buffered events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.lock().map(|buffer| buffer.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
