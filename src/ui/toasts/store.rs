// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastStore` owns the ordered, bounded sequence of active toasts and
//! applies every mutation through a single reducer over [`Action`], so calls
//! arriving from different UI callbacks observe one consistent total order.
//! Dismissal is a soft close: the record stays in the sequence with
//! `open == false` until its deferred removal deadline elapses. The store
//! owns those deadlines (at most one per id); dropping the store releases
//! them, removing a toast cancels its deadline.

use super::toast::{Severity, Toast, ToastId, ToastPatch, ToastRecord};
use crate::app::config::{DEFAULT_REMOVE_DELAY_MS, DEFAULT_TOAST_LIMIT};
use crate::diagnostics::DiagnosticsHandle;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// The four mutations the store understands. Every public operation is
/// expressed as one of these and dispatched through [`ToastStore::apply`].
#[derive(Debug, Clone)]
pub enum Action {
    /// Prepend a new record and evict beyond the limit.
    Push(ToastRecord),
    /// Merge a patch into the matching record; no-op if the id is absent.
    Update { id: ToastId, patch: ToastPatch },
    /// Close the matching record; no-op if the id is absent.
    Dismiss(ToastId),
    /// Delete the matching record; no-op if the id is absent.
    Remove(ToastId),
}

/// A removal scheduled when a toast was dismissed.
#[derive(Debug, Clone, Copy)]
struct PendingRemoval {
    id: ToastId,
    deadline: Instant,
}

/// Owns the active toast sequence (newest first) and its pending removals.
#[derive(Debug)]
pub struct ToastStore {
    toasts: VecDeque<ToastRecord>,
    /// Wrapping id counter; ids are never reused within a session.
    next_id: u64,
    pending: Vec<PendingRemoval>,
    limit: usize,
    remove_delay: Duration,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(
            DEFAULT_TOAST_LIMIT,
            Duration::from_millis(DEFAULT_REMOVE_DELAY_MS),
        )
    }
}

impl ToastStore {
    /// Creates a store that holds at most `limit` toasts and removes a
    /// dismissed toast `remove_delay` after its dismissal.
    #[must_use]
    pub fn new(limit: usize, remove_delay: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 0,
            pending: Vec::new(),
            limit: limit.max(1),
            remove_delay,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle warnings and errors are logged to.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Adds a toast to the front of the sequence.
    ///
    /// Assigns the next id, marks the record open, and truncates the
    /// sequence to the configured limit (the oldest entries are silently
    /// dropped). Returns a handle bound to the new id through which the
    /// caller can dismiss or patch the toast without holding the id.
    pub fn push(&mut self, content: Toast) -> ToastHandle<'_> {
        if let Some(handle) = &self.diagnostics {
            match content.severity() {
                Severity::Warning => handle.log_warning(content.title_key()),
                Severity::Error => handle.log_error(content.title_key()),
                Severity::Success | Severity::Info => {}
            }
        }

        let id = self.allocate_id();
        self.apply(Action::Push(ToastRecord::new(id, content)));
        ToastHandle { store: self, id }
    }

    /// Merges `patch` into the toast with the given id; unknown ids are
    /// ignored.
    pub fn update(&mut self, id: ToastId, patch: ToastPatch) {
        self.apply(Action::Update { id, patch });
    }

    /// Closes the toast with the given id and schedules its removal.
    ///
    /// Idempotent: dismissing an already-closed or unknown id changes
    /// nothing, and a removal is only scheduled once per id.
    pub fn dismiss(&mut self, id: ToastId) {
        self.apply(Action::Dismiss(id));
    }

    /// Deletes the toast with the given id, cancelling any scheduled
    /// removal. Idempotent.
    pub fn remove(&mut self, id: ToastId) {
        self.apply(Action::Remove(id));
    }

    /// Fires every removal whose deadline has elapsed.
    ///
    /// Driven by the application's periodic tick subscription.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Clock-injected form of [`tick`](Self::tick).
    pub fn tick_at(&mut self, now: Instant) {
        let due: Vec<ToastId> = self
            .pending
            .iter()
            .filter(|pending| pending.deadline <= now)
            .map(|pending| pending.id)
            .collect();
        for id in due {
            self.apply(Action::Remove(id));
        }
    }

    /// Applies one action through the reducer, then reconciles the pending
    /// removal deadlines with the new sequence.
    pub fn apply(&mut self, action: Action) {
        reduce(&mut self.toasts, action, self.limit);
        self.sync_pending();
    }

    /// Active toasts, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ToastRecord> {
        self.toasts.iter()
    }

    /// Looks up a toast by id.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastRecord> {
        self.toasts.iter().find(|record| record.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Whether any dismissed toast is still awaiting removal. Gates the
    /// tick subscription.
    #[must_use]
    pub fn has_pending_removals(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drops every toast and every scheduled removal.
    pub fn clear(&mut self) {
        self.toasts.clear();
        self.pending.clear();
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn remove_delay(&self) -> Duration {
        self.remove_delay
    }

    fn allocate_id(&mut self) -> ToastId {
        let id = ToastId::from_raw(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Schedules a removal for every newly closed record and drops
    /// deadlines whose record left the sequence (removed or evicted).
    fn sync_pending(&mut self) {
        let delay = self.remove_delay;
        for record in &self.toasts {
            if !record.is_open() && !self.pending.iter().any(|p| p.id == record.id()) {
                self.pending.push(PendingRemoval {
                    id: record.id(),
                    deadline: Instant::now() + delay,
                });
            }
        }
        let toasts = &self.toasts;
        self.pending
            .retain(|pending| toasts.iter().any(|record| record.id() == pending.id));
    }
}

/// The reducer: one dispatch over the action union against the sequence.
fn reduce(toasts: &mut VecDeque<ToastRecord>, action: Action, limit: usize) {
    match action {
        Action::Push(record) => {
            toasts.push_front(record);
            toasts.truncate(limit);
        }
        Action::Update { id, patch } => {
            if let Some(record) = toasts.iter_mut().find(|record| record.id() == id) {
                record.merge(patch);
            }
        }
        Action::Dismiss(id) => {
            if let Some(record) = toasts.iter_mut().find(|record| record.id() == id) {
                record.close();
            }
        }
        Action::Remove(id) => {
            toasts.retain(|record| record.id() != id);
        }
    }
}

/// Borrowing handle to a freshly pushed toast, bound to its id.
#[derive(Debug)]
pub struct ToastHandle<'a> {
    store: &'a mut ToastStore,
    id: ToastId,
}

impl ToastHandle<'_> {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Patches the toast this handle points at.
    pub fn update(&mut self, patch: ToastPatch) {
        self.store.update(self.id, patch);
    }

    /// Closes the toast this handle points at.
    pub fn dismiss(self) {
        self.store.dismiss(self.id);
    }
}
