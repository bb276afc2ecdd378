// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` content callers build, the `ToastRecord`
//! the store tracks, and the `ToastPatch` merged by updates.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Instant;

/// Unique identifier for a toast within one store.
///
/// Ids are assigned by the owning [`super::ToastStore`] from a wrapping
/// counter, so they are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Severity level determines visual styling and diagnostics logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Informational message (blue).
    #[default]
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// An optional action button attached to a toast.
///
/// The `tag` is an opaque marker the application interprets when the button
/// is pressed; the store itself attaches no meaning to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
    label_key: String,
    tag: String,
}

impl ToastAction {
    pub fn new(label_key: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            label_key: label_key.into(),
            tag: tag.into(),
        }
    }

    /// Returns the i18n key for the button label.
    #[must_use]
    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Display content of a toast, built by callers and handed to the store.
///
/// Identity and lifecycle (`id`, `open`) belong to the store; this type only
/// carries what is rendered. The `title_key` and optional `body_key` are
/// i18n keys resolved at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    severity: Severity,
    title_key: String,
    body_key: Option<String>,
    body_args: Vec<(String, String)>,
    action: Option<ToastAction>,
}

impl Toast {
    /// Creates a new toast with the given severity and title key.
    pub fn new(severity: Severity, title_key: impl Into<String>) -> Self {
        Self {
            severity,
            title_key: title_key.into(),
            body_key: None,
            body_args: Vec::new(),
            action: None,
        }
    }

    /// Creates a success toast.
    pub fn success(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, title_key)
    }

    /// Creates an info toast.
    pub fn info(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, title_key)
    }

    /// Creates a warning toast.
    pub fn warning(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title_key)
    }

    /// Creates an error toast.
    pub fn error(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, title_key)
    }

    /// Sets the body text key.
    #[must_use]
    pub fn with_body(mut self, body_key: impl Into<String>) -> Self {
        self.body_key = Some(body_key.into());
        self
    }

    /// Adds an argument for body message interpolation.
    #[must_use]
    pub fn with_body_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.body_args.push((key.into(), value.into()));
        self
    }

    /// Attaches an action button.
    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    #[must_use]
    pub fn body_key(&self) -> Option<&str> {
        self.body_key.as_deref()
    }

    #[must_use]
    pub fn body_args(&self) -> &[(String, String)] {
        &self.body_args
    }

    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    /// Merges a patch into this content. Fields the patch leaves unset are
    /// untouched.
    pub(crate) fn merge(&mut self, patch: ToastPatch) {
        if let Some(severity) = patch.severity {
            self.severity = severity;
        }
        if let Some(title_key) = patch.title_key {
            self.title_key = title_key;
        }
        if let Some(body_key) = patch.body_key {
            self.body_key = Some(body_key);
        }
        if let Some(body_args) = patch.body_args {
            self.body_args = body_args;
        }
        if let Some(action) = patch.action {
            self.action = Some(action);
        }
    }
}

/// Partial toast content applied by `update`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastPatch {
    severity: Option<Severity>,
    title_key: Option<String>,
    body_key: Option<String>,
    body_args: Option<Vec<(String, String)>>,
    action: Option<ToastAction>,
}

impl ToastPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    #[must_use]
    pub fn title(mut self, title_key: impl Into<String>) -> Self {
        self.title_key = Some(title_key.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body_key: impl Into<String>) -> Self {
        self.body_key = Some(body_key.into());
        self
    }

    /// Replaces the body interpolation arguments.
    #[must_use]
    pub fn body_args(mut self, args: Vec<(String, String)>) -> Self {
        self.body_args = Some(args);
        self
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// A toast tracked by the store: content plus identity and lifecycle state.
///
/// `open` is true from creation until the toast is dismissed, exactly once;
/// a closed record stays in the sequence until its deferred removal fires.
#[derive(Debug, Clone)]
pub struct ToastRecord {
    id: ToastId,
    open: bool,
    created_at: Instant,
    content: Toast,
}

impl ToastRecord {
    pub(crate) fn new(id: ToastId, content: Toast) -> Self {
        Self {
            id,
            open: true,
            created_at: Instant::now(),
            content,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Whether the toast is still open (not yet dismissed).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn content(&self) -> &Toast {
        &self.content
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    pub(crate) fn merge(&mut self, patch: ToastPatch) {
        self.content.merge(patch);
    }
}
