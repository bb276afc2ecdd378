// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` is a small demo application built with the Iced GUI
//! framework around a toast notification center.
//!
//! The toast store — a bounded, reducer-driven notification queue with
//! deferred removal — is the heart of the crate; the calculator and
//! contact form screens exist to exercise it. The crate also demonstrates
//! internationalization with Fluent and user preference management.

#![doc(html_root_url = "https://docs.rs/iced_toaster/0.1.0")]

pub mod app;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
