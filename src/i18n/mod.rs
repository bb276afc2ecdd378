// SPDX-License-Identifier: MPL-2.0
//! Internationalization built on Fluent.
//!
//! Locale resources are `.ftl` files embedded at build time; the active
//! locale is resolved from the CLI flag, then the config file, then the OS.

pub mod fluent;
