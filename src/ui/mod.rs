// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`calculator`] - Calculator demo (button grid, keyboard input)
//! - [`contact`] - Contact form demo (validated submit)
//!
//! # Shared Infrastructure
//!
//! - [`toasts`] - Toast store and overlay, the feedback channel every
//!   screen reports through
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod calculator;
pub mod contact;
pub mod design_tokens;
pub mod theming;
pub mod toasts;
