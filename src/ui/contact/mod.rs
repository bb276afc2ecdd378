// SPDX-License-Identifier: MPL-2.0
//! Contact form demo screen.

pub mod component;

pub use component::{Effect, Message, State};
