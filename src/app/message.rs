// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::calculator;
use crate::ui::contact;
use crate::ui::toasts;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    Calculator(calculator::Message),
    Contact(contact::Message),
    Toast(toasts::overlay::Message),
    /// Cycle the theme mode and persist the choice.
    ToggleTheme,
    /// Periodic tick driving deferred toast removal.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_TOASTER_CONFIG_DIR` environment
    /// variable.
    pub config_dir: Option<String>,
}
