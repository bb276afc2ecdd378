// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Calculator,
    Contact,
}

impl Screen {
    /// Returns the i18n key of the screen's display name.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Calculator => "screen-calculator",
            Screen::Contact => "screen-contact",
        }
    }
}
