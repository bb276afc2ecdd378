// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the demo screens and
//! the toast store.
//!
//! The `App` struct wires together the screens, localization, and the
//! toast store, and translates messages into store operations or side
//! effects like config persistence. Policy decisions (window sizing,
//! toast limit clamping, theme persistence) stay close to the main update
//! loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::diagnostics::DiagnosticsHandle;
use crate::i18n::fluent::I18n;
use crate::ui::calculator;
use crate::ui::contact;
use crate::ui::theming::ThemeMode;
use crate::ui::toasts::{Toast, ToastStore};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Root Iced application state bridging the demo screens, localization,
/// and the toast store.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    calculator: calculator::State,
    contact: contact::State,
    toasts: ToastStore,
    theme_mode: ThemeMode,
    config: config::Config,
    config_dir: Option<PathBuf>,
    /// Diagnostics buffer warning/error toasts are logged into.
    diagnostics: DiagnosticsHandle,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("toasts", &self.toasts.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 520;

/// Ensures the configured toast limit stays inside the supported range so
/// persisted configs cannot request nonsensical sequences.
fn clamp_toast_limit(value: usize) -> usize {
    value.clamp(config::MIN_TOAST_LIMIT, config::MAX_TOAST_LIMIT)
}

/// Ensures the configured removal delay stays inside the supported range.
fn clamp_remove_delay_ms(value: u64) -> u64 {
    value.clamp(config::MIN_REMOVE_DELAY_MS, config::MAX_REMOVE_DELAY_MS)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let diagnostics = DiagnosticsHandle::new();
        let mut toasts = ToastStore::default();
        toasts.set_diagnostics(diagnostics.clone());

        Self {
            i18n: I18n::default(),
            screen: Screen::Calculator,
            calculator: calculator::State::new(),
            contact: contact::State::new(),
            toasts,
            theme_mode: ThemeMode::System,
            config: config::Config::default(),
            config_dir: None,
            diagnostics,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the CLI.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.clone().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let limit = clamp_toast_limit(config.toasts.limit.unwrap_or(config::DEFAULT_TOAST_LIMIT));
        let delay_ms = clamp_remove_delay_ms(
            config
                .toasts
                .remove_delay_ms
                .unwrap_or(config::DEFAULT_REMOVE_DELAY_MS),
        );

        let diagnostics = DiagnosticsHandle::new();
        let mut toasts = ToastStore::new(limit, Duration::from_millis(delay_ms));
        toasts.set_diagnostics(diagnostics.clone());

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            toasts,
            config,
            config_dir,
            diagnostics,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.toasts.push(Toast::warning(key));
        }

        (app, Task::none())
    }

    /// Handle to the diagnostics buffer warning/error toasts are logged
    /// into.
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsHandle {
        &self.diagnostics
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(self.toasts.has_pending_removals());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SwitchScreen(target) => update::handle_screen_switch(self, target),
            Message::Calculator(calculator_message) => {
                update::handle_calculator_message(self, calculator_message)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(self, contact_message)
            }
            Message::Toast(toast_message) => update::handle_toast_message(self, toast_message),
            Message::ToggleTheme => update::handle_theme_toggle(self),
            Message::Tick(instant) => update::handle_tick(self, instant),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            calculator: &self.calculator,
            contact: &self.contact,
            toasts: &self.toasts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::EventSeverity;
    use crate::ui::calculator::Operator;
    use crate::ui::toasts::{overlay, Severity};
    use std::time::Instant;
    use tempfile::tempdir;

    fn app_with_immediate_removal() -> App {
        let mut app = App::default();
        let mut toasts = ToastStore::new(5, Duration::ZERO);
        toasts.set_diagnostics(app.diagnostics.clone());
        app.toasts = toasts;
        app
    }

    fn divide_by_zero(app: &mut App) {
        for message in [
            calculator::Message::Digit(8),
            calculator::Message::Operator(Operator::Divide),
            calculator::Message::Digit(0),
            calculator::Message::Equals,
        ] {
            let _ = app.update(Message::Calculator(message));
        }
    }

    #[test]
    fn title_uses_localized_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "IcedToaster");
    }

    #[test]
    fn switch_screen_updates_state() {
        let mut app = App::default();
        assert_eq!(app.screen, Screen::Calculator);
        let _ = app.update(Message::SwitchScreen(Screen::Contact));
        assert_eq!(app.screen, Screen::Contact);
    }

    #[test]
    fn division_by_zero_pushes_exactly_one_error_toast() {
        let mut app = App::default();
        divide_by_zero(&mut app);

        assert_eq!(app.toasts.len(), 1);
        let record = app.toasts.iter().next().expect("toast present");
        assert_eq!(record.content().severity(), Severity::Error);
        assert_eq!(
            record.content().body_key(),
            Some("notification-division-by-zero")
        );
        // The error is also captured in diagnostics.
        let events = app.diagnostics.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity(), EventSeverity::Error);
    }

    #[test]
    fn dismissed_toast_is_muted_then_removed_on_tick() {
        let mut app = app_with_immediate_removal();
        divide_by_zero(&mut app);
        let id = app.toasts.iter().next().expect("toast present").id();

        let _ = app.update(Message::Toast(overlay::Message::Dismiss(id)));
        assert_eq!(app.toasts.len(), 1);
        assert!(!app.toasts.get(id).expect("still present").is_open());

        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn error_toast_action_clears_the_calculator() {
        let mut app = App::default();
        divide_by_zero(&mut app);
        assert_eq!(app.calculator.engine().display(), "8");
        let id = app.toasts.iter().next().expect("toast present").id();

        let _ = app.update(Message::Toast(overlay::Message::ActionPressed(id)));

        assert_eq!(app.calculator.engine().display(), "0");
        assert!(!app.toasts.get(id).expect("closing").is_open());
    }

    #[tokio::test]
    async fn contact_submit_pushes_progress_toast_and_patches_it_on_finish() {
        let mut app = App::default();
        for message in [
            contact::Message::NameChanged("Ada".to_string()),
            contact::Message::EmailChanged("ada@example.com".to_string()),
            contact::Message::BodyChanged("Hello".to_string()),
            contact::Message::Submit,
        ] {
            let _ = app.update(Message::Contact(message));
        }

        assert!(app.contact.is_sending());
        assert_eq!(app.toasts.len(), 1);
        let id = app.toasts.iter().next().expect("progress toast").id();
        assert_eq!(
            app.toasts.get(id).expect("present").content().title_key(),
            "notification-contact-sending"
        );

        let _ = app.update(Message::Contact(contact::Message::SendFinished(id)));

        let record = app.toasts.get(id).expect("same record, patched");
        assert_eq!(record.content().severity(), Severity::Success);
        assert_eq!(record.content().title_key(), "notification-contact-sent");
        assert_eq!(
            record.content().body_args(),
            &[("name".to_string(), "Ada".to_string())]
        );
        assert!(!app.contact.is_sending());
    }

    #[test]
    fn invalid_contact_submit_pushes_warning_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Contact(contact::Message::Submit));

        assert_eq!(app.toasts.len(), 1);
        let record = app.toasts.iter().next().expect("warning toast");
        assert_eq!(record.content().severity(), Severity::Warning);
        assert_eq!(
            record.content().title_key(),
            "notification-contact-missing-fields"
        );
    }

    #[test]
    fn theme_toggle_persists_the_new_mode() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = App::default();
        app.config_dir = Some(temp_dir.path().to_path_buf());
        let before = app.theme_mode;

        let _ = app.update(Message::ToggleTheme);

        assert_ne!(app.theme_mode, before);
        let (saved, warning) =
            config::load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.general.theme_mode, app.theme_mode);
    }

    #[test]
    fn new_surfaces_corrupt_config_as_warning_toast() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::fs::write(temp_dir.path().join("settings.toml"), "not = valid = toml")
            .expect("write corrupt config");

        let (app, _task) = App::new(Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
        });

        assert_eq!(app.toasts.len(), 1);
        let record = app.toasts.iter().next().expect("warning toast");
        assert_eq!(record.content().severity(), Severity::Warning);
        assert_eq!(
            record.content().title_key(),
            "notification-config-load-error"
        );
    }

    #[test]
    fn new_clamps_configured_limits() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::fs::write(
            temp_dir.path().join("settings.toml"),
            "[toasts]\nlimit = 99\nremove_delay_ms = 1\n",
        )
        .expect("write config");

        let (app, _task) = App::new(Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
        });

        assert_eq!(app.toasts.limit(), config::MAX_TOAST_LIMIT);
        assert_eq!(
            app.toasts.remove_delay(),
            Duration::from_millis(config::MIN_REMOVE_DELAY_MS)
        );
    }

    #[test]
    fn clamp_helpers_enforce_bounds() {
        assert_eq!(clamp_toast_limit(0), config::MIN_TOAST_LIMIT);
        assert_eq!(clamp_toast_limit(99), config::MAX_TOAST_LIMIT);
        assert_eq!(
            clamp_toast_limit(config::DEFAULT_TOAST_LIMIT),
            config::DEFAULT_TOAST_LIMIT
        );
        assert_eq!(clamp_remove_delay_ms(0), config::MIN_REMOVE_DELAY_MS);
        assert_eq!(
            clamp_remove_delay_ms(u64::MAX),
            config::MAX_REMOVE_DELAY_MS
        );
    }

    #[test]
    fn tick_subscription_is_idle_without_pending_removals() {
        let app = App::default();
        assert!(!app.toasts.has_pending_removals());
        // Just verify building the subscription doesn't panic either way.
        let _ = app.subscription();
    }
}
