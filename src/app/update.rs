// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Every component effect that reports to the user lands here and is
//! expressed as a toast store operation, so the store's reducer sees all
//! mutations in one total order.

use super::{config, App, Message, Screen};
use crate::ui::calculator;
use crate::ui::contact;
use crate::ui::toasts::{overlay, Severity, Toast, ToastAction, ToastPatch};
use iced::Task;
use std::time::{Duration, Instant};

/// Action tag on the division-by-zero toast: reset the calculator.
pub(super) const ACTION_CALCULATOR_CLEAR: &str = "calculator-clear";

/// How long the simulated contact send takes.
const SEND_SIMULATION_DELAY: Duration = Duration::from_millis(900);

pub(super) fn handle_screen_switch(app: &mut App, target: Screen) -> Task<Message> {
    app.screen = target;
    Task::none()
}

pub(super) fn handle_calculator_message(
    app: &mut App,
    message: calculator::Message,
) -> Task<Message> {
    match app.calculator.update(message) {
        calculator::Effect::None => {}
        calculator::Effect::ReportError(err) => {
            app.toasts.push(
                Toast::error("notification-error-title")
                    .with_body(err.i18n_key())
                    .with_action(ToastAction::new(
                        "notification-action-clear",
                        ACTION_CALCULATOR_CLEAR,
                    )),
            );
        }
    }
    Task::none()
}

pub(super) fn handle_contact_message(app: &mut App, message: contact::Message) -> Task<Message> {
    match app.contact.update(message) {
        contact::Effect::None => Task::none(),
        contact::Effect::ShowWarning { key } => {
            app.toasts.push(Toast::warning(key));
            Task::none()
        }
        contact::Effect::StartSend => {
            let id = app
                .toasts
                .push(Toast::info("notification-contact-sending"))
                .id();
            app.contact.mark_sending(id);
            Task::perform(tokio::time::sleep(SEND_SIMULATION_DELAY), move |_| {
                Message::Contact(contact::Message::SendFinished(id))
            })
        }
        contact::Effect::FinishSend { id, name } => {
            app.toasts.update(
                id,
                ToastPatch::new()
                    .severity(Severity::Success)
                    .title("notification-contact-sent")
                    .body("notification-contact-sent-body")
                    .body_args(vec![("name".to_string(), name)]),
            );
            Task::none()
        }
    }
}

pub(super) fn handle_toast_message(app: &mut App, message: overlay::Message) -> Task<Message> {
    match message {
        overlay::Message::Dismiss(id) => {
            app.toasts.dismiss(id);
        }
        overlay::Message::ActionPressed(id) => {
            let tag = app
                .toasts
                .get(id)
                .and_then(|record| record.content().action())
                .map(|action| action.tag().to_string());
            if tag.as_deref() == Some(ACTION_CALCULATOR_CLEAR) {
                app.calculator.clear();
            }
            // Every action also closes its toast.
            app.toasts.dismiss(id);
        }
    }
    Task::none()
}

pub(super) fn handle_tick(app: &mut App, now: Instant) -> Task<Message> {
    app.toasts.tick_at(now);
    Task::none()
}

pub(super) fn handle_theme_toggle(app: &mut App) -> Task<Message> {
    app.theme_mode = app.theme_mode.next();
    app.config.general.theme_mode = app.theme_mode;
    if config::save_with_override(&app.config, app.config_dir.clone()).is_err() {
        app.toasts.push(Toast::warning("notification-config-save-error"));
    }
    Task::none()
}
