// SPDX-License-Identifier: MPL-2.0
//! Contact form screen component.
//!
//! The submission path deliberately runs through the toast store's whole
//! surface: an invalid form pushes a warning, a valid one pushes a progress
//! toast whose record is later patched in place to a success state once the
//! simulated send completes.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use crate::ui::toasts::ToastId;
use iced::widget::{button, container, text_input, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Messages produced by the form's inputs.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    BodyChanged(String),
    Submit,
    /// The simulated send for the given progress toast finished.
    SendFinished(ToastId),
}

/// Side effects the application must handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Validation failed; surface the key as a warning toast.
    ShowWarning { key: &'static str },
    /// The form is valid; start the send and show a progress toast.
    StartSend,
    /// The send finished; patch the progress toast to its success state.
    FinishSend { id: ToastId, name: String },
}

/// Contact form state.
#[derive(Debug, Clone, Default)]
pub struct State {
    name: String,
    email: String,
    body: String,
    /// Progress toast id while a send is in flight.
    sending: Option<ToastId>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending.is_some()
    }

    /// Records the progress toast id once the application has pushed it.
    pub fn mark_sending(&mut self, id: ToastId) {
        self.sending = Some(id);
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::NameChanged(name) => {
                self.name = name;
                Effect::None
            }
            Message::EmailChanged(email) => {
                self.email = email;
                Effect::None
            }
            Message::BodyChanged(body) => {
                self.body = body;
                Effect::None
            }
            Message::Submit => {
                if self.sending.is_some() {
                    return Effect::None;
                }
                if self.name.trim().is_empty()
                    || self.email.trim().is_empty()
                    || self.body.trim().is_empty()
                {
                    return Effect::ShowWarning {
                        key: "notification-contact-missing-fields",
                    };
                }
                if !self.email.contains('@') {
                    return Effect::ShowWarning {
                        key: "notification-contact-invalid-email",
                    };
                }
                Effect::StartSend
            }
            Message::SendFinished(id) => {
                if self.sending != Some(id) {
                    // A stale completion, e.g. after the form was reset.
                    return Effect::None;
                }
                let name = self.name.trim().to_string();
                self.name.clear();
                self.email.clear();
                self.body.clear();
                self.sending = None;
                Effect::FinishSend { id, name }
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("contact-title")).size(typography::TITLE);
        let subtitle = Text::new(i18n.tr("contact-subtitle"))
            .size(typography::BODY)
            .style(|theme: &Theme| text_secondary(theme));

        let name_input = labeled_input(
            i18n.tr("contact-name-label"),
            text_input(&i18n.tr("contact-name-placeholder"), &self.name)
                .on_input(Message::NameChanged)
                .padding(spacing::SM)
                .into(),
        );
        let email_input = labeled_input(
            i18n.tr("contact-email-label"),
            text_input(&i18n.tr("contact-email-placeholder"), &self.email)
                .on_input(Message::EmailChanged)
                .padding(spacing::SM)
                .into(),
        );
        let body_input = labeled_input(
            i18n.tr("contact-message-label"),
            text_input(&i18n.tr("contact-message-placeholder"), &self.body)
                .on_input(Message::BodyChanged)
                .on_submit(Message::Submit)
                .padding(spacing::SM)
                .into(),
        );

        let mut submit = button(
            Text::new(i18n.tr("contact-submit")).size(typography::SUBTITLE),
        )
        .padding(spacing::SM);
        if !self.is_sending() {
            submit = submit.on_press(Message::Submit);
        }

        let form = Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(subtitle)
            .push(name_input)
            .push(email_input)
            .push(body_input)
            .push(submit);

        Container::new(form)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .padding(spacing::LG)
            .style(form_style)
            .align_x(alignment::Horizontal::Left)
            .into()
    }
}

fn labeled_input<'a>(label: String, input: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text_secondary(theme)),
        )
        .push(input)
        .into()
}

fn text_secondary(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().background.weak.text),
    }
}

/// Style for the form card.
fn form_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        let mut state = State::new();
        state.update(Message::NameChanged("Ada".to_string()));
        state.update(Message::EmailChanged("ada@example.com".to_string()));
        state.update(Message::BodyChanged("Hello there".to_string()));
        state
    }

    #[test]
    fn submit_with_empty_fields_warns() {
        let mut state = State::new();
        assert_eq!(
            state.update(Message::Submit),
            Effect::ShowWarning {
                key: "notification-contact-missing-fields"
            }
        );
    }

    #[test]
    fn submit_with_bad_email_warns() {
        let mut state = filled_state();
        state.update(Message::EmailChanged("not-an-address".to_string()));
        assert_eq!(
            state.update(Message::Submit),
            Effect::ShowWarning {
                key: "notification-contact-invalid-email"
            }
        );
    }

    #[test]
    fn valid_submit_starts_the_send() {
        let mut state = filled_state();
        assert_eq!(state.update(Message::Submit), Effect::StartSend);
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let mut state = filled_state();
        state.mark_sending(fake_id(1));
        assert_eq!(state.update(Message::Submit), Effect::None);
    }

    #[test]
    fn finish_clears_the_form_and_reports_the_toast_id() {
        let mut state = filled_state();
        let id = fake_id(3);
        state.mark_sending(id);

        let effect = state.update(Message::SendFinished(id));
        assert_eq!(
            effect,
            Effect::FinishSend {
                id,
                name: "Ada".to_string()
            }
        );
        assert!(state.name().is_empty());
        assert!(!state.is_sending());
    }

    #[test]
    fn stale_finish_is_ignored() {
        let mut state = filled_state();
        state.mark_sending(fake_id(3));
        assert_eq!(state.update(Message::SendFinished(fake_id(9))), Effect::None);
        assert!(state.is_sending());
    }

    fn fake_id(raw: u64) -> ToastId {
        use crate::ui::toasts::{Toast, ToastStore};
        use std::time::Duration;

        // Allocate real ids from a scratch store so the newtype stays opaque.
        let mut store = ToastStore::new(16, Duration::ZERO);
        let mut id = store.push(Toast::info("scratch")).id();
        for _ in 0..raw {
            id = store.push(Toast::info("scratch")).id();
        }
        id
    }
}
