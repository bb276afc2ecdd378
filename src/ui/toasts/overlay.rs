// SPDX-License-Identifier: MPL-2.0
//! Toast overlay widget.
//!
//! Renders the store's active sequence as a stack of small cards in the
//! bottom-right corner. Dismissed records that are still awaiting removal
//! are rendered muted, so they fade out instead of vanishing abruptly.

use super::store::ToastStore;
use super::toast::{ToastId, ToastRecord};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Messages emitted by the overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// The dismiss button of a toast was pressed.
    Dismiss(ToastId),
    /// The action button of a toast was pressed.
    ActionPressed(ToastId),
}

/// Renders a single toast card.
pub fn view<'a>(record: &'a ToastRecord, i18n: &'a I18n) -> Element<'a, Message> {
    let content = record.content();
    let open = record.is_open();
    let accent = muted(content.severity().color(), open);

    let indicator = Text::new("●")
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let title = Text::new(i18n.tr(content.title_key()))
        .size(typography::SUBTITLE)
        .style(move |theme: &Theme| text::Style {
            color: Some(muted(theme.palette().text, open)),
        });

    let mut text_column = Column::new().spacing(spacing::XXS).push(title);
    if let Some(body_key) = content.body_key() {
        let body = if content.body_args().is_empty() {
            i18n.tr(body_key)
        } else {
            let args: Vec<(&str, &str)> = content
                .body_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(body_key, &args)
        };
        text_column = text_column.push(Text::new(body).size(typography::BODY).style(
            move |theme: &Theme| text::Style {
                color: Some(muted(theme.extended_palette().background.weak.text, open)),
            },
        ));
    }

    let id = record.id();
    let mut controls = Row::new().spacing(spacing::XS).align_y(alignment::Vertical::Center);
    if let Some(action) = content.action() {
        controls = controls.push(
            button(Text::new(i18n.tr(action.label_key())).size(typography::CAPTION))
                .on_press(Message::ActionPressed(id))
                .padding(spacing::XS)
                .style(action_button_style),
        );
    }
    controls = controls.push(
        button(Text::new("×").size(typography::SUBTITLE))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(dismiss_button_style),
    );

    // Layout: [indicator] [title / body] [action] [dismiss]
    let card = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(indicator).padding(spacing::XXS))
        .push(
            Container::new(text_column)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(controls);

    Container::new(card)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

/// Renders the overlay with every active toast, newest on top.
///
/// Positioned in the bottom-right corner, stacked vertically.
pub fn view_overlay<'a>(store: &'a ToastStore, i18n: &'a I18n) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = store.iter().map(|record| view(record, i18n)).collect();

    if cards.is_empty() {
        // An empty container that takes no space
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        let column = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Dims a color for records that are dismissed but not yet removed.
fn muted(color: Color, open: bool) -> Color {
    if open {
        color
    } else {
        Color {
            a: color.a * opacity::CONTENT_MUTED,
            ..color
        }
    }
}

/// Style function for the toast card container.
fn card_style(theme: &Theme, accent: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the action button.
fn action_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            }))
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toasts::Severity;

    #[test]
    fn card_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = Severity::Success.color();
        let style = card_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn muted_reduces_alpha_for_closed_records() {
        let color = Severity::Error.color();
        assert_eq!(muted(color, true), color);
        assert!(muted(color, false).a < color.a);
    }
}
