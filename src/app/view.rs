// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the screen switcher, the active demo screen, and the toast
//! overlay stacked above everything else.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::calculator;
use crate::ui::contact;
use crate::ui::design_tokens::{border, opacity, palette, radius, spacing, typography};
use crate::ui::toasts::{overlay, ToastStore};
use iced::widget::{button, container, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub calculator: &'a calculator::State,
    pub contact: &'a contact::State,
    pub toasts: &'a ToastStore,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let switcher = view_switcher(ctx.i18n, ctx.screen);

    let body: Element<'_, Message> = match ctx.screen {
        Screen::Calculator => ctx.calculator.view().map(Message::Calculator),
        Screen::Contact => ctx.contact.view(ctx.i18n).map(Message::Contact),
    };

    let base = Column::new()
        .push(switcher)
        .push(Container::new(body).center(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let toast_overlay = overlay::view_overlay(ctx.toasts, ctx.i18n).map(Message::Toast);

    Stack::with_children(vec![base.into(), toast_overlay])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_switcher<'a>(i18n: &'a I18n, active: Screen) -> Element<'a, Message> {
    let mut tabs = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    for screen in [Screen::Calculator, Screen::Contact] {
        let is_active = screen == active;
        tabs = tabs.push(
            button(Text::new(i18n.tr(screen.title_key())).size(typography::BODY))
                .on_press(Message::SwitchScreen(screen))
                .padding(spacing::SM)
                .style(move |theme: &Theme, status| tab_style(theme, status, is_active)),
        );
    }

    tabs = tabs.push(Space::new().width(Length::Fill)).push(
        button(Text::new(i18n.tr("theme-toggle")).size(typography::BODY))
            .on_press(Message::ToggleTheme)
            .padding(spacing::SM)
            .style(|theme: &Theme, status| tab_style(theme, status, false)),
    );

    Container::new(tabs)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(switcher_style)
        .into()
}

/// Style for the switcher bar.
fn switcher_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        ..Default::default()
    }
}

/// Style for a switcher tab; the active tab is tinted with the brand color.
fn tab_style(theme: &Theme, status: iced::widget::button::Status, is_active: bool) -> iced::widget::button::Style {
    use iced::widget::button::{Status, Style};

    let palette_ext = theme.extended_palette();
    let background = if is_active {
        Some(iced::Background::Color(palette_ext.primary.weak.color))
    } else {
        match status {
            Status::Hovered | Status::Pressed => Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            Status::Active | Status::Disabled => None,
        }
    };

    Style {
        background,
        text_color: if is_active {
            palette_ext.primary.weak.text
        } else {
            palette_ext.background.base.text
        },
        border: iced::Border {
            color: if is_active {
                palette_ext.primary.base.color
            } else {
                Color::TRANSPARENT
            },
            width: if is_active { border::WIDTH_SM } else { 0.0 },
            radius: radius::SM.into(),
        },
        shadow: crate::ui::design_tokens::shadow::NONE,
        snap: true,
    }
}
