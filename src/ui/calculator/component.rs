// SPDX-License-Identifier: MPL-2.0
//! Calculator screen component.
//!
//! Thin Elm-style wrapper around [`Engine`]: messages map key and button
//! presses onto engine operations, and arithmetic failures are returned as
//! effects for the application to surface as toasts.

use super::engine::{format_value, CalcError, Engine, Operator};
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Messages produced by the calculator's buttons and key bindings.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

/// Side effects the application must handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// An arithmetic error to report through the toast store.
    ReportError(CalcError),
}

/// Calculator screen state.
#[derive(Debug, Clone, Default)]
pub struct State {
    engine: Engine,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Resets the session (also reachable from an error toast's action).
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Digit(digit) => {
                self.engine.input_digit(digit);
                Effect::None
            }
            Message::Decimal => {
                self.engine.input_decimal();
                Effect::None
            }
            Message::Operator(op) => match self.engine.apply_operator(op) {
                Ok(()) => Effect::None,
                Err(err) => Effect::ReportError(err),
            },
            Message::Equals => match self.engine.equals() {
                Ok(()) => Effect::None,
                Err(err) => Effect::ReportError(err),
            },
            Message::Clear => {
                self.engine.clear();
                Effect::None
            }
            Message::Backspace => {
                self.engine.backspace();
                Effect::None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let pending_line = match self.engine.pending() {
            Some((value, op)) => format!("{} {}", format_value(value), op.symbol()),
            None => String::new(),
        };

        let display = Container::new(
            Column::new()
                .align_x(alignment::Horizontal::Right)
                .push(
                    Text::new(self.engine.display())
                        .size(typography::DISPLAY)
                        .style(|_theme: &Theme| text::Style {
                            color: Some(palette::WHITE),
                        }),
                )
                .push(
                    Text::new(pending_line)
                        .size(typography::CAPTION)
                        .style(|_theme: &Theme| text::Style {
                            color: Some(palette::GRAY_200),
                        }),
                ),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CALC_DISPLAY_HEIGHT))
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::MD)
        .style(display_style);

        let top_rows = Column::new()
            .spacing(spacing::XS)
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(function_key("C", Message::Clear))
                    .push(function_key("⌫", Message::Backspace))
                    .push(function_key("÷", Message::Operator(Operator::Divide)))
                    .push(function_key("×", Message::Operator(Operator::Multiply))),
            )
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(digit_key(7))
                    .push(digit_key(8))
                    .push(digit_key(9))
                    .push(function_key("−", Message::Operator(Operator::Subtract))),
            )
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(digit_key(4))
                    .push(digit_key(5))
                    .push(digit_key(6))
                    .push(function_key("+", Message::Operator(Operator::Add))),
            );

        // Bottom block: [1 2 3 / 0 .] next to a double-height equals key.
        let bottom_left = Column::new()
            .spacing(spacing::XS)
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(digit_key(1))
                    .push(digit_key(2))
                    .push(digit_key(3)),
            )
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(wide_digit_key(0))
                    .push(digit_styled_key(".", Message::Decimal)),
            );

        let equals = button(centered_label("="))
            .on_press(Message::Equals)
            .width(Length::Fixed(sizing::CALC_BUTTON))
            .height(Length::Fixed(sizing::CALC_BUTTON * 2.0 + spacing::XS))
            .style(equals_key_style);

        let grid = Column::new()
            .spacing(spacing::XS)
            .push(top_rows)
            .push(Row::new().spacing(spacing::XS).push(bottom_left).push(equals));

        let width = sizing::CALC_BUTTON * 4.0 + spacing::XS * 3.0;
        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(display)
                .push(grid),
        )
        .width(Length::Fixed(width + spacing::SM * 2.0))
        .padding(spacing::SM)
        .style(frame_style)
        .into()
    }
}

fn centered_label(label: impl ToString) -> Element<'static, Message> {
    Container::new(Text::new(label.to_string()).size(typography::SUBTITLE))
        .center(Length::Fill)
        .into()
}

fn digit_key(digit: u8) -> Element<'static, Message> {
    digit_styled_key(digit, Message::Digit(digit))
}

fn digit_styled_key(label: impl ToString, message: Message) -> Element<'static, Message> {
    button(centered_label(label))
        .on_press(message)
        .width(Length::Fixed(sizing::CALC_BUTTON))
        .height(Length::Fixed(sizing::CALC_BUTTON))
        .style(digit_key_style)
        .into()
}

fn wide_digit_key(digit: u8) -> Element<'static, Message> {
    button(centered_label(digit))
        .on_press(Message::Digit(digit))
        .width(Length::Fixed(sizing::CALC_BUTTON * 2.0 + spacing::XS))
        .height(Length::Fixed(sizing::CALC_BUTTON))
        .style(digit_key_style)
        .into()
}

fn function_key(label: &str, message: Message) -> Element<'static, Message> {
    button(centered_label(label))
        .on_press(message)
        .width(Length::Fixed(sizing::CALC_BUTTON))
        .height(Length::Fixed(sizing::CALC_BUTTON))
        .style(function_key_style)
        .into()
}

/// Style for the dark display area.
fn display_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::GRAY_900)),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for the calculator frame.
fn frame_style(theme: &Theme) -> container::Style {
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

fn key_style(base_color: Color, text_color: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: 0.85,
            ..base_color
        },
        button::Status::Pressed => Color {
            a: 0.7,
            ..base_color
        },
        button::Status::Active | button::Status::Disabled => base_color,
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn digit_key_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    key_style(base.color, base.text, status)
}

fn function_key_style(theme: &Theme, status: button::Status) -> button::Style {
    let strong = theme.extended_palette().background.strong;
    key_style(strong.color, strong.text, status)
}

fn equals_key_style(theme: &Theme, status: button::Status) -> button::Style {
    let primary = theme.extended_palette().primary.base;
    key_style(primary.color, primary.text, status)
}
