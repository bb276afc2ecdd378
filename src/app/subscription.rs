// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events are routed to the calculator screen; a periodic tick
//! runs only while a dismissed toast is still awaiting removal.

use super::{Message, Screen};
use crate::ui::calculator;
use crate::ui::calculator::Operator;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the keyboard subscription for the current screen.
///
/// Only the calculator screen consumes raw key events; the contact form's
/// text inputs handle their own.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Calculator => event::listen_with(|event, status, _window| {
            // Keys already captured by a focused widget stay there.
            match status {
                event::Status::Captured => None,
                event::Status::Ignored => match event {
                    event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => {
                        map_calculator_key(&key).map(Message::Calculator)
                    }
                    _ => None,
                },
            }
        }),
        Screen::Contact => Subscription::none(),
    }
}

/// Maps a pressed key onto a calculator message.
fn map_calculator_key(key: &iced::keyboard::Key) -> Option<calculator::Message> {
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;

    match key {
        Key::Character(c) => match c.as_str() {
            "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
                let digit = c.as_str().as_bytes()[0] - b'0';
                Some(calculator::Message::Digit(digit))
            }
            "." | "," => Some(calculator::Message::Decimal),
            "+" => Some(calculator::Message::Operator(Operator::Add)),
            "-" => Some(calculator::Message::Operator(Operator::Subtract)),
            "*" | "x" => Some(calculator::Message::Operator(Operator::Multiply)),
            "/" => Some(calculator::Message::Operator(Operator::Divide)),
            "=" => Some(calculator::Message::Equals),
            _ => None,
        },
        Key::Named(Named::Enter) => Some(calculator::Message::Equals),
        Key::Named(Named::Backspace) => Some(calculator::Message::Backspace),
        Key::Named(Named::Escape) => Some(calculator::Message::Clear),
        _ => None,
    }
}

/// Creates a periodic tick subscription for deferred toast removal.
///
/// Idle unless a removal is actually scheduled, so the app doesn't wake up
/// while nothing can change.
pub fn create_tick_subscription(has_pending_removals: bool) -> Subscription<Message> {
    if has_pending_removals {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;

    #[test]
    fn digit_keys_map_to_digit_messages() {
        let key = Key::Character("7".into());
        assert!(matches!(
            map_calculator_key(&key),
            Some(calculator::Message::Digit(7))
        ));
    }

    #[test]
    fn operator_keys_map_to_operators() {
        let key = Key::Character("/".into());
        assert!(matches!(
            map_calculator_key(&key),
            Some(calculator::Message::Operator(Operator::Divide))
        ));
    }

    #[test]
    fn enter_maps_to_equals_and_escape_clears() {
        assert!(matches!(
            map_calculator_key(&Key::Named(Named::Enter)),
            Some(calculator::Message::Equals)
        ));
        assert!(matches!(
            map_calculator_key(&Key::Named(Named::Escape)),
            Some(calculator::Message::Clear)
        ));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert!(map_calculator_key(&Key::Character("q".into())).is_none());
        assert!(map_calculator_key(&Key::Named(Named::Tab)).is_none());
    }
}
