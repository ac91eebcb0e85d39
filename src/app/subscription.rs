// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native keyboard events to navigation messages based on
//! the current screen, and drives the periodic tick that auto-dismisses
//! notifications.

use super::{Message, Screen};
use crate::ui::{blog, notifications};
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the keyboard subscription for the current screen.
///
/// - Portfolio: Up/Down arrows step through the sections.
/// - Blog: Escape leaves the reading view.
///
/// Events already captured by a focused widget are left alone.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Portfolio => event::listen_with(|event, status, _window_id| {
            if matches!(status, event::Status::Captured) {
                return None;
            }

            if let event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) = &event
            {
                return match key {
                    Key::Named(Named::ArrowDown) => Some(Message::StepSection(1)),
                    Key::Named(Named::ArrowUp) => Some(Message::StepSection(-1)),
                    _ => None,
                };
            }

            None
        }),
        Screen::Blog => event::listen_with(|event, status, _window_id| {
            if matches!(status, event::Status::Captured) {
                return None;
            }

            if let event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) = &event
            {
                if matches!(key, Key::Named(Named::Escape)) {
                    return Some(Message::Blog(blog::Message::Back));
                }
            }

            None
        }),
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// Idle applications should not wake up, so the tick only runs while a
/// toast is on screen.
pub fn create_tick_subscription(
    notifications: &notifications::Manager,
) -> Subscription<Message> {
    if notifications.has_notifications() {
        time::every(Duration::from_millis(500)).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}
