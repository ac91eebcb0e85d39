// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-fatal warnings.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications. It limits the number of visible toasts and manages
//! auto-dismiss timers; the update loop calls [`Manager::tick`] while any
//! toast is visible.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Alignment, Color, Element, Theme};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// How long a toast stays on screen before auto-dismissing.
const DISPLAY_DURATION: Duration = Duration::from_secs(6);

/// Unique identifier of one notification within the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// One toast: an i18n message key plus display bookkeeping.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    shown_at: Instant,
}

impl Notification {
    #[must_use]
    pub fn info(message_key: &str) -> Self {
        Self::with_severity(Severity::Info, message_key)
    }

    #[must_use]
    pub fn warning(message_key: &str) -> Self {
        Self::with_severity(Severity::Warning, message_key)
    }

    fn with_severity(severity: Severity, message_key: &str) -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);

        Self {
            id: NotificationId(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            severity,
            message_key: message_key.to_string(),
            shown_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    fn should_auto_dismiss(&self) -> bool {
        self.shown_at.elapsed() >= DISPLAY_DURATION
    }
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Processes a tick event, dismissing any notifications that have expired.
    ///
    /// Should be called periodically (e.g., every 500ms) to handle auto-dismiss.
    pub fn tick(&mut self) {
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    /// Handles a notification message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// True while any toast is visible or queued; drives the tick
    /// subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut next) = self.queue.pop_front() else {
                break;
            };
            // The display window starts when the toast becomes visible.
            next.shown_at = Instant::now();
            self.visible.push_front(next);
        }
    }

    /// Renders the visible toasts as a column of dismissable rows.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::XS).padding(spacing::SM);

        for notification in &self.visible {
            let accent = severity_color(notification.severity());
            let label = Text::new(i18n.tr(notification.message_key()))
                .size(typography::BODY);
            let dismiss = button(Text::new("\u{2715}").size(typography::CAPTION))
                .on_press(Message::Dismiss(notification.id()))
                .style(styles::button::text_link)
                .padding(spacing::XXS);

            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(Alignment::Center)
                .push(label)
                .push(dismiss);

            column = column.push(
                container(row)
                    .padding(spacing::SM)
                    .style(move |theme: &Theme| styles::container::toast(theme, accent)),
            );
        }

        column.into()
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => palette::INFO_500,
        Severity::Warning => palette::WARNING_500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_shows_up_to_max_visible() {
        let mut manager = Manager::new();
        for _ in 0..5 {
            manager.push(Notification::warning("notification-config-load-error"));
        }

        assert_eq!(manager.visible.len(), MAX_VISIBLE);
        assert_eq!(manager.queue.len(), 2);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        for _ in 0..4 {
            manager.push(Notification::info("notification-post-skipped"));
        }
        let first = manager.visible.back().expect("visible toast").id();

        assert!(manager.dismiss(first));
        assert_eq!(manager.visible.len(), MAX_VISIBLE);
        assert!(manager.queue.is_empty());
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        let orphan = Notification::info("notification-post-skipped");
        assert!(!manager.dismiss(orphan.id()));
    }

    #[test]
    fn tick_keeps_fresh_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-config-load-error"));
        manager.tick();
        assert!(manager.has_notifications());
    }

    #[test]
    fn expired_notification_is_dismissed_on_tick() {
        let mut manager = Manager::new();
        let mut notification = Notification::warning("notification-config-load-error");
        notification.shown_at = Instant::now() - DISPLAY_DURATION - Duration::from_secs(1);
        manager.push(notification);

        manager.tick();
        assert!(!manager.has_notifications());
    }

    #[test]
    fn ids_are_unique() {
        let a = Notification::info("x");
        let b = Notification::info("x");
        assert_ne!(a.id(), b.id());
    }
}
