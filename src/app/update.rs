// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and the specialized
//! handlers it dispatches to. Section changes are the one place that
//! schedules work: every accepted change raises the navigator's transition
//! flag and issues a deferred, generation-keyed reset matching the
//! configured transition duration.

use super::{App, Message};
use crate::navigation::TransitionTicket;
use crate::ui::blog;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::sections;
use iced::Task;

/// Routes one message to its handler.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(msg) => handle_navbar(app, msg),
        Message::Portfolio(msg) => handle_portfolio(app, msg),
        Message::Blog(msg) => handle_blog(app, msg),
        Message::Notification(msg) => {
            app.notifications.update(msg);
            Task::none()
        }
        Message::SwitchScreen(screen) => {
            app.screen = screen;
            Task::none()
        }
        Message::StepSection(delta) => {
            let ticket = app.navigator.step_section(delta);
            schedule_transition_reset(app, ticket)
        }
        Message::TransitionElapsed(generation) => {
            app.navigator.end_transition(generation);
            Task::none()
        }
        Message::LinkOpened(result) => {
            if let Err(err) = result {
                eprintln!("Failed to open link: {}", err);
                app.notifications
                    .push(Notification::warning("notification-open-link-error"));
            }
            Task::none()
        }
        Message::Tick => {
            app.notifications.update(notifications::Message::Tick);
            Task::none()
        }
    }
}

fn handle_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, &mut app.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::SelectSection(index) => {
            let ticket = app.navigator.select_section(index);
            schedule_transition_reset(app, ticket)
        }
        NavbarEvent::SelectSubsection(index) => {
            app.navigator.select_subsection(index);
            Task::none()
        }
    }
}

fn handle_portfolio(app: &mut App, message: sections::Message) -> Task<Message> {
    match message {
        sections::Message::OpenLink(url) => open_link(app, url),
    }
}

fn handle_blog(app: &mut App, message: blog::Message) -> Task<Message> {
    match message {
        blog::Message::OpenPost(index) => {
            if index < app.library.posts.len() {
                app.selected_post = Some(index);
            }
            Task::none()
        }
        blog::Message::Back => {
            app.selected_post = None;
            Task::none()
        }
    }
}

/// Schedules the deferred flag reset for an accepted section change.
///
/// The sleep lasts exactly the configured transition duration, so the
/// interaction lock releases the moment the animation settles. The resulting
/// message carries the ticket's generation; a reset that arrives after a
/// newer transition began is ignored by the navigator.
pub(super) fn schedule_transition_reset(
    app: &App,
    ticket: Option<TransitionTicket>,
) -> Task<Message> {
    let Some(ticket) = ticket else {
        return Task::none();
    };

    let delay = app.transition.as_duration();
    let generation = ticket.generation();

    Task::perform(tokio::time::sleep(delay), move |()| {
        Message::TransitionElapsed(generation)
    })
}

/// Opens an external URL with the system handler, off the UI thread.
fn open_link(_app: &App, url: String) -> Task<Message> {
    Task::perform(
        async move { open::that(&url).map_err(|e| e.to_string()) },
        Message::LinkOpened,
    )
}
