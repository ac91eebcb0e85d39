// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, plus the screen-switch control and the toast
//! overlay shared by both screens.

use super::{Message, Screen};
use crate::content::Library;
use crate::i18n::fluent::I18n;
use crate::navigation::{NavEntry, NavSnapshot};
use crate::ui::blog::{self, ViewContext as BlogViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications;
use crate::ui::portfolio::{self, ViewContext as PortfolioViewContext};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub library: &'a Library,
    pub nav_entries: &'a [NavEntry],
    pub snapshot: NavSnapshot,
    pub subsection_count: usize,
    pub menu_open: bool,
    pub selected_post: Option<usize>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Portfolio => view_portfolio(&ctx),
        Screen::Blog => view_blog(&ctx),
    };

    let content = Column::new()
        .push(build_top_bar(&ctx))
        .push(
            container(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.notifications.has_notifications() {
        let toasts = container(ctx.notifications.view(ctx.i18n).map(Message::Notification))
            .width(Length::Fill)
            .align_x(Horizontal::Right);

        iced::widget::stack![content, toasts].into()
    } else {
        content.into()
    }
}

/// Top bar with the screen-switch button, aligned to the right like the
/// navigation menu below it.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (label_key, target) = match ctx.screen {
        Screen::Portfolio => ("blog-open-button", Screen::Blog),
        Screen::Blog => ("portfolio-open-button", Screen::Portfolio),
    };

    let switch = button(Text::new(ctx.i18n.tr(label_key)).size(typography::BODY))
        .on_press(Message::SwitchScreen(target))
        .style(styles::button::text_link)
        .padding(spacing::XS);

    Row::new()
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .push(iced::widget::Space::new().width(Length::Fill).height(Length::Shrink))
        .push(switch)
        .into()
}

fn view_portfolio<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let panel = portfolio::view(PortfolioViewContext {
        i18n: ctx.i18n,
        library: ctx.library,
        snapshot: ctx.snapshot,
    })
    .map(Message::Portfolio);

    let menu = navbar::view(NavbarViewContext {
        entries: ctx.nav_entries,
        snapshot: ctx.snapshot,
        subsection_count: ctx.subsection_count,
        menu_open: ctx.menu_open,
    })
    .map(Message::Navbar);

    Row::new()
        .push(
            container(panel)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(menu)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_blog<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    blog::view(BlogViewContext {
        i18n: ctx.i18n,
        posts: &ctx.library.posts,
        selected: ctx.selected_post,
    })
    .map(Message::Blog)
}
