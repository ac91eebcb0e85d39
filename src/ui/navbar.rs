// SPDX-License-Identifier: MPL-2.0
//! Navigation menu for the sections presentation.
//!
//! This module renders the section entries produced by
//! [`unique_title_entries`](crate::navigation::unique_title_entries) plus the
//! subsection indicator dots, and translates pointer events into navigation
//! events for the parent application. Entries are disabled while a section
//! transition is in flight so a half-finished animation cannot be
//! interrupted.

use crate::navigation::{NavEntry, NavSnapshot};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, Column, Row, Space, Text};
use iced::{Border, Element, Length, Theme};

/// Contextual data needed to render the navigation menu.
pub struct ViewContext<'a> {
    /// Collapsed entries, first occurrence per title.
    pub entries: &'a [NavEntry],
    /// Current navigator state.
    pub snapshot: NavSnapshot,
    /// Sub-item count of the currently visible section.
    pub subsection_count: usize,
    /// Whether the menu body is expanded.
    pub menu_open: bool,
}

/// Messages emitted by the navigation menu.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    SectionPressed(usize),
    SubsectionEntered(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    SelectSection(usize),
    SelectSubsection(usize),
}

/// Process a menu message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::SectionPressed(index) => Event::SelectSection(index),
        Message::SubsectionEntered(index) => Event::SelectSubsection(index),
    }
}

/// Position of the entry the indicator should mark: the last entry whose
/// section index is at or before the visible section. Sections collapsed
/// under an earlier entry's label therefore light up that entry.
#[must_use]
pub fn active_entry_position(entries: &[NavEntry], section_index: usize) -> Option<usize> {
    entries
        .iter()
        .rposition(|entry| entry.index <= section_index)
}

/// Render the navigation menu.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let toggle = button(Text::new("\u{2630}").size(typography::LEAD))
        .on_press(Message::ToggleMenu)
        .style(styles::button::text_link)
        .padding(spacing::XS);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::NAV_WIDTH))
        .push(toggle);

    if ctx.menu_open {
        content = content.push(build_entries(&ctx));
    }

    container(content).padding(spacing::SM).into()
}

/// Build the column of section entries with the subsection dots under the
/// active entry.
fn build_entries<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = active_entry_position(ctx.entries, ctx.snapshot.section_index);

    let mut column = Column::new().spacing(spacing::SM);

    for (position, entry) in ctx.entries.iter().enumerate() {
        let is_active = active == Some(position);

        let label = Text::new(entry.title.clone()).size(typography::LEAD);
        let entry_button = if ctx.snapshot.transitioning {
            // Suppress interaction for the duration of the animation.
            button(label).style(styles::button::disabled())
        } else if is_active {
            button(label)
                .on_press(Message::SectionPressed(entry.index))
                .style(styles::button::selected)
        } else {
            button(label)
                .on_press(Message::SectionPressed(entry.index))
                .style(styles::button::text_link)
        };

        let mut item = Column::new().push(entry_button);

        if is_active && ctx.subsection_count > 1 {
            item = item.push(build_dots(ctx.subsection_count, ctx.snapshot.subsection_index));
        }

        column = column.push(item);
    }

    column.into()
}

/// Build the subsection indicator dots; the active one is stretched.
fn build_dots<'a>(count: usize, active: usize) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XXS)
        .padding([spacing::XXS, spacing::XS]);

    for index in 0..count {
        let is_active = index == active;
        let width = if is_active {
            sizing::DOT_ACTIVE_WIDTH
        } else {
            sizing::DOT
        };

        let dot = container(
            Space::new()
                .width(Length::Fixed(width))
                .height(Length::Fixed(sizing::DOT)),
        )
        .style(move |_theme: &Theme| container::Style {
            background: Some(
                iced::Color {
                    a: if is_active {
                        opacity::OPAQUE
                    } else {
                        opacity::DIMMED
                    },
                    ..palette::ACCENT_500
                }
                .into(),
            ),
            border: Border {
                radius: radius::PILL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        // Hover selects the sub-item; press is the touch fallback.
        row = row.push(
            mouse_area(dot)
                .on_enter(Message::SubsectionEntered(index))
                .on_press(Message::SubsectionEntered(index)),
        );
    }

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Direction;

    fn entries() -> Vec<NavEntry> {
        vec![
            NavEntry { title: "Home".into(), index: 0 },
            NavEntry { title: "Works".into(), index: 1 },
            NavEntry { title: "Contact".into(), index: 3 },
        ]
    }

    fn snapshot(section_index: usize, transitioning: bool) -> NavSnapshot {
        NavSnapshot {
            section_index,
            subsection_index: 0,
            direction: Direction::Down,
            transitioning,
        }
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn section_press_emits_event_and_keeps_menu_open() {
        let mut menu_open = true;
        let event = update(Message::SectionPressed(3), &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::SelectSection(3)));
    }

    #[test]
    fn subsection_enter_emits_event() {
        let mut menu_open = true;
        let event = update(Message::SubsectionEntered(2), &mut menu_open);
        assert!(matches!(event, Event::SelectSubsection(2)));
    }

    #[test]
    fn active_entry_is_last_at_or_before_section() {
        let entries = entries();
        assert_eq!(active_entry_position(&entries, 0), Some(0));
        assert_eq!(active_entry_position(&entries, 1), Some(1));
        // Section 2 is collapsed under the "Works" label at index 1.
        assert_eq!(active_entry_position(&entries, 2), Some(1));
        assert_eq!(active_entry_position(&entries, 3), Some(2));
    }

    #[test]
    fn active_entry_on_empty_entries_is_none() {
        assert_eq!(active_entry_position(&[], 0), None);
    }

    #[test]
    fn navbar_view_renders() {
        let entries = entries();
        let ctx = ViewContext {
            entries: &entries,
            snapshot: snapshot(0, false),
            subsection_count: 1,
            menu_open: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_collapsed() {
        let entries = entries();
        let ctx = ViewContext {
            entries: &entries,
            snapshot: snapshot(0, false),
            subsection_count: 1,
            menu_open: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_dots() {
        let entries = entries();
        let ctx = ViewContext {
            entries: &entries,
            snapshot: snapshot(1, false),
            subsection_count: 3,
            menu_open: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_while_transitioning() {
        let entries = entries();
        let ctx = ViewContext {
            entries: &entries,
            snapshot: snapshot(1, true),
            subsection_count: 3,
            menu_open: true,
        };
        let _element = view(ctx);
    }
}
