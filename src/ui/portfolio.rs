// SPDX-License-Identifier: MPL-2.0
//! The sections experience: frame, active panel, and transition variant.
//!
//! The panel for the visible section is chosen from the navigator snapshot;
//! the snapshot's direction and transition flag only select which entry
//! variant the panel renders with (offset from below or from above while the
//! transition is in flight). Easing is left entirely to the animation layer.

use crate::content::{Library, Panel};
use crate::i18n::fluent::I18n;
use crate::navigation::{Direction, NavSnapshot};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::sections::{contact, experience, home, works};
use iced::widget::{container, Column, Row, Space, Text};
use iced::{Border, Element, Length, Theme};

pub use crate::ui::sections::Message;

/// Height of the frame's section progress bar when at the first section.
const PROGRESS_FULL_HEIGHT: f32 = 176.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub library: &'a Library,
    pub snapshot: NavSnapshot,
}

/// Render the frame and the visible panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let frame = build_frame(&ctx);
    let panel = build_panel(&ctx);

    Row::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .push(frame)
        .push(
            container(panel)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .into()
}

/// Static frame: owner name plus a progress bar that shrinks as the visitor
/// moves through the sections.
fn build_frame<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let name = Text::new(ctx.library.profile.name.clone()).size(typography::SUBTITLE);

    let section_count = ctx.library.section_table().len().max(1);
    let progress =
        1.0 - (ctx.snapshot.section_index + 1) as f32 / (section_count + 1) as f32;
    let bar = container(
        Space::new()
            .width(Length::Fixed(4.0))
            .height(Length::Fixed(PROGRESS_FULL_HEIGHT * progress)),
    )
    .style(|_theme: &Theme| container::Style {
        background: Some(palette::ACCENT_500.into()),
        border: Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    Column::new()
        .spacing(spacing::XL)
        .push(name)
        .push(bar)
        .into()
}

/// Resolve and render the visible panel, wrapped in its transition variant.
fn build_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.library.panel_for(ctx.snapshot.section_index) {
        Panel::Home => home::view(home::ViewContext {
            i18n: ctx.i18n,
            profile: &ctx.library.profile,
        }),
        Panel::Works => works::view(works::ViewContext {
            i18n: ctx.i18n,
            library: ctx.library,
            subsection_index: ctx.snapshot.subsection_index,
        }),
        Panel::Experience => experience::view(experience::ViewContext {
            i18n: ctx.i18n,
            experiences: &ctx.library.experiences,
        }),
        Panel::Contact => contact::view(contact::ViewContext {
            i18n: ctx.i18n,
            library: ctx.library,
        }),
    };

    apply_entry_variant(content, ctx.snapshot)
}

/// Offset the panel toward its entry origin while the transition is in
/// flight: a downward transition enters from below, an upward one from
/// above. Once the flag clears the panel sits centered.
fn apply_entry_variant(content: Element<'_, Message>, snapshot: NavSnapshot) -> Element<'_, Message> {
    if !snapshot.transitioning {
        return content;
    }

    let offset = Length::Fixed(sizing::PANEL_ENTER_OFFSET);
    let column = match snapshot.direction {
        Direction::Down => Column::new()
            .push(Space::new().width(Length::Shrink).height(offset))
            .push(content),
        Direction::Up => Column::new()
            .push(content)
            .push(Space::new().width(Length::Shrink).height(offset)),
    };

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Library;
    use crate::navigation::{Direction, NavSnapshot};

    fn snapshot(section_index: usize, transitioning: bool, direction: Direction) -> NavSnapshot {
        NavSnapshot {
            section_index,
            subsection_index: 0,
            direction,
            transitioning,
        }
    }

    #[test]
    fn portfolio_view_renders_every_section() {
        let i18n = I18n::default();
        let (library, _) = Library::load(None);

        for index in 0..library.section_table().len() {
            let _element = view(ViewContext {
                i18n: &i18n,
                library: &library,
                snapshot: snapshot(index, false, Direction::Down),
            });
        }
    }

    #[test]
    fn portfolio_view_renders_both_transition_variants() {
        let i18n = I18n::default();
        let (library, _) = Library::load(None);

        for direction in [Direction::Up, Direction::Down] {
            let _element = view(ViewContext {
                i18n: &i18n,
                library: &library,
                snapshot: snapshot(1, true, direction),
            });
        }
    }
}
