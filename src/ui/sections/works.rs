// SPDX-License-Identifier: MPL-2.0
//! Works panel: one project card per subsection.
//!
//! The active sub-item decides which project is shown; switching sub-items
//! is driven from the navigation dots, not from inside the panel.

use super::Message;
use crate::content::{Library, Work};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, svg, Column, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub library: &'a Library,
    /// Index of the active sub-item, already clamped by the navigator.
    pub subsection_index: usize,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(work) = ctx.library.works.get(ctx.subsection_index) else {
        return Text::new(ctx.i18n.tr("works-empty"))
            .size(typography::LEAD)
            .into();
    };

    build_card(&ctx, work)
}

fn build_card<'a>(ctx: &ViewContext<'a>, work: &'a Work) -> Element<'a, Message> {
    let mut card = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    if let Some(cover) = work.cover.as_deref() {
        if let Some(bytes) = ctx.library.asset_bytes(cover) {
            card = card.push(
                svg(svg::Handle::from_memory(bytes))
                    .width(Length::Fixed(sizing::COVER_WIDTH))
                    .height(Length::Fixed(sizing::COVER_HEIGHT)),
            );
        }
    }

    card = card
        .push(Text::new(work.title.clone()).size(typography::TITLE))
        .push(Text::new(work.subject.clone()).size(typography::SUBTITLE))
        .push(Text::new(work.description.clone()).size(typography::BODY));

    if !work.tech_stack.is_empty() {
        let mut stack = Row::new().spacing(spacing::XS);
        for tech in &work.tech_stack {
            stack = stack.push(
                container(Text::new(tech.clone()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::panel),
            );
        }
        card = card.push(stack);
    }

    if !work.link.is_empty() {
        card = card.push(
            button(Text::new(ctx.i18n.tr("works-visit-button")).size(typography::BODY))
                .on_press(Message::OpenLink(work.link.clone()))
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::MD]),
        );
    }

    card.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Library;

    #[test]
    fn works_view_renders_each_project() {
        let i18n = I18n::default();
        let (library, _) = Library::load(None);

        for index in 0..library.works.len() {
            let _element = view(ViewContext {
                i18n: &i18n,
                library: &library,
                subsection_index: index,
            });
        }
    }

    #[test]
    fn works_view_survives_out_of_range_index() {
        let i18n = I18n::default();
        let (library, _) = Library::load(None);
        let _element = view(ViewContext {
            i18n: &i18n,
            library: &library,
            subsection_index: usize::MAX,
        });
    }
}
