// SPDX-License-Identifier: MPL-2.0
//! Experience panel: a dated timeline of roles.

use super::Message;
use crate::content::ExperienceEntry;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{Column, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub experiences: &'a [ExperienceEntry],
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(ctx.i18n.tr("experience-heading")).size(typography::TITLE));

    if ctx.experiences.is_empty() {
        return column
            .push(Text::new(ctx.i18n.tr("experience-empty")).size(typography::BODY))
            .into();
    }

    for entry in ctx.experiences {
        let date = Text::new(entry.date.clone())
            .size(typography::CAPTION)
            .width(Length::Fixed(96.0));
        let details = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(entry.title.clone()).size(typography::LEAD))
            .push(Text::new(entry.role.clone()).size(typography::BODY));

        column = column.push(Row::new().spacing(spacing::MD).push(date).push(details));
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_view_renders() {
        let i18n = I18n::default();
        let experiences = vec![ExperienceEntry {
            date: "Jan 2026".into(),
            title: "Acme".into(),
            role: "Engineer".into(),
        }];
        let _element = view(ViewContext {
            i18n: &i18n,
            experiences: &experiences,
        });
    }

    #[test]
    fn experience_view_renders_empty_timeline() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            experiences: &[],
        });
    }
}
