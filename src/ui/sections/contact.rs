// SPDX-License-Identifier: MPL-2.0
//! Contact panel: email call-to-action plus social links.

use super::Message;
use crate::content::{Library, Profile};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, svg, Column, Row, Text};
use iced::{Alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub library: &'a Library,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let profile: &Profile = &ctx.library.profile;

    let mut column = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(ctx.i18n.tr("contact-heading")).size(typography::TITLE))
        .push(Text::new(ctx.i18n.tr("contact-reach-out")).size(typography::BODY));

    if !profile.email.is_empty() {
        column = column.push(
            button(Text::new(profile.email.clone()).size(typography::LEAD))
                .on_press(Message::OpenLink(format!("mailto:{}", profile.email)))
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::MD]),
        );
    }

    if !profile.socials.is_empty() {
        let mut socials = Row::new().spacing(spacing::MD).align_y(Alignment::Center);
        for social in &profile.socials {
            let mut label = Row::new().spacing(spacing::XXS).align_y(Alignment::Center);
            if let Some(icon) = social.icon.as_deref() {
                if let Some(bytes) = ctx.library.asset_bytes(icon) {
                    label = label.push(
                        svg(svg::Handle::from_memory(bytes))
                            .width(Length::Fixed(sizing::ICON_SM))
                            .height(Length::Fixed(sizing::ICON_SM)),
                    );
                }
            }
            label = label.push(Text::new(social.label.clone()).size(typography::BODY));

            socials = socials.push(
                button(label)
                    .on_press(Message::OpenLink(social.url.clone()))
                    .style(styles::button::text_link)
                    .padding(spacing::XXS),
            );
        }
        column = column.push(socials);
    }

    column.into()
}
