// SPDX-License-Identifier: MPL-2.0
//! Home panel: name, tagline, and a hint pointing at the navigation.

use super::Message;
use crate::content::Profile;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{Column, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let name = Text::new(ctx.profile.name.clone()).size(typography::DISPLAY);
    let tagline = Text::new(ctx.profile.tagline.clone()).size(typography::SUBTITLE);
    let hint = Text::new(ctx.i18n.tr("home-navigation-hint")).size(typography::BODY);

    Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .width(Length::Shrink)
        .push(name)
        .push(tagline)
        .push(hint)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_view_renders() {
        let i18n = I18n::default();
        let profile = Profile::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            profile: &profile,
        });
    }
}
