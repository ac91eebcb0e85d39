// SPDX-License-Identifier: MPL-2.0
//! Blog screen: post listing and the reading view for a selected post.
//!
//! The listing shows each post's metadata (date, reading time, keywords);
//! opening a post renders its markdown body as styled text blocks.

use crate::content::blog::Post;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{Alignment, Element, Font, Length};
use pulldown_cmark::{Event as MarkdownEvent, HeadingLevel, Parser, Tag, TagEnd};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Posts sorted newest-first.
    pub posts: &'a [Post],
    /// Index into `posts` of the post being read, if any.
    pub selected: Option<usize>,
}

/// Messages emitted by the blog screen.
#[derive(Debug, Clone)]
pub enum Message {
    OpenPost(usize),
    Back,
}

/// Render either the listing or the selected post.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.selected.and_then(|index| ctx.posts.get(index)) {
        Some(post) => view_post(ctx.i18n, post),
        None => view_listing(&ctx),
    }
}

fn view_listing<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(ctx.i18n.tr("blog-heading")).size(typography::TITLE));

    if ctx.posts.is_empty() {
        column = column.push(Text::new(ctx.i18n.tr("blog-empty")).size(typography::BODY));
    }

    for (index, post) in ctx.posts.iter().enumerate() {
        column = column.push(build_listing_entry(index, post));
    }

    container(scrollable(column))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .into()
}

fn build_listing_entry(index: usize, post: &Post) -> Element<'_, Message> {
    let title = button(Text::new(post.metadata.title.clone()).size(typography::SUBTITLE))
        .on_press(Message::OpenPost(index))
        .style(styles::button::text_link)
        .padding(0);

    let byline = Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(
            Text::new(post.metadata.date.format("%b %d, %Y").to_string())
                .size(typography::CAPTION),
        )
        .push(Text::new(post.metadata.reading_time.clone()).size(typography::CAPTION));

    let mut entry = Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(byline)
        .push(Text::new(post.metadata.description.clone()).size(typography::BODY));

    if !post.metadata.keywords.is_empty() {
        let mut keywords = Row::new().spacing(spacing::XS);
        for keyword in &post.metadata.keywords {
            keywords = keywords.push(
                container(Text::new(keyword.clone()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::panel),
            );
        }
        entry = entry.push(keywords);
    }

    container(entry)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn view_post<'a>(i18n: &'a I18n, post: &'a Post) -> Element<'a, Message> {
    let back = button(Text::new(i18n.tr("blog-back-button")).size(typography::BODY))
        .on_press(Message::Back)
        .style(styles::button::text_link)
        .padding(0);

    let byline = Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(post.metadata.date.format("%b %d, %Y").to_string())
                .size(typography::CAPTION),
        )
        .push(Text::new(post.metadata.reading_time.clone()).size(typography::CAPTION));

    let column = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(back)
        .push(Text::new(post.metadata.title.clone()).size(typography::TITLE))
        .push(byline)
        .push(render_markdown(&post.body));

    container(scrollable(column))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .into()
}

/// Font size for a markdown heading level.
fn heading_size(level: HeadingLevel) -> f32 {
    match level {
        HeadingLevel::H1 => typography::TITLE,
        HeadingLevel::H2 => typography::SUBTITLE,
        HeadingLevel::H3 => typography::LEAD,
        _ => typography::BODY,
    }
}

/// Walk the markdown event stream into a column of styled text blocks.
///
/// Inline markup is flattened: the reading view cares about block
/// structure (headings, paragraphs, code, lists), not about rich inline
/// spans.
fn render_markdown(body: &str) -> Element<'_, Message> {
    let mut column = Column::new().spacing(spacing::MD);

    let parser = Parser::new(body);
    let mut buffer = String::new();
    let mut heading: Option<HeadingLevel> = None;
    let mut in_code_block = false;
    let mut list_depth: usize = 0;

    for event in parser {
        match event {
            MarkdownEvent::Start(Tag::Heading { level, .. }) => {
                heading = Some(level);
                buffer.clear();
            }
            MarkdownEvent::End(TagEnd::Heading(_)) => {
                let level = heading.take().unwrap_or(HeadingLevel::H3);
                column = column.push(
                    Text::new(std::mem::take(&mut buffer)).size(heading_size(level)),
                );
            }
            MarkdownEvent::Start(Tag::CodeBlock(_)) => {
                in_code_block = true;
                buffer.clear();
            }
            MarkdownEvent::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                column = column.push(
                    container(
                        Text::new(std::mem::take(&mut buffer))
                            .size(typography::BODY)
                            .font(Font::MONOSPACE),
                    )
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::container::code_block),
                );
            }
            MarkdownEvent::Start(Tag::List(_)) => list_depth += 1,
            MarkdownEvent::End(TagEnd::List(_)) => list_depth = list_depth.saturating_sub(1),
            MarkdownEvent::Start(Tag::Item) => buffer.clear(),
            MarkdownEvent::End(TagEnd::Item) => {
                let indent = "  ".repeat(list_depth.saturating_sub(1));
                column = column.push(
                    Text::new(format!("{}\u{2022} {}", indent, std::mem::take(&mut buffer)))
                        .size(typography::BODY),
                );
            }
            MarkdownEvent::End(TagEnd::Paragraph) => {
                // List items collect their paragraph text themselves.
                if list_depth == 0 && !buffer.trim().is_empty() {
                    column = column
                        .push(Text::new(std::mem::take(&mut buffer)).size(typography::BODY));
                }
            }
            MarkdownEvent::Text(text) | MarkdownEvent::Code(text) => {
                buffer.push_str(&text);
            }
            MarkdownEvent::SoftBreak => buffer.push(' '),
            MarkdownEvent::HardBreak => {
                if in_code_block {
                    buffer.push('\n');
                } else {
                    buffer.push(' ');
                }
            }
            _ => {}
        }
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Library;

    #[test]
    fn listing_renders_embedded_posts() {
        let i18n = I18n::default();
        let (library, _) = Library::load(None);
        let _element = view(ViewContext {
            i18n: &i18n,
            posts: &library.posts,
            selected: None,
        });
    }

    #[test]
    fn reading_view_renders_each_post() {
        let i18n = I18n::default();
        let (library, _) = Library::load(None);

        for index in 0..library.posts.len() {
            let _element = view(ViewContext {
                i18n: &i18n,
                posts: &library.posts,
                selected: Some(index),
            });
        }
    }

    #[test]
    fn out_of_range_selection_falls_back_to_listing() {
        let i18n = I18n::default();
        let (library, _) = Library::load(None);
        let _element = view(ViewContext {
            i18n: &i18n,
            posts: &library.posts,
            selected: Some(usize::MAX),
        });
    }

    #[test]
    fn empty_listing_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            posts: &[],
            selected: None,
        });
    }
}
