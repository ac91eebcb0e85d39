// SPDX-License-Identifier: MPL-2.0
//! Blog post parsing: TOML front matter, markdown body, reading time.
//!
//! Posts are markdown files whose metadata sits in a leading `+++` block:
//!
//! ```text
//! +++
//! title = "Hello"
//! description = "First post"
//! date = "2026-01-15"
//! keywords = ["intro"]
//! +++
//!
//! Body in markdown...
//! ```
//!
//! The slug defaults to the file stem when the front matter does not set one.

use crate::error::{ContentError, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// Delimiter line opening and closing the front matter block.
const FRONT_MATTER_FENCE: &str = "+++";

/// Average reading speed used for the listing's time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Raw front matter fields as they appear in the file.
#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    #[serde(default)]
    description: String,
    date: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    cover: Option<String>,
}

/// Parsed, validated post metadata shown in the blog listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMetadata {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub slug: String,
    pub keywords: Vec<String>,
    pub cover: Option<String>,
    /// Pre-rendered estimate such as `"3 min read"`.
    pub reading_time: String,
}

/// A fully loaded post: listing metadata plus the markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub metadata: PostMetadata,
    pub body: String,
}

/// Estimates reading time from a word count at 200 words per minute,
/// rounding up. Empty content reads as `"0 min read"`.
#[must_use]
pub fn estimate_reading_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    if words == 0 {
        return "0 min read".to_string();
    }
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    format!("{} min read", minutes)
}

/// Splits a raw post file into its front matter TOML and markdown body.
fn split_front_matter(raw: &str) -> Result<(&str, &str)> {
    let rest = raw
        .trim_start_matches('\u{feff}')
        .trim_start();
    let rest = rest
        .strip_prefix(FRONT_MATTER_FENCE)
        .ok_or(ContentError::MissingFrontMatter)?;

    let fence = format!("\n{}", FRONT_MATTER_FENCE);
    let end = rest
        .find(&fence)
        .ok_or(ContentError::UnterminatedFrontMatter)?;

    let matter = &rest[..end];
    let body = rest[end + fence.len()..].trim_start_matches(['\r', '\n']);
    Ok((matter, body))
}

/// Parses one markdown file into a [`Post`].
///
/// `fallback_slug` (normally the file stem) is used when the front matter
/// does not declare a slug.
pub fn parse_post(raw: &str, fallback_slug: &str) -> Result<Post> {
    let (matter, body) = split_front_matter(raw)?;

    // Trim so a CRLF file does not leave a lone carriage return on the
    // final front matter line.
    let front: FrontMatter = toml::from_str(matter.trim())
        .map_err(|e| ContentError::InvalidFrontMatter(e.to_string()))?;

    let date = NaiveDate::parse_from_str(&front.date, "%Y-%m-%d")
        .map_err(|_| ContentError::InvalidDate(front.date.clone()))?;

    let slug = front
        .slug
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback_slug.to_string());

    Ok(Post {
        metadata: PostMetadata {
            title: front.title,
            description: front.description,
            date,
            slug,
            keywords: front.keywords,
            cover: front.cover,
            reading_time: estimate_reading_time(body),
        },
        body: body.to_string(),
    })
}

/// Sorts posts newest-first; ties break on slug so the order is stable
/// across runs.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.metadata
            .date
            .cmp(&a.metadata.date)
            .then_with(|| a.metadata.slug.cmp(&b.metadata.slug))
    });
}
