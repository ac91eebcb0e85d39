// SPDX-License-Identifier: MPL-2.0
//! Static site content: profile, works, experience, and blog posts.
//!
//! All content ships embedded in the binary so packaging never has to locate
//! files on disk. A `--content-dir` override (or `ICED_FOLIO_CONTENT_DIR`)
//! swaps in an on-disk directory with the same layout, which is how the
//! content is edited without rebuilding:
//!
//! ```text
//! content/
//! ├── profile.toml
//! ├── works.toml
//! ├── experience.toml
//! ├── covers/*.svg
//! └── posts/*.md
//! ```
//!
//! Loading is warning-based, never fatal: unreadable files fall back to
//! defaults and surface a notification key, matching how configuration
//! loading behaves.

pub mod blog;

use crate::error::{ContentError, Error, Result};
use crate::navigation::SectionDescriptor;
use blog::Post;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "content/"]
struct Asset;

const PROFILE_FILE: &str = "profile.toml";
const WORKS_FILE: &str = "works.toml";
const EXPERIENCE_FILE: &str = "experience.toml";
const POSTS_DIR: &str = "posts";

/// Owner identity rendered in the frame and the contact panel.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub socials: Vec<Social>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            tagline: String::new(),
            email: String::new(),
            socials: Vec::new(),
        }
    }
}

/// One external profile link (icon is a path under `content/`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Social {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// One project shown in the works panel.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Work {
    pub title: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub cover: Option<String>,
}

/// One entry of the experience timeline.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExperienceEntry {
    pub date: String,
    pub title: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
struct WorksFile {
    #[serde(default)]
    work: Vec<Work>,
}

#[derive(Debug, Deserialize)]
struct ExperienceFile {
    #[serde(default)]
    experience: Vec<ExperienceEntry>,
}

/// Which view a section index resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Home,
    Works,
    Experience,
    Contact,
}

/// All loaded content, read-only for the lifetime of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Library {
    pub profile: Profile,
    pub works: Vec<Work>,
    pub experiences: Vec<ExperienceEntry>,
    /// Posts sorted newest-first.
    pub posts: Vec<Post>,
    content_dir: Option<std::path::PathBuf>,
}

impl Default for Library {
    /// An empty library; the application replaces it with loaded content
    /// during boot.
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            works: Vec::new(),
            experiences: Vec::new(),
            posts: Vec::new(),
            content_dir: None,
        }
    }
}

impl Library {
    /// Loads all content, embedded by default or from `content_dir`.
    ///
    /// Returns the library together with notification keys for anything
    /// that failed to load. Failures degrade to empty collections so the
    /// application always starts.
    pub fn load(content_dir: Option<&Path>) -> (Self, Vec<&'static str>) {
        let mut warnings = Vec::new();

        let profile = match read_text(PROFILE_FILE, content_dir)
            .and_then(|raw| parse_toml::<Profile>(&raw))
        {
            Ok(profile) => profile,
            Err(err) => {
                warnings.push(warning_key(&err));
                Profile::default()
            }
        };

        let works = match read_text(WORKS_FILE, content_dir)
            .and_then(|raw| parse_toml::<WorksFile>(&raw))
        {
            Ok(file) => file.work,
            Err(err) => {
                warnings.push(warning_key(&err));
                Vec::new()
            }
        };

        let experiences = match read_text(EXPERIENCE_FILE, content_dir)
            .and_then(|raw| parse_toml::<ExperienceFile>(&raw))
        {
            Ok(file) => file.experience,
            Err(err) => {
                warnings.push(warning_key(&err));
                Vec::new()
            }
        };

        let (posts, skipped) = load_posts(content_dir);
        if skipped {
            warnings.push("notification-post-skipped");
        }

        // One toast per failure kind is enough.
        warnings.dedup();

        (
            Self {
                profile,
                works,
                experiences,
                posts,
                content_dir: content_dir.map(Path::to_path_buf),
            },
            warnings,
        )
    }

    /// Raw bytes of a content asset (e.g. an SVG cover), from the override
    /// directory when set, otherwise from the embedded bundle.
    #[must_use]
    pub fn asset_bytes(&self, relative: &str) -> Option<Vec<u8>> {
        if let Some(dir) = &self.content_dir {
            if let Ok(bytes) = fs::read(dir.join(relative)) {
                return Some(bytes);
            }
        }
        Asset::get(relative).map(|file| file.data.into_owned())
    }

    /// The fixed section descriptor table driving the navigator.
    ///
    /// The projects panel and the experience timeline share the `Works`
    /// label, so the navigation menu collapses them into one entry that
    /// resolves to the projects panel.
    #[must_use]
    pub fn section_table(&self) -> Vec<SectionDescriptor> {
        vec![
            SectionDescriptor::new("Home", 1),
            SectionDescriptor::new("Works", self.works.len()),
            SectionDescriptor::new("Works", 1),
            SectionDescriptor::new("Contact", 1),
        ]
    }

    /// Panels in section-index order, parallel to [`section_table`](Self::section_table).
    #[must_use]
    pub fn panels(&self) -> Vec<Panel> {
        vec![Panel::Home, Panel::Works, Panel::Experience, Panel::Contact]
    }

    /// Resolves a section index to its panel, defaulting to home for an
    /// index the table does not know (the navigator clamps before this is
    /// ever reached).
    #[must_use]
    pub fn panel_for(&self, section_index: usize) -> Panel {
        self.panels()
            .get(section_index)
            .copied()
            .unwrap_or(Panel::Home)
    }
}

fn parse_toml<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T> {
    toml::from_str(raw).map_err(|e| ContentError::InvalidTable(e.to_string()).into())
}

/// Notification key for a load failure: specific for categorized content
/// errors, generic for I/O and everything else.
fn warning_key(err: &Error) -> &'static str {
    match err {
        Error::Content(content) => content.i18n_key(),
        _ => "notification-content-load-error",
    }
}

/// Reads a content file as text, preferring the override directory.
fn read_text(relative: &str, content_dir: Option<&Path>) -> Result<String> {
    if let Some(dir) = content_dir {
        return fs::read_to_string(dir.join(relative)).map_err(Into::into);
    }

    Asset::get(relative)
        .map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
        .ok_or_else(|| ContentError::MissingFile(relative.to_string()).into())
}

/// Loads and sorts every `posts/*.md`. Returns the posts plus a flag set
/// when at least one file was skipped because it failed to parse.
fn load_posts(content_dir: Option<&Path>) -> (Vec<Post>, bool) {
    let mut posts = Vec::new();
    let mut skipped = false;

    for (stem, raw) in post_sources(content_dir) {
        match blog::parse_post(&raw, &stem) {
            Ok(post) => posts.push(post),
            Err(_) => skipped = true,
        }
    }

    blog::sort_newest_first(&mut posts);
    (posts, skipped)
}

/// Enumerates `(file_stem, raw_text)` pairs for every markdown post.
fn post_sources(content_dir: Option<&Path>) -> Vec<(String, String)> {
    let mut sources = Vec::new();

    if let Some(dir) = content_dir {
        let posts_dir = dir.join(POSTS_DIR);
        if let Ok(entries) = fs::read_dir(posts_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "md") {
                    if let (Some(stem), Ok(raw)) =
                        (path.file_stem(), fs::read_to_string(&path))
                    {
                        sources.push((stem.to_string_lossy().into_owned(), raw));
                    }
                }
            }
        }
        return sources;
    }

    for file in Asset::iter() {
        let name = file.as_ref();
        let Some(rest) = name.strip_prefix("posts/") else {
            continue;
        };
        let Some(stem) = rest.strip_suffix(".md") else {
            continue;
        };
        if let Some(content) = Asset::get(name) {
            sources.push((
                stem.to_string(),
                String::from_utf8_lossy(content.data.as_ref()).into_owned(),
            ));
        }
    }

    sources
}
