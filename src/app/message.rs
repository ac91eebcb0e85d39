// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::blog;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Portfolio(sections::Message),
    Blog(blog::Message),
    Notification(notifications::Message),
    SwitchScreen(Screen),
    /// Step the visible section by a delta (keyboard navigation).
    StepSection(i32),
    /// The deferred reset for the transition issued with this generation
    /// came due. Ignored when a newer transition superseded it.
    TransitionElapsed(u64),
    /// Result of opening an external link in the system browser.
    LinkOpened(Result<(), String>),
    /// Periodic tick driving notification auto-dismiss.
    Tick,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional content directory override (profile, works, posts).
    /// Takes precedence over `ICED_FOLIO_CONTENT_DIR` environment variable.
    pub content_dir: Option<String>,
}
