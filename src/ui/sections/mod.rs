// SPDX-License-Identifier: MPL-2.0
//! The four content panels of the presentation.
//!
//! Each panel is a pure view over the content library; interaction is
//! limited to opening external links, which the parent application handles.

pub mod contact;
pub mod experience;
pub mod home;
pub mod works;

/// Messages emitted by the content panels.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open an external URL (project link, social profile, mail).
    OpenLink(String),
}
