// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is an animated portfolio and blog presenter built with the
//! Iced GUI framework.
//!
//! It presents content panels (home, works, experience, contact) driven by a
//! small navigation state controller, renders a markdown-backed blog, and
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.2.0")]

pub mod app;
pub mod content;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod navigation;
pub mod ui;
