// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the presentation and
//! blog screens.
//!
//! The `App` struct wires together the domains (navigation, content,
//! localization) and translates messages into side effects like the deferred
//! transition reset or opening external links. The navigator is an ordinary
//! field mutated only inside the update loop and read through snapshots in
//! view code, so navigation state never lives in ambient globals.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::content::Library;
use crate::i18n::fluent::I18n;
use crate::navigation::{unique_title_entries, NavEntry, SectionNavigator};
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::transition::TransitionDuration;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges navigation, content,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Navigation state controller for the sections presentation.
    navigator: SectionNavigator,
    /// Collapsed menu entries, derived once from the section table.
    nav_entries: Vec<NavEntry>,
    /// Loaded site content (profile, works, experience, posts).
    library: Library,
    theme_mode: ThemeMode,
    /// Shared duration of the transition animation and its flag reset.
    transition: TransitionDuration,
    /// Whether the navigation menu body is expanded.
    menu_open: bool,
    /// Post open in the blog reading view.
    selected_post: Option<usize>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("section_index", &self.navigator.section_index())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Portfolio,
            navigator: SectionNavigator::new(Vec::new()),
            nav_entries: Vec::new(),
            library: Library::default(),
            theme_mode: ThemeMode::System,
            transition: TransitionDuration::default(),
            menu_open: true,
            selected_post: None,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from configuration and content, and
    /// optionally kicks off the entry transition for a configured start
    /// section.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone(), flags.content_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.transition = TransitionDuration::new(
            config
                .presentation
                .transition_duration_ms
                .unwrap_or(config::DEFAULT_TRANSITION_DURATION_MS),
        );

        let content_dir = paths::get_content_dir();
        let (library, content_warnings) = Library::load(content_dir.as_deref());
        app.navigator = SectionNavigator::new(library.section_table());
        app.nav_entries = unique_title_entries(app.navigator.sections());
        app.library = library;

        // Show warnings for config/content loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        for key in content_warnings {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        // A configured start section enters through the normal transition
        // path, so the menu stays locked for exactly one animation.
        let start_section = config
            .presentation
            .start_section
            .unwrap_or(config::DEFAULT_START_SECTION);
        let ticket = app.navigator.select_section(start_section);
        let task = update::schedule_transition_reset(&app, ticket);

        (app, task)
    }

    /// Window title, shown by the OS.
    fn title(&self) -> String {
        format!("IcedFolio - {}", self.library.profile.name)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        let snapshot = self.navigator.snapshot();

        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            library: &self.library,
            nav_entries: &self.nav_entries,
            snapshot,
            subsection_count: self
                .navigator
                .subsection_count_for(snapshot.section_index),
            menu_open: self.menu_open,
            selected_post: self.selected_post,
            notifications: &self.notifications,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_tick_subscription(&self.notifications),
        ])
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }
}
