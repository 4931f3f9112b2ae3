// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the toast playground.
//!
//! The `App` struct wires together the notification manager, the
//! diagnostics collector, and the persisted theme preference, and
//! translates messages into state changes. Policy decisions (tick
//! cadence, config persistence) stay close to the update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::diagnostics::DiagnosticsCollector;
use crate::notifications;
use crate::ui::theming::ThemeMode;
use iced::{Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: f32 = 520.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 560.0;

/// Root Iced application state bridging the notification manager,
/// diagnostics, and persisted preferences.
pub struct App {
    /// Toast notification manager; the single owner of all toast state.
    notifications: notifications::Manager,
    /// Diagnostics collector, drained on each update cycle.
    diagnostics: DiagnosticsCollector,
    /// Current theme preference.
    theme_mode: ThemeMode,
}

impl App {
    /// Builds the initial application state.
    ///
    /// The theme preference resolves CLI flag > persisted config > default.
    pub fn boot(flags: Flags) -> (Self, Task<Message>) {
        let persisted = config::load().unwrap_or_default();
        let theme_mode = flags
            .theme
            .or(persisted.theme)
            .unwrap_or_default();

        let diagnostics = DiagnosticsCollector::default();
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        (
            Self {
                notifications,
                diagnostics,
                theme_mode,
            },
            Task::none(),
        )
    }

    /// Window title.
    pub fn title(&self) -> String {
        String::from("IcedToast Playground")
    }

    /// Processes a top-level message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    /// Renders the playground.
    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Active subscriptions: a periodic tick while toasts are visible.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    /// Resolves the effective Iced theme from the current mode.
    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }
}
