// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::notifications;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded presentation-layer message (dismiss, clear, tick).
    Notification(notifications::Message),
    /// Periodic tick for auto-dismiss deadline checks.
    Tick(Instant),
    /// Trigger an info toast from the playground.
    ShowInfo,
    /// Trigger a success toast from the playground.
    ShowSuccess,
    /// Trigger a warning toast from the playground.
    ShowWarning,
    /// Trigger an error toast from the playground.
    ShowError,
    /// Trigger a persistent toast that stays until dismissed.
    ShowPersistent,
    /// Remove every visible toast.
    ClearAll,
    /// Theme preference changed.
    ThemeSelected(ThemeMode),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional theme override (`light`, `dark`, `system`). Takes
    /// precedence over the persisted preference.
    pub theme: Option<ThemeMode>,
}
