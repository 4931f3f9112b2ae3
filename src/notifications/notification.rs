// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` entity, the `Severity` enum, and
//! the `NotificationOptions` configuration object consumed by the manager's
//! `add` operation.

use crate::config::DEFAULT_NOTIFICATION_DURATION_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Identifiers are minted from a process-wide counter and are never reused
/// while the process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity classification for a notification.
///
/// Severity determines the accent color and glyph used by the presentation
/// layer; it never affects lifecycle behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral informational message (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// Default auto-dismiss duration applied when `NotificationOptions` leaves
/// the duration unset.
pub(crate) const DEFAULT_DURATION: Duration =
    Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS);

/// Configuration for a new notification.
///
/// Every field is optional; unset fields take defaults when the manager
/// constructs the notification (severity `Info`, duration 5 s, dismissible).
/// A zero duration marks the notification as persistent.
#[derive(Debug, Clone, Default)]
pub struct NotificationOptions {
    pub severity: Option<Severity>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub duration: Option<Duration>,
    pub dismissible: Option<bool>,
}

impl NotificationOptions {
    /// Creates an empty options object; all fields default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the severity.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Sets the title text.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message text.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the auto-dismiss duration. `Duration::ZERO` makes the
    /// notification persist until explicitly removed.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets whether the presentation layer offers a close affordance.
    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }
}

/// A notification tracked by the manager.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title: Option<String>,
    message: Option<String>,
    duration: Duration,
    dismissible: bool,
}

impl Notification {
    /// Constructs a notification from options, applying defaults and minting
    /// a fresh ID. Only the manager creates notifications.
    pub(crate) fn from_options(options: NotificationOptions) -> Self {
        Self {
            id: NotificationId::new(),
            severity: options.severity.unwrap_or_default(),
            title: options.title,
            message: options.message,
            duration: options.duration.unwrap_or(DEFAULT_DURATION),
            dismissible: options.dismissible.unwrap_or(true),
        }
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the title text, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the message text, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the configured auto-dismiss duration. Zero means persistent.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether this notification persists until explicitly removed.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    /// Returns whether the presentation layer offers a close affordance.
    #[must_use]
    pub fn dismissible(&self) -> bool {
        self.dismissible
    }
}
