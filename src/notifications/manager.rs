// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered collection of visible notifications and
//! the registry of pending auto-dismiss timers. It enforces the visible
//! capacity with oldest-first eviction and funnels every removal path
//! (explicit dismiss, eviction, expiry, clear) through [`Manager::remove`],
//! so cancellation and idempotence live in exactly one place.

use super::clock::{Clock, SystemClock};
use super::notification::{Notification, NotificationId, NotificationOptions, Severity};
use crate::config::MAX_VISIBLE_NOTIFICATIONS;
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, WarningEvent};
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Messages emitted by the presentation layer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Remove every notification.
    ClearAll,
    /// Check auto-dismiss deadlines.
    Tick,
}

/// A scheduled auto-dismiss deadline.
///
/// An entry exists in the registry iff its notification is visible, was
/// created with a positive duration, and has neither fired nor been
/// cancelled. Dropping the entry is cancellation: a dropped deadline can
/// never fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTimer {
    fires_at: Instant,
}

/// Owns the visible notification collection and the timer registry.
///
/// One manager exists per application session, held by the application
/// state and handed to the presentation layer read-only. Tests create
/// their own instances, usually via [`Manager::with_clock`].
#[derive(Debug)]
pub struct Manager {
    /// Currently visible notifications, oldest first.
    visible: VecDeque<Notification>,
    /// Pending auto-dismiss deadlines keyed by notification ID.
    timers: HashMap<NotificationId, PendingTimer>,
    /// Time source for scheduling and expiry checks.
    clock: Box<dyn Clock>,
    /// Optional diagnostics handle for logging warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates an empty manager using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }

    /// Creates an empty manager with an injected clock.
    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            visible: VecDeque::new(),
            timers: HashMap::new(),
            clock: Box::new(clock),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for logging warning and error
    /// notifications.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Adds a notification and returns its ID.
    ///
    /// If the collection is already at capacity, the oldest visible
    /// notification is evicted first, so the collection never exceeds
    /// [`MAX_VISIBLE_NOTIFICATIONS`] — not even transiently. Notifications
    /// with a positive duration get an auto-dismiss deadline recorded in
    /// the timer registry.
    ///
    /// Never fails: malformed or partial options are defaulted, not
    /// rejected.
    pub fn add(&mut self, options: NotificationOptions) -> NotificationId {
        let notification = Notification::from_options(options);
        let id = notification.id();

        if let Some(handle) = &self.diagnostics {
            let text = notification
                .title()
                .or_else(|| notification.message())
                .unwrap_or("")
                .to_owned();
            match notification.severity() {
                Severity::Warning => handle.log_warning(WarningEvent::new(text)),
                Severity::Error => handle.log_error(ErrorEvent::new(text)),
                Severity::Info | Severity::Success => {}
            }
        }

        if self.visible.len() >= MAX_VISIBLE_NOTIFICATIONS {
            if let Some(oldest) = self.visible.front().map(Notification::id) {
                self.remove(oldest);
            }
        }

        let duration = notification.duration();
        self.visible.push_back(notification);
        if !duration.is_zero() {
            self.timers.insert(
                id,
                PendingTimer {
                    fires_at: self.clock.now() + duration,
                },
            );
        }

        id
    }

    /// Removes a notification by ID.
    ///
    /// Cancels its pending timer (if any) before dropping the collection
    /// entry; the relative order of the remaining notifications is
    /// preserved. Unknown or already-removed IDs are a no-op, never an
    /// error — the auto-dismiss path relies on this idempotence.
    pub fn remove(&mut self, id: NotificationId) {
        let Some(pos) = self.visible.iter().position(|n| n.id() == id) else {
            return;
        };
        self.timers.remove(&id);
        self.visible.remove(pos);
    }

    /// Removes every notification and cancels every pending timer.
    ///
    /// Idempotent: clearing an empty manager has no observable effect.
    pub fn clear(&mut self) {
        self.timers.clear();
        self.visible.clear();
    }

    /// Checks auto-dismiss deadlines, removing every notification whose
    /// deadline has passed.
    ///
    /// Driven by the host's periodic tick; expiry flows through
    /// [`Manager::remove`] like any other removal.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| {
                self.timers
                    .get(&n.id())
                    .is_some_and(|timer| timer.fires_at <= now)
            })
            .map(Notification::id)
            .collect();

        for id in expired {
            self.remove(id);
        }
    }

    /// Handles a presentation-layer message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => self.remove(*id),
            Message::ClearAll => self.clear(),
            Message::Tick => self.tick(),
        }
    }

    /// Adds a success notification with a fixed severity and title.
    pub fn success(
        &mut self,
        title: impl Into<String>,
        message: Option<&str>,
        extra: NotificationOptions,
    ) -> NotificationId {
        self.add_with_severity(Severity::Success, title.into(), message, extra)
    }

    /// Adds an error notification with a fixed severity and title.
    pub fn error(
        &mut self,
        title: impl Into<String>,
        message: Option<&str>,
        extra: NotificationOptions,
    ) -> NotificationId {
        self.add_with_severity(Severity::Error, title.into(), message, extra)
    }

    /// Adds a warning notification with a fixed severity and title.
    pub fn warning(
        &mut self,
        title: impl Into<String>,
        message: Option<&str>,
        extra: NotificationOptions,
    ) -> NotificationId {
        self.add_with_severity(Severity::Warning, title.into(), message, extra)
    }

    /// Adds an info notification with a fixed severity and title.
    pub fn info(
        &mut self,
        title: impl Into<String>,
        message: Option<&str>,
        extra: NotificationOptions,
    ) -> NotificationId {
        self.add_with_severity(Severity::Info, title.into(), message, extra)
    }

    /// Shared tail of the convenience methods. The fixed severity, title,
    /// and message always win over conflicting values in `extra`.
    fn add_with_severity(
        &mut self,
        severity: Severity,
        title: String,
        message: Option<&str>,
        extra: NotificationOptions,
    ) -> NotificationId {
        self.add(NotificationOptions {
            severity: Some(severity),
            title: Some(title),
            message: message.map(str::to_owned),
            ..extra
        })
    }

    /// Returns the currently visible notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns whether no notifications are visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Returns whether any notifications are visible.
    ///
    /// The application gates its tick subscription on this, so no timers
    /// are polled while nothing is showing.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Returns the number of pending auto-dismiss timers.
    #[cfg(test)]
    fn pending_timer_count(&self) -> usize {
        self.timers.len()
    }
}
