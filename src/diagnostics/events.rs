// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the events captured during application usage:
//! user actions from the playground controls and the warning/error
//! notifications surfaced through the manager.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Trigger a toast from the playground controls.
    TriggerToast {
        /// Severity name (`info`, `success`, `warning`, `error`).
        severity: String,
    },

    /// Dismiss a toast through its close affordance.
    DismissToast,

    /// Remove every visible toast.
    ClearToasts,

    /// Change the theme preference.
    SwitchTheme {
        /// Selected mode (`light`, `dark`, `system`).
        mode: String,
    },
}

/// A warning surfaced to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub message: String,
}

impl WarningEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An error surfaced to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub message: String,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The kind of a captured diagnostic event.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    /// A user interaction.
    UserAction { action: UserAction },
    /// A warning notification was shown.
    Warning { event: WarningEvent },
    /// An error notification was shown.
    Error { event: ErrorEvent },
}

/// A diagnostic event with its capture time.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    /// When the event was captured (monotonic).
    pub timestamp: Instant,
    /// What happened.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}
