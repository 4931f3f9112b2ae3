// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::config::{self, Config};
use crate::diagnostics::{UserAction, WarningEvent};
use crate::notifications::{self, NotificationOptions, Severity};
use iced::Task;
use std::time::Duration;

/// Handles a top-level message and returns any follow-up task.
pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    // Drain queued diagnostic events on every cycle so the footer count
    // stays current even while no tick subscription is running.
    app.diagnostics.process_pending();

    match message {
        Message::Notification(inner) => {
            if matches!(inner, notifications::Message::Dismiss(_)) {
                app.diagnostics.handle().log_action(UserAction::DismissToast);
            }
            app.notifications.handle_message(&inner);
        }
        Message::Tick(_) => {
            app.notifications
                .handle_message(&notifications::Message::Tick);
        }
        Message::ShowInfo => {
            log_trigger(app, Severity::Info);
            app.notifications.info(
                "Heads up",
                Some("Something routine happened."),
                NotificationOptions::new(),
            );
        }
        Message::ShowSuccess => {
            log_trigger(app, Severity::Success);
            app.notifications.success(
                "Saved",
                Some("Your changes were saved."),
                NotificationOptions::new(),
            );
        }
        Message::ShowWarning => {
            log_trigger(app, Severity::Warning);
            app.notifications.warning(
                "Storage almost full",
                Some("90% of your quota is in use."),
                NotificationOptions::new(),
            );
        }
        Message::ShowError => {
            log_trigger(app, Severity::Error);
            app.notifications.error(
                "Upload failed",
                Some("The server rejected the file."),
                NotificationOptions::new(),
            );
        }
        Message::ShowPersistent => {
            log_trigger(app, Severity::Info);
            app.notifications.add(
                NotificationOptions::new()
                    .title("Background job running")
                    .message("This toast stays until dismissed.")
                    .duration(Duration::ZERO),
            );
        }
        Message::ClearAll => {
            app.diagnostics.handle().log_action(UserAction::ClearToasts);
            app.notifications
                .handle_message(&notifications::Message::ClearAll);
        }
        Message::ThemeSelected(mode) => {
            app.theme_mode = mode;
            app.diagnostics.handle().log_action(UserAction::SwitchTheme {
                mode: mode.to_string().to_lowercase(),
            });

            let config = Config { theme: Some(mode) };
            if let Err(err) = config::save(&config) {
                app.diagnostics
                    .handle()
                    .log_warning(WarningEvent::new(format!(
                        "Failed to save settings: {err}"
                    )));
            }
        }
    }

    Task::none()
}

fn log_trigger(app: &App, severity: Severity) {
    let name = match severity {
        Severity::Info => "info",
        Severity::Success => "success",
        Severity::Warning => "warning",
        Severity::Error => "error",
    };
    app.diagnostics.handle().log_action(UserAction::TriggerToast {
        severity: name.to_string(),
    });
}
