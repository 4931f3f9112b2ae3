// SPDX-License-Identifier: MPL-2.0
//! Toast notification core.
//!
//! This module owns every behavioral aspect of toast notifications:
//! the ordered, capacity-bounded collection of visible notifications, the
//! registry of pending auto-dismiss deadlines, and the imperative mutation
//! API (`add`/`remove`/`clear` plus severity convenience methods).
//!
//! # Components
//!
//! - [`notification`] - `Notification` entity, `Severity`, and the
//!   `NotificationOptions` configuration object
//! - [`manager`] - `Manager` owning the collection and timer registry
//! - [`clock`] - `Clock` seam with a system implementation and a mock for
//!   deterministic tests
//!
//! # Usage
//!
//! ```
//! use iced_toast::notifications::{Manager, NotificationOptions, Severity};
//! use std::time::Duration;
//!
//! let mut manager = Manager::new();
//!
//! // Full control through the options object.
//! let id = manager.add(
//!     NotificationOptions::new()
//!         .severity(Severity::Success)
//!         .title("Image saved")
//!         .duration(Duration::from_secs(3)),
//! );
//!
//! // Or the severity shorthands.
//! manager.error("Upload failed", Some("The server rejected the file"), NotificationOptions::new());
//!
//! manager.remove(id);
//! ```
//!
//! The presentation layer observes [`Manager::visible`] read-only and sends
//! removal requests back through [`Manager::handle_message`]; it never
//! mutates the collection directly.

mod clock;
mod manager;
mod notification;

pub use clock::{Clock, MockClock, SystemClock};
pub use manager::{Manager, Message as NotificationMessage, Message};
pub use notification::{Notification, NotificationId, NotificationOptions, Severity};
