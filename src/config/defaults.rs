// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: visible capacity, default duration, tick cadence
//! - **Diagnostics**: event buffer capacity bounds

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of notifications visible at once. Adding beyond this
/// evicts the oldest visible notification.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 5;

/// Default auto-dismiss duration (in milliseconds) for notifications that
/// don't specify one. A duration of zero means "persist until dismissed".
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5_000;

/// Interval (in milliseconds) between auto-dismiss deadline checks while
/// notifications are visible.
pub const NOTIFICATION_TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostics event buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1_000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;
