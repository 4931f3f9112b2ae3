// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting in-process activity events.
//!
//! This module provides infrastructure for capturing diagnostic events
//! during application usage and storing them in a memory-bounded circular
//! buffer. The notification manager logs warning- and error-severity
//! notifications here when a handle is attached; the playground logs its
//! user actions.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: The captured event types
//! - [`DiagnosticsCollector`]: Owns the buffer; drained on UI ticks
//! - [`DiagnosticsHandle`]: Cheap-to-clone, non-blocking event sender

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction, WarningEvent};
