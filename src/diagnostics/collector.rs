// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from
//! various parts of the application and stores them in a circular buffer.

use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction,
    WarningEvent,
};

/// Default channel capacity for event buffering.
/// This allows some buffering without excessive memory usage.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across components.
/// Events are sent via a bounded channel to avoid blocking the UI thread;
/// when the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a user action event. Non-blocking; drops the event if the
    /// channel is full.
    pub fn log_action(&self, action: UserAction) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a warning event. Non-blocking.
    pub fn log_warning(&self, warning_event: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: warning_event,
        });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an error event. Non-blocking.
    pub fn log_error(&self, error_event: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event: error_event });
        let _ = self.event_tx.try_send(event);
    }
}

/// Central collector for diagnostic events.
///
/// The collector receives events through a channel and stores them in a
/// memory-bounded circular buffer. Old events are automatically evicted
/// when the buffer reaches capacity.
pub struct DiagnosticsCollector {
    /// Circular buffer storing diagnostic events.
    buffer: CircularBuffer<DiagnosticEvent>,
    /// Receiver for incoming events.
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
    /// When collection started (monotonic).
    collection_started_at: Instant,
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    ///
    /// Handles are cheap to clone and can be distributed to different
    /// parts of the application.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each UI tick) to drain the
    /// event channel and store events in the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns the number of events currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Clears all stored events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns how long collection has been running.
    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.collection_started_at.elapsed()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_flow_from_handle_to_buffer() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning(WarningEvent::new("low disk space"));
        handle.log_error(ErrorEvent::new("save failed"));
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert!(matches!(kinds[0], DiagnosticEventKind::Warning { .. }));
        assert!(matches!(kinds[1], DiagnosticEventKind::Error { .. }));
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..(DEFAULT_CHANNEL_CAPACITY + 50) {
            handle.log_action(UserAction::DismissToast);
        }

        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn clear_resets_the_buffer() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::ClearToasts);
        collector.process_pending();
        assert_eq!(collector.len(), 1);

        collector.clear();
        assert!(collector.is_empty());
    }

    #[test]
    fn handles_survive_cloning() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let clone = handle.clone();

        clone.log_action(UserAction::DismissToast);
        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }
}
