// SPDX-License-Identifier: MPL-2.0
//! Lifecycle tests driving the notification manager the way the
//! application does: adds and removals interleaved with clock advances.

use iced_toast::notifications::{
    Manager, MockClock, Notification, NotificationId, NotificationOptions, Severity,
};
use std::time::{Duration, Instant};

fn manager_with_clock() -> (Manager, MockClock) {
    let clock = MockClock::new(Instant::now());
    let manager = Manager::with_clock(clock.clone());
    (manager, clock)
}

fn titles(manager: &Manager) -> Vec<String> {
    manager
        .visible()
        .map(|n| n.title().unwrap_or("").to_string())
        .collect()
}

#[test]
fn capacity_holds_across_interleaved_operations() {
    let (mut manager, clock) = manager_with_clock();
    let mut ids: Vec<NotificationId> = Vec::new();

    for i in 0..30 {
        ids.push(manager.add(
            NotificationOptions::new()
                .title(format!("n{i}"))
                .duration(Duration::from_millis(250 * (i + 1))),
        ));
        assert!(manager.visible_count() <= 5);

        if i % 7 == 0 {
            clock.advance(Duration::from_millis(300));
            manager.tick();
        }
        if i % 11 == 0 {
            manager.remove(ids[i as usize / 2]);
        }
        assert!(manager.visible_count() <= 5);
    }
}

#[test]
fn manual_removal_before_deadline_prevents_auto_dismiss() {
    let (mut manager, clock) = manager_with_clock();

    let id = manager.add(NotificationOptions::new().duration(Duration::from_millis(5000)));
    let witness = manager.add(NotificationOptions::new().duration(Duration::ZERO));

    // Remove at t=1000ms, then advance well past the original deadline.
    clock.advance(Duration::from_millis(1000));
    manager.remove(id);

    clock.advance(Duration::from_millis(10_000));
    manager.tick();

    assert_eq!(manager.visible_count(), 1);
    assert_eq!(
        manager.visible().next().map(Notification::id),
        Some(witness)
    );
}

#[test]
fn persistent_toast_survives_arbitrary_time() {
    let (mut manager, clock) = manager_with_clock();
    manager.add(NotificationOptions::new().duration(Duration::ZERO));

    for _ in 0..10 {
        clock.advance(Duration::from_secs(86_400));
        manager.tick();
    }

    assert_eq!(manager.visible_count(), 1);
}

#[test]
fn clear_leaves_no_pending_deadlines() {
    let (mut manager, clock) = manager_with_clock();
    for i in 0..5 {
        manager.add(
            NotificationOptions::new()
                .title(format!("n{i}"))
                .duration(Duration::from_secs(2)),
        );
    }

    manager.clear();
    assert!(manager.is_empty());

    clock.advance(Duration::from_secs(3600));
    manager.tick();
    assert!(manager.is_empty());
}

#[test]
fn convenience_severity_overrides_conflicting_extra() {
    let (mut manager, _clock) = manager_with_clock();

    manager.error(
        "T",
        Some("M"),
        NotificationOptions::new().severity(Severity::Info),
    );

    let n = manager.visible().next().expect("toast present");
    assert_eq!(n.severity(), Severity::Error);
    assert_eq!(n.title(), Some("T"));
    assert_eq!(n.message(), Some("M"));
}

#[test]
fn full_session_scenario() {
    let (mut manager, clock) = manager_with_clock();

    // Two persistent toasts, in order.
    let id1 = manager.add(
        NotificationOptions::new()
            .title("A")
            .duration(Duration::ZERO),
    );
    let _id2 = manager.add(
        NotificationOptions::new()
            .title("B")
            .duration(Duration::ZERO),
    );
    assert_eq!(titles(&manager), vec!["A", "B"]);

    // A timed toast expires on its own.
    manager.add(
        NotificationOptions::new()
            .title("C")
            .duration(Duration::from_secs(3)),
    );
    clock.advance(Duration::from_secs(4));
    manager.tick();
    assert_eq!(titles(&manager), vec!["A", "B"]);

    // Explicit removal keeps the rest in order.
    manager.remove(id1);
    assert_eq!(titles(&manager), vec!["B"]);

    manager.clear();
    assert!(manager.is_empty());
}
