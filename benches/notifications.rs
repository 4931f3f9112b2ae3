// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification manager operations.
//!
//! Measures the performance of:
//! - Adding notifications (including eviction churn at capacity)
//! - Deadline checks with many pending timers
//! - Removal by ID

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toast::notifications::{Manager, MockClock, NotificationOptions};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark adding notifications past capacity.
///
/// Every add beyond the fifth evicts the oldest entry, so this measures
/// the steady-state cost of a busy notification stream.
fn bench_add_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("notifications");

    group.bench_function("add_with_eviction", |b| {
        b.iter(|| {
            let mut manager = Manager::new();
            for i in 0..100 {
                manager.add(NotificationOptions::new().title(format!("toast {i}")));
            }
            black_box(manager.visible_count());
        });
    });

    group.finish();
}

/// Benchmark a tick pass over visible notifications with pending timers.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("notifications");

    group.bench_function("tick_no_expiry", |b| {
        let clock = MockClock::new(Instant::now());
        let mut manager = Manager::with_clock(clock.clone());
        for i in 0..5 {
            manager.add(
                NotificationOptions::new()
                    .title(format!("toast {i}"))
                    .duration(Duration::from_secs(3600)),
            );
        }

        b.iter(|| {
            manager.tick();
            black_box(manager.visible_count());
        });
    });

    group.finish();
}

/// Benchmark removal by ID from a full collection.
fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("notifications");

    group.bench_function("add_remove_cycle", |b| {
        let mut manager = Manager::new();

        b.iter(|| {
            let id = manager.add(NotificationOptions::new().title("ephemeral"));
            manager.remove(id);
            black_box(manager.is_empty());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_add_with_eviction, bench_tick, bench_remove);
criterion_main!(benches);
