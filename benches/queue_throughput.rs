// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the presentation controller.
//!
//! Measures the performance of:
//! - Enqueueing a burst of messages behind a displayed one
//! - Cycling every queued message through its full lifecycle
//! - Resolving automatic durations

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;
use toast_queue::message::{DisplayDuration, DurationPolicy, Message, MessageKind};
use toast_queue::presentation::{MessageController, State};
use toast_queue::testing::{ManualTimer, RecordingRenderer};

type Controller = MessageController<RecordingRenderer, ManualTimer>;

fn burst(count: usize) -> Vec<Message> {
    (0..count)
        .map(|i| {
            Message::builder(format!("message {i}"), MessageKind::Default)
                .subtitle("Saved to the project folder")
                .build()
        })
        .collect()
}

/// Drives animations and timers until nothing is on screen.
fn drain(controller: &mut Controller) {
    while let Some(id) = controller.current().map(Message::id) {
        match controller.state() {
            State::Displaying => {
                if let Some(done) = controller.renderer_mut().take_entrance(id) {
                    controller.complete(done);
                }
            }
            State::Shown => {
                for token in controller.timer_mut().advance(Duration::from_secs(60)) {
                    controller.on_timer(token);
                }
            }
            State::Dismissing => {
                if let Some(done) = controller.renderer_mut().take_exit(id) {
                    controller.complete(done);
                }
            }
            State::Idle => break,
        }
    }
}

/// Benchmark enqueueing behind a displayed message.
fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_throughput");

    for count in [16usize, 256] {
        group.bench_with_input(BenchmarkId::new("enqueue", count), &count, |b, &count| {
            b.iter_batched(
                || burst(count),
                |messages| {
                    let mut controller =
                        MessageController::new(RecordingRenderer::new(), ManualTimer::new());
                    for message in messages {
                        controller.display_or_enqueue(message);
                    }
                    black_box(controller.queued_count());
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark the full display/shown/dismiss cycle for every message.
fn bench_full_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_throughput");

    for count in [16usize, 256] {
        group.bench_with_input(BenchmarkId::new("full_cycle", count), &count, |b, &count| {
            b.iter_batched(
                || burst(count),
                |messages| {
                    let mut controller =
                        MessageController::new(RecordingRenderer::new(), ManualTimer::new());
                    for message in messages {
                        controller.display_or_enqueue(message);
                    }
                    drain(&mut controller);
                    black_box(controller.state());
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark automatic duration resolution for short and long subtitles.
fn bench_resolve_duration(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_throughput");
    let policy = DurationPolicy::default();
    let long = "x".repeat(2_000);

    group.bench_function("resolve_short", |b| {
        b.iter(|| black_box(policy.resolve(DisplayDuration::Automatic, Some("Done"))));
    });
    group.bench_function("resolve_long", |b| {
        b.iter(|| black_box(policy.resolve(DisplayDuration::Automatic, Some(&long))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_enqueue,
    bench_full_cycle,
    bench_resolve_duration
);
criterion_main!(benches);
