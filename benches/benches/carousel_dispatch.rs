// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use reel_engine::{Action, Carousel, CarouselItem, CarouselOptions, PointerKind};
use reel_view::{markup, render};

fn items(n: u32) -> Vec<CarouselItem> {
    (0..n)
        .map(|i| CarouselItem::new(i, format!("Card {i}"), "A short description"))
        .collect()
}

fn mounted(n: u32, width: f64) -> Carousel {
    let mut c = Carousel::new(items(n), CarouselOptions::default()).unwrap();
    let _ = c.mount(Duration::ZERO, width);
    c
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Scroll positions spaced like a fling: 8ms apart, drifting right.
fn fling(count: usize, max_left: f64) -> Vec<(Duration, f64)> {
    let mut rng = Rng::new(0x5eed_cafe);
    (0..count)
        .map(|i| {
            let t = Duration::from_millis(10_000 + 8 * i as u64);
            (t, rng.next_f64() * max_left)
        })
        .collect()
}

fn bench_autoplay(c: &mut Criterion) {
    let mut group = c.benchmark_group("autoplay");
    for &n in &[5_u32, 50, 500] {
        group.throughput(Throughput::Elements(1_000));
        group.bench_function(format!("advance_1000_ticks_n{n}"), |b| {
            b.iter_batched(
                || mounted(n, 1280.0),
                |mut carousel| {
                    let mut fired = 0;
                    for _ in 0..1_000 {
                        let Some(at) = carousel.next_deadline() else {
                            break;
                        };
                        fired += carousel.advance(at).len();
                    }
                    black_box(fired)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_scroll_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_reconcile");
    for &n in &[10_u32, 100, 1_000] {
        let events = fling(1_000, f64::from(n) * 276.0);
        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_function(format!("natural_n{n}"), |b| {
            b.iter_batched(
                || mounted(n, 600.0),
                |mut carousel| {
                    let mut changes = 0;
                    for &(t, left) in &events {
                        changes += carousel.scroll(t, left).len();
                    }
                    black_box(changes)
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("paging_n{n}"), |b| {
            b.iter_batched(
                || mounted(n, 1280.0),
                |mut carousel| {
                    let mut changes = 0;
                    for &(t, left) in &events {
                        changes += carousel.scroll(t, left).len();
                    }
                    black_box(changes)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    c.bench_function("drag_gesture_paging_n50", |b| {
        b.iter_batched(
            || mounted(50, 1280.0),
            |mut carousel| {
                let t = Duration::from_millis(100);
                let kind = PointerKind::Mouse;
                let _ = carousel.dispatch(t, Action::PointerDown { x: 800.0, kind });
                for step in 1..=30 {
                    let x = 800.0 - f64::from(step) * 5.0;
                    let _ = carousel.dispatch(t, Action::PointerMove { x, kind });
                }
                black_box(carousel.dispatch(t, Action::PointerUp { x: 650.0, kind }))
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for &n in &[5_u32, 50, 500] {
        let carousel = mounted(n, 1280.0);
        let snapshot = carousel.snapshot();
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("frame_n{n}"), |b| {
            b.iter(|| black_box(render(&snapshot, carousel.items(), carousel.options())));
        });
        let frame = render(&snapshot, carousel.items(), carousel.options()).unwrap();
        group.bench_function(format!("html_n{n}"), |b| {
            b.iter(|| {
                let mut out = String::with_capacity(256 * n as usize);
                markup::write_html(&frame, carousel.items(), &mut out).unwrap();
                black_box(out)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_autoplay,
    bench_scroll_reconcile,
    bench_drag,
    bench_render
);
criterion_main!(benches);
