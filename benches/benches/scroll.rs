// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use understory_scroll_geometry::{
    AnchorDescriptor, GeometrySample, Orientation, compute_progress, find_most_visible,
};
use understory_scroll_snooper::{SnoopEvent, SnoopOptions, SnoopSession};

const VIEWPORT: Size = Size::new(1280.0, 800.0);

fn sections(count: u32, height: f64) -> Vec<Option<Rect>> {
    (0..count)
        .map(|i| {
            let top = f64::from(i) * height;
            Some(Rect::new(0.0, top, 1280.0, top + height))
        })
        .collect()
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_scroll_geometry");

    let element = Some(Rect::new(0.0, 1000.0, 600.0, 1400.0));
    let start: AnchorDescriptor = "top 75%".parse().expect("valid descriptor");
    let end: AnchorDescriptor = "bottom 200px".parse().expect("valid descriptor");
    group.bench_function("compute_progress", |b| {
        let mut y = 0.0;
        b.iter(|| {
            y = (y + 7.0) % 2000.0;
            black_box(compute_progress(
                element,
                VIEWPORT,
                Vec2::new(0.0, y),
                &start,
                &end,
                Orientation::Vertical,
            ))
        });
    });

    for &count in &[8_u32, 64, 512] {
        let targets = sections(count, 600.0);
        group.bench_function(format!("find_most_visible(n={count})"), |b| {
            b.iter(|| {
                black_box(find_most_visible(
                    targets.iter().copied(),
                    100.0,
                    VIEWPORT,
                    Vec2::new(0.0, 1750.0),
                    Orientation::Vertical,
                ))
            });
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_scroll_snooper");

    let samples: Vec<GeometrySample> = (0..240)
        .map(|i| {
            GeometrySample::single(
                VIEWPORT,
                Vec2::new(0.0, f64::from(i) * 10.0),
                Some(Rect::new(0.0, 1000.0, 600.0, 1400.0)),
            )
        })
        .collect();

    group.bench_function("progress_session(ticks=240)", |b| {
        b.iter_batched(
            || SnoopSession::new(SnoopOptions::new().with_visibility(true)),
            |mut session| {
                let mut events: Vec<SnoopEvent> = Vec::new();
                for sample in &samples {
                    let _ = session.update(sample, &mut events);
                }
                black_box(events);
            },
            BatchSize::SmallInput,
        );
    });

    // Same sample every tick: measures the debounce fast path.
    let still = samples[50].clone();
    group.bench_function("debounced_tick", |b| {
        let mut session = SnoopSession::new(SnoopOptions::new());
        let _ = session.update(&still, &mut ());
        b.iter(|| black_box(session.update(&still, &mut ())));
    });

    let group_samples: Vec<GeometrySample> = (0..240)
        .map(|i| {
            let scroll = Vec2::new(0.0, f64::from(i) * 25.0);
            GeometrySample::group(VIEWPORT, scroll, sections(16, 600.0))
        })
        .collect();
    group.bench_function("most_visible_session(n=16,ticks=240)", |b| {
        b.iter_batched(
            || SnoopSession::new(SnoopOptions::new().with_most_visible(100.0)),
            |mut session| {
                let mut events: Vec<SnoopEvent> = Vec::new();
                for sample in &group_samples {
                    let _ = session.update(sample, &mut events);
                }
                black_box(events);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_session);
criterion_main!(benches);
