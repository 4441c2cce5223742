use criterion::{Criterion, criterion_group, criterion_main};
use crosshair_rs::api::CrosshairCursor;
use crosshair_rs::core::{Margin, PlotArea, PointerPosition, PointerSnapshot};
use crosshair_rs::render::{RecordingSurface, paint_crosshair_lines};
use std::hint::black_box;

#[derive(Debug, Clone, Copy)]
struct Sample {
    time: f64,
}

fn sample_time(item: &Sample) -> f64 {
    item.time
}

fn bench_guide_line_resolution(c: &mut Criterion) {
    let cursor: CrosshairCursor<Sample> = CrosshairCursor::default();
    let item = Sample { time: 61.8 };
    let scale = |value: f64| value * 2.0;
    let snapshot = PointerSnapshot::new(
        PointerPosition::new(120.0, 80.0),
        PlotArea::new(1920.0, 1080.0),
        2.0,
        Margin::new(10.0, 20.0),
        &scale,
        &sample_time,
    )
    .with_current_item(&item);

    c.bench_function("guide_line_resolution", |b| {
        b.iter(|| {
            let _ = cursor.resolve_lines(black_box(&snapshot));
        })
    });
}

fn bench_guide_line_paint_pass(c: &mut Criterion) {
    let cursor: CrosshairCursor<Sample> = CrosshairCursor::default();
    let item = Sample { time: 61.8 };
    let scale = |value: f64| value * 2.0;
    let snapshot = PointerSnapshot::new(
        PointerPosition::new(120.0, 80.0),
        PlotArea::new(1920.0, 1080.0),
        2.0,
        Margin::new(10.0, 20.0),
        &scale,
        &sample_time,
    )
    .with_current_item(&item);
    let lines = cursor.resolve_lines(&snapshot).expect("tracking lines");

    let mut surface = RecordingSurface::new();
    c.bench_function("guide_line_paint_pass", |b| {
        b.iter(|| {
            surface.clear();
            paint_crosshair_lines(
                black_box(&mut surface),
                black_box(&lines),
                Margin::new(10.0, 20.0),
                2.0,
            )
            .expect("paint should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_guide_line_resolution,
    bench_guide_line_paint_pass
);
criterion_main!(benches);
