use crosshair_rs::api::{CrosshairCursor, CrosshairCursorConfig, default_x_resolver};
use crosshair_rs::core::{Margin, PlotArea, PointerPosition, PointerSnapshot};
use crosshair_rs::render::{Color, LineStrokeStyle, RecordingSurface};

#[derive(Debug, Clone, Copy)]
struct Sample {
    time: f64,
}

fn double(value: f64) -> f64 {
    value * 2.0
}

fn sample_time(item: &Sample) -> f64 {
    item.time
}

fn plot_snapshot<'a>(
    pointer: (f64, f64),
    x_scale: &'a dyn Fn(f64) -> f64,
    x_accessor: &'a dyn Fn(&Sample) -> f64,
) -> PointerSnapshot<'a, Sample> {
    PointerSnapshot::new(
        PointerPosition::new(pointer.0, pointer.1),
        PlotArea::new(400.0, 300.0),
        1.0,
        Margin::zero(),
        x_scale,
        x_accessor,
    )
}

#[test]
fn no_hovered_item_produces_no_segments() {
    let cursor: CrosshairCursor<Sample> = CrosshairCursor::default();
    let snapshot = plot_snapshot((120.0, 80.0), &double, &sample_time);

    assert!(cursor.resolve_lines(&snapshot).is_none());

    let mut surface = RecordingSurface::new();
    cursor.draw(&mut surface, &snapshot).expect("hidden draw");
    assert!(surface.ops.is_empty());
}

#[test]
fn visibility_off_produces_no_segments() {
    let cursor: CrosshairCursor<Sample> = CrosshairCursor::default();
    let item = Sample { time: 61.8 };
    let snapshot = plot_snapshot((120.0, 80.0), &double, &sample_time)
        .with_current_item(&item)
        .with_visible(false);

    assert!(cursor.resolve_lines(&snapshot).is_none());
}

#[test]
fn raw_pointer_tracking_spans_full_plot() {
    let config = CrosshairCursorConfig::default().with_snap_x(false);
    let cursor: CrosshairCursor<Sample> = CrosshairCursor::new(config);
    let item = Sample { time: 61.8 };
    let snapshot = plot_snapshot((120.0, 80.0), &double, &sample_time).with_current_item(&item);

    let [horizontal, vertical] = cursor.resolve_lines(&snapshot).expect("tracking lines");

    assert_eq!(
        (horizontal.x1, horizontal.y1, horizontal.x2, horizontal.y2),
        (0.0, 80.5, 400.0, 80.5)
    );
    assert_eq!(
        (vertical.x1, vertical.y1, vertical.x2, vertical.y2),
        (120.0, 0.0, 120.0, 300.0)
    );
}

#[test]
fn snapping_rounds_the_scaled_item_position() {
    let cursor: CrosshairCursor<Sample> = CrosshairCursor::default();
    // 61.8 maps to 123.6, which lands on the 124 pixel column.
    let item = Sample { time: 61.8 };
    let snapshot = plot_snapshot((120.0, 80.0), &double, &sample_time).with_current_item(&item);

    let [_, vertical] = cursor.resolve_lines(&snapshot).expect("tracking lines");
    assert_eq!(
        (vertical.x1, vertical.y1, vertical.x2, vertical.y2),
        (124.0, 0.0, 124.0, 300.0)
    );
}

#[test]
fn custom_resolver_replaces_snap_logic_entirely() {
    let cursor: CrosshairCursor<Sample> =
        CrosshairCursor::new(CrosshairCursorConfig::default().with_snap_x(true))
            .with_custom_x(Box::new(|_, _| 42.0));
    let item = Sample { time: 61.8 };
    let snapshot = plot_snapshot((120.0, 80.0), &double, &sample_time).with_current_item(&item);

    let [_, vertical] = cursor.resolve_lines(&snapshot).expect("tracking lines");
    assert_eq!(vertical.x1, 42.0);
    assert_eq!(vertical.x2, 42.0);
}

#[test]
fn default_resolver_falls_back_to_pointer_without_item() {
    let config = CrosshairCursorConfig::default();
    let snapshot = plot_snapshot((77.3, 10.0), &double, &sample_time);

    assert_eq!(default_x_resolver(&config, &snapshot), 77.3);
}

#[test]
fn segments_inherit_configured_styling() {
    let config = CrosshairCursorConfig::default()
        .with_stroke(Color::rgb(0.2, 0.3, 0.4))
        .with_stroke_opacity(0.6)
        .with_stroke_style(LineStrokeStyle::ShortDot);
    let cursor: CrosshairCursor<Sample> = CrosshairCursor::new(config);
    let item = Sample { time: 61.8 };
    let snapshot = plot_snapshot((120.0, 80.0), &double, &sample_time).with_current_item(&item);

    let lines = cursor.resolve_lines(&snapshot).expect("tracking lines");
    for line in lines {
        assert_eq!(line.stroke, Color::rgb(0.2, 0.3, 0.4));
        assert_eq!(line.stroke_opacity, 0.6);
        assert_eq!(line.stroke_style, LineStrokeStyle::ShortDot);
    }
}

#[test]
fn resolution_is_deterministic_for_identical_snapshots() {
    let cursor: CrosshairCursor<Sample> = CrosshairCursor::default();
    let item = Sample { time: 61.8 };
    let snapshot = plot_snapshot((120.0, 80.0), &double, &sample_time).with_current_item(&item);

    let first = cursor.resolve_lines(&snapshot).expect("first pass");
    let second = cursor.resolve_lines(&snapshot).expect("second pass");
    assert_eq!(first, second);
}
