use crate::core::Margin;
use crate::error::OverlayResult;
use crate::render::{CrosshairLine, DrawSurface};

/// Paints resolved guide segments onto the shared canvas.
///
/// The transform is rebuilt from scratch every pass: identity, device-ratio
/// scale, then a half-ratio plus margin translate that anchors the
/// plot-local origin on the pixel grid for crisp 1px strokes. All state
/// changes stay bracketed between `save` and `restore` so sibling overlays
/// on the same canvas observe an untouched surface.
pub fn paint_crosshair_lines<S>(
    surface: &mut S,
    lines: &[CrosshairLine],
    margin: Margin,
    ratio: f64,
) -> OverlayResult<()>
where
    S: DrawSurface + ?Sized,
{
    if lines.is_empty() {
        return Ok(());
    }

    surface.save()?;
    let outcome = paint_unscoped(surface, lines, margin, ratio);
    let restored = surface.restore();
    outcome.and(restored)
}

fn paint_unscoped<S>(
    surface: &mut S,
    lines: &[CrosshairLine],
    margin: Margin,
    ratio: f64,
) -> OverlayResult<()>
where
    S: DrawSurface + ?Sized,
{
    surface.reset_transform();
    surface.scale(ratio, ratio);
    surface.translate(0.5 * ratio + margin.left, 0.5 * ratio + margin.top);

    for line in lines {
        surface.set_stroke_color(line.composited_stroke());
        surface.set_line_width(1.0);
        surface.set_dash(&line.stroke_style.dash_lengths());
        surface.stroke_line(line.x1, line.y1, line.x2, line.y2)?;
    }

    Ok(())
}
