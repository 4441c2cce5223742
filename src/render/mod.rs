mod painter;
mod primitives;
mod recording;

pub use painter::paint_crosshair_lines;
pub use primitives::{Color, CrosshairLine, LineStrokeStyle};
pub use recording::{RecordingSurface, SurfaceOp};

use crate::error::OverlayResult;

/// Contract implemented by any 2D canvas backend the overlay paints through.
///
/// The surface is shared with sibling overlays, so callers bracket every
/// state mutation between `save` and `restore` and never retain the surface
/// beyond a single paint call.
pub trait DrawSurface {
    fn save(&mut self) -> OverlayResult<()>;
    fn restore(&mut self) -> OverlayResult<()>;

    /// Resets any inherited transform to identity.
    fn reset_transform(&mut self);
    fn scale(&mut self, sx: f64, sy: f64);
    fn translate(&mut self, tx: f64, ty: f64);

    /// Restricts subsequent painting to the given rectangle until `restore`.
    fn clip_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);

    /// Alternating on/off dash lengths; an empty slice means solid.
    fn set_dash(&mut self, lengths: &[f64]);

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> OverlayResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoDrawSurface;
