use cairo::Context;

use crate::error::{OverlayError, OverlayResult};
use crate::render::{Color, DrawSurface};

/// Cairo painter backend over an external `cairo::Context`.
///
/// The context is borrowed from the host's draw callback (for example a GTK
/// `DrawingArea` snapshot), used for exactly one paint pass and released when
/// the wrapper is dropped.
pub struct CairoDrawSurface<'a> {
    context: &'a Context,
}

impl<'a> CairoDrawSurface<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self { context }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }
}

impl DrawSurface for CairoDrawSurface<'_> {
    fn save(&mut self) -> OverlayResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))
    }

    fn restore(&mut self) -> OverlayResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))
    }

    fn reset_transform(&mut self) {
        self.context.identity_matrix();
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.context.scale(sx, sy);
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.context.translate(tx, ty);
    }

    fn clip_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.new_path();
        self.context.rectangle(x, y, width, height);
        self.context.clip();
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_dash(&mut self, lengths: &[f64]) {
        self.context.set_dash(lengths, 0.0);
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> OverlayResult<()> {
        self.context.new_path();
        self.context.move_to(x1, y1);
        self.context.line_to(x2, y2);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> OverlayError {
    OverlayError::InvalidData(format!("{prefix}: {err}"))
}
