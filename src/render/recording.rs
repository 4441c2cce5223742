use crate::error::{OverlayError, OverlayResult};
use crate::render::{Color, DrawSurface};

/// Every surface call a paint pass issued, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Save,
    Restore,
    ResetTransform,
    Scale { sx: f64, sy: f64 },
    Translate { tx: f64, ty: f64 },
    ClipRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeColor(Color),
    LineWidth(f64),
    Dash(Vec<f64>),
    StrokeLine { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// In-memory surface used by tests and headless hosts.
///
/// It rejects non-finite stroke coordinates so tests can catch invalid
/// geometry before a real backend is introduced.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Count of stroked segments across all recorded passes.
    #[must_use]
    pub fn stroked_line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::StrokeLine { .. }))
            .count()
    }

    /// Save depth at the end of the recorded stream; zero means every
    /// mutation was restored.
    #[must_use]
    pub fn open_save_depth(&self) -> isize {
        self.ops.iter().fold(0, |depth, op| match op {
            SurfaceOp::Save => depth + 1,
            SurfaceOp::Restore => depth - 1,
            _ => depth,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) -> OverlayResult<()> {
        self.ops.push(SurfaceOp::Save);
        Ok(())
    }

    fn restore(&mut self) -> OverlayResult<()> {
        self.ops.push(SurfaceOp::Restore);
        Ok(())
    }

    fn reset_transform(&mut self) {
        self.ops.push(SurfaceOp::ResetTransform);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(SurfaceOp::Scale { sx, sy });
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.ops.push(SurfaceOp::Translate { tx, ty });
    }

    fn clip_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(SurfaceOp::ClipRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::LineWidth(width));
    }

    fn set_dash(&mut self, lengths: &[f64]) {
        self.ops.push(SurfaceOp::Dash(lengths.to_vec()));
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> OverlayResult<()> {
        if !x1.is_finite() || !y1.is_finite() || !x2.is_finite() || !y2.is_finite() {
            return Err(OverlayError::InvalidData(
                "stroke coordinates must be finite".to_owned(),
            ));
        }
        self.ops.push(SurfaceOp::StrokeLine { x1, y1, x2, y2 });
        Ok(())
    }
}
