use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// Pointer position in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Plot region extent in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> OverlayResult<()> {
        if !self.is_valid() {
            return Err(OverlayError::InvalidPlotArea {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Layout offset of the plot origin inside the shared canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}
