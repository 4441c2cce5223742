use serde::{Deserialize, Serialize};

use crate::core::PointerSnapshot;
use crate::error::{OverlayError, OverlayResult};
use crate::interaction::RedrawEvent;
use crate::render::{Color, CrosshairLine, DrawSurface, LineStrokeStyle, paint_crosshair_lines};

use super::{CanvasOverlay, DrawRegistration};

/// Replacement for the built-in snap-or-raw vertical x resolution.
///
/// Receives the full configuration and the current snapshot and returns the
/// vertical guide x in logical pixels.
pub type XResolver<D> =
    Box<dyn for<'a> Fn(&CrosshairCursorConfig, &PointerSnapshot<'a, D>) -> f64>;

/// Immutable crosshair styling and snapping configuration.
///
/// This type is serializable so host applications can persist/load overlay
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairCursorConfig {
    #[serde(default = "default_stroke")]
    pub stroke: Color,
    #[serde(default = "default_stroke_opacity")]
    pub stroke_opacity: f64,
    #[serde(default = "default_stroke_style")]
    pub stroke_style: LineStrokeStyle,
    #[serde(default = "default_snap_x")]
    pub snap_x: bool,
}

impl Default for CrosshairCursorConfig {
    fn default() -> Self {
        Self {
            stroke: default_stroke(),
            stroke_opacity: default_stroke_opacity(),
            stroke_style: default_stroke_style(),
            snap_x: default_snap_x(),
        }
    }
}

impl CrosshairCursorConfig {
    /// Sets the guide stroke color.
    #[must_use]
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the guide stroke opacity.
    #[must_use]
    pub fn with_stroke_opacity(mut self, stroke_opacity: f64) -> Self {
        self.stroke_opacity = stroke_opacity;
        self
    }

    /// Sets the guide dash style.
    #[must_use]
    pub fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    /// Sets whether the vertical guide snaps to the hovered item.
    #[must_use]
    pub fn with_snap_x(mut self, snap_x: bool) -> Self {
        self.snap_x = snap_x;
        self
    }

    pub fn validate(self) -> OverlayResult<()> {
        if !self.stroke_opacity.is_finite() || !(0.0..=1.0).contains(&self.stroke_opacity) {
            return Err(OverlayError::InvalidData(
                "stroke opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.stroke.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> OverlayResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| OverlayError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> OverlayResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| OverlayError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_stroke() -> Color {
    Color::from_rgb8(0x37, 0x47, 0x4F)
}

fn default_stroke_opacity() -> f64 {
    0.8
}

fn default_stroke_style() -> LineStrokeStyle {
    LineStrokeStyle::Dash
}

fn default_snap_x() -> bool {
    true
}

/// Built-in vertical x resolution: hovered item mapped through the scale and
/// rounded to the pixel grid when snapping, raw pointer x otherwise.
#[must_use]
pub fn default_x_resolver<D>(
    config: &CrosshairCursorConfig,
    snapshot: &PointerSnapshot<'_, D>,
) -> f64 {
    if config.snap_x {
        if let Some(scaled) = snapshot.scaled_item_x() {
            return scaled.round();
        }
    }
    snapshot.pointer.x
}

/// Crosshair overlay: one horizontal and one vertical guide line tracking the
/// pointer over the plot area.
///
/// Each draw pass is a pure function of the snapshot the host hands in; the
/// cursor keeps no state between passes.
pub struct CrosshairCursor<D> {
    config: CrosshairCursorConfig,
    custom_x: Option<XResolver<D>>,
}

impl<D> Default for CrosshairCursor<D> {
    fn default() -> Self {
        Self::new(CrosshairCursorConfig::default())
    }
}

impl<D> CrosshairCursor<D> {
    #[must_use]
    pub fn new(config: CrosshairCursorConfig) -> Self {
        Self {
            config,
            custom_x: None,
        }
    }

    /// Installs an override that fully replaces the snap-or-raw x logic.
    #[must_use]
    pub fn with_custom_x(mut self, resolver: XResolver<D>) -> Self {
        self.custom_x = Some(resolver);
        self
    }

    #[must_use]
    pub fn config(&self) -> CrosshairCursorConfig {
        self.config
    }

    /// Events this overlay redraws on; guide lines are painted unclipped so
    /// they may span the chart margins.
    #[must_use]
    pub fn registration(&self) -> DrawRegistration {
        DrawRegistration::new(
            [RedrawEvent::MouseMove, RedrawEvent::Pan, RedrawEvent::Drag],
            false,
        )
    }

    /// Turns a snapshot into the horizontal/vertical guide pair.
    ///
    /// Returns `None` while hidden: host visibility off or no hovered item.
    /// That is the normal pointer-left state, not an error.
    #[must_use]
    pub fn resolve_lines(&self, snapshot: &PointerSnapshot<'_, D>) -> Option<[CrosshairLine; 2]> {
        if !snapshot.visible || snapshot.current_item.is_none() {
            return None;
        }

        let config = self.config;
        let pointer_y = snapshot.pointer.y + 0.5;
        let horizontal = CrosshairLine::new(
            0.0,
            pointer_y,
            snapshot.plot.width,
            pointer_y,
            config.stroke,
            config.stroke_opacity,
            config.stroke_style,
        );

        let x = match &self.custom_x {
            Some(resolver) => resolver(&config, snapshot),
            None => default_x_resolver(&config, snapshot),
        };
        let vertical = CrosshairLine::new(
            x,
            0.0,
            x,
            snapshot.plot.height,
            config.stroke,
            config.stroke_opacity,
            config.stroke_style,
        );

        Some([horizontal, vertical])
    }

    /// Resolves and paints this pass's guide lines.
    ///
    /// Hidden snapshots leave the surface untouched.
    pub fn draw<S>(&self, surface: &mut S, snapshot: &PointerSnapshot<'_, D>) -> OverlayResult<()>
    where
        S: DrawSurface + ?Sized,
    {
        let Some(lines) = self.resolve_lines(snapshot) else {
            return Ok(());
        };
        paint_crosshair_lines(surface, &lines, snapshot.margin, snapshot.ratio)
    }
}

impl<D> CanvasOverlay<D> for CrosshairCursor<D> {
    fn registration(&self) -> DrawRegistration {
        CrosshairCursor::registration(self)
    }

    fn draw(
        &self,
        surface: &mut dyn DrawSurface,
        snapshot: &PointerSnapshot<'_, D>,
    ) -> OverlayResult<()> {
        CrosshairCursor::draw(self, surface, snapshot)
    }
}
