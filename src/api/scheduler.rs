use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::core::PointerSnapshot;
use crate::error::OverlayResult;
use crate::interaction::RedrawEvent;
use crate::render::DrawSurface;

/// Interest declaration an overlay hands to the redraw host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRegistration {
    draw_on: SmallVec<[RedrawEvent; 3]>,
    clip: bool,
}

impl DrawRegistration {
    #[must_use]
    pub fn new(draw_on: impl IntoIterator<Item = RedrawEvent>, clip: bool) -> Self {
        Self {
            draw_on: draw_on.into_iter().collect(),
            clip,
        }
    }

    #[must_use]
    pub fn draw_on(&self) -> &[RedrawEvent] {
        &self.draw_on
    }

    #[must_use]
    pub fn clip(&self) -> bool {
        self.clip
    }

    #[must_use]
    pub fn interested_in(&self, event: RedrawEvent) -> bool {
        self.draw_on.contains(&event)
    }
}

/// Typed (snapshot -> paint) handler the scheduler invokes per qualifying
/// event.
pub trait CanvasOverlay<D> {
    fn registration(&self) -> DrawRegistration;

    fn draw(
        &self,
        surface: &mut dyn DrawSurface,
        snapshot: &PointerSnapshot<'_, D>,
    ) -> OverlayResult<()>;
}

/// Synchronous redraw dispatcher for overlays sharing one interactive canvas.
///
/// A dispatch runs to completion inside the host's event turn; the `&mut`
/// receiver makes concurrent draw passes unrepresentable. The host is
/// expected to have cleared/repainted the interactive layer before
/// dispatching, so overlays never see stale strokes of their own.
pub struct RedrawScheduler<D> {
    overlays: Vec<Box<dyn CanvasOverlay<D>>>,
}

impl<D> Default for RedrawScheduler<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> RedrawScheduler<D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            overlays: Vec::new(),
        }
    }

    /// Registers an overlay; dispatch order is registration order.
    pub fn register(&mut self, overlay: Box<dyn CanvasOverlay<D>>) {
        self.overlays.push(overlay);
    }

    #[must_use]
    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Runs one draw pass for `event`, invoking every overlay registered for
    /// it in order. Returns how many overlay callbacks completed.
    ///
    /// A failing overlay is skipped for this pass so its siblings still
    /// paint.
    pub fn dispatch(
        &mut self,
        event: RedrawEvent,
        surface: &mut dyn DrawSurface,
        snapshot: &PointerSnapshot<'_, D>,
    ) -> usize {
        let mut drawn = 0;
        for overlay in &self.overlays {
            let registration = overlay.registration();
            if !registration.interested_in(event) {
                continue;
            }

            let result = if registration.clip() {
                draw_clipped(overlay.as_ref(), surface, snapshot)
            } else {
                overlay.draw(surface, snapshot)
            };
            match result {
                Ok(()) => drawn += 1,
                Err(err) => warn!(error = %err, "skipping overlay draw for this pass"),
            }
        }
        trace!(event = ?event, drawn, "redraw pass complete");
        drawn
    }
}

/// Scopes a plot-area clip around one overlay draw.
///
/// The clip is anchored at the margin offset in ratio-scaled space and is
/// dropped with the surrounding `restore`, so unclipped siblings are not
/// affected.
fn draw_clipped<D>(
    overlay: &dyn CanvasOverlay<D>,
    surface: &mut dyn DrawSurface,
    snapshot: &PointerSnapshot<'_, D>,
) -> OverlayResult<()> {
    surface.save()?;
    surface.reset_transform();
    surface.scale(snapshot.ratio, snapshot.ratio);
    surface.translate(snapshot.margin.left, snapshot.margin.top);
    surface.clip_rect(0.0, 0.0, snapshot.plot.width, snapshot.plot.height);
    let outcome = overlay.draw(surface, snapshot);
    let restored = surface.restore();
    outcome.and(restored)
}
