use serde::{Deserialize, Serialize};

/// Host interaction events that qualify for a crosshair redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedrawEvent {
    /// Pointer moved over the chart surface.
    MouseMove,
    /// Visible window is being panned.
    Pan,
    /// An interactive element is being dragged.
    Drag,
}
