//! crosshair-rs: pointer crosshair overlay for interactive chart canvases.
//!
//! The crate splits a crosshair cursor into a pure geometry resolver (where
//! the guide lines fall in plot-local pixels) and a scoped canvas painter
//! (how they land on a shared, DPI-scaled surface), plus a small redraw
//! dispatcher hosts drive from their own event handlers.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{CanvasOverlay, CrosshairCursor, CrosshairCursorConfig, RedrawScheduler};
pub use error::{OverlayError, OverlayResult};
