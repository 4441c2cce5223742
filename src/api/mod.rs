mod cursor;
mod scheduler;

pub use cursor::{CrosshairCursor, CrosshairCursorConfig, XResolver, default_x_resolver};
pub use scheduler::{CanvasOverlay, DrawRegistration, RedrawScheduler};
