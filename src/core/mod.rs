mod snapshot;
mod types;

pub use snapshot::{AccessorFn, PointerSnapshot, ScaleFn};
pub use types::{Margin, PlotArea, PointerPosition};
