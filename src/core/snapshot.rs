use crate::core::{Margin, PlotArea, PointerPosition};

/// Domain value to logical-pixel mapping supplied by the chart's coordinate
/// system.
pub type ScaleFn<'a> = &'a dyn Fn(f64) -> f64;

/// Extracts the x-domain value from a hovered data item.
pub type AccessorFn<'a, D> = &'a dyn Fn(&D) -> f64;

/// Per-draw context bundle assembled by the redraw host.
///
/// A snapshot is only valid for the single draw pass it was built for. The
/// hovered item stays opaque to the overlay; it is only ever passed through
/// `x_accessor`.
pub struct PointerSnapshot<'a, D> {
    pub pointer: PointerPosition,
    pub current_item: Option<&'a D>,
    pub x_scale: ScaleFn<'a>,
    pub x_accessor: AccessorFn<'a, D>,
    pub plot: PlotArea,
    pub ratio: f64,
    pub margin: Margin,
    pub visible: bool,
}

impl<'a, D> PointerSnapshot<'a, D> {
    #[must_use]
    pub fn new(
        pointer: PointerPosition,
        plot: PlotArea,
        ratio: f64,
        margin: Margin,
        x_scale: ScaleFn<'a>,
        x_accessor: AccessorFn<'a, D>,
    ) -> Self {
        Self {
            pointer,
            current_item: None,
            x_scale,
            x_accessor,
            plot,
            ratio,
            margin,
            visible: true,
        }
    }

    /// Sets the hovered data item for this pass.
    #[must_use]
    pub fn with_current_item(mut self, item: &'a D) -> Self {
        self.current_item = Some(item);
        self
    }

    /// Sets the host visibility flag for this pass.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Resolves the hovered item's x-domain value through the scale.
    ///
    /// Returns `None` when no item is hovered.
    #[must_use]
    pub fn scaled_item_x(&self) -> Option<f64> {
        self.current_item
            .map(|item| (self.x_scale)((self.x_accessor)(item)))
    }
}

impl<D> Clone for PointerSnapshot<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for PointerSnapshot<'_, D> {}
