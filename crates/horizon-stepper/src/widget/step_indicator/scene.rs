//! The display list handed to the host.

use horizon_stepper_render::{DisplayList, DrawCommand, Renderer, Size};

/// One frame of a step indicator, in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepIndicatorScene {
    size: Size,
    display_list: DisplayList,
}

impl StepIndicatorScene {
    pub(crate) fn new(size: Size, display_list: DisplayList) -> Self {
        Self { size, display_list }
    }

    /// The container size the scene was laid out in.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The recorded drawing commands.
    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    /// Shorthand for `display_list().commands()`.
    pub fn commands(&self) -> &[DrawCommand] {
        self.display_list.commands()
    }

    /// Whether nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.display_list.is_empty()
    }

    /// Draw the scene onto `renderer`.
    pub fn replay<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        self.display_list.replay(renderer);
    }
}
