//! What is drawn inside each step marker.

use super::status::StepStatus;

/// Information handed to a [`StepRenderer`] for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepContext {
    /// Zero-based position of the step.
    pub position: usize,
    /// Status of the step relative to the current position.
    pub status: StepStatus,
}

/// The content of a step marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StepContent {
    /// Text drawn with the marker label font for the step's status.
    Text(String),
    /// A host image, identified by key, fitted to the marker.
    Image(String),
    /// Nothing inside the marker.
    Empty,
}

impl StepContent {
    /// The default content: the one-based step number.
    pub fn number(position: usize) -> Self {
        Self::Text((position + 1).to_string())
    }
}

/// Custom per-step marker content.
///
/// Implemented for closures, so most hosts pass one directly:
///
/// ```
/// use horizon_stepper::widget::step_indicator::{StepContent, StepContext, StepRenderer, StepStatus};
///
/// let renderer = |context: StepContext| match context.status {
///     StepStatus::Finished => StepContent::Image("check".into()),
///     _ => StepContent::number(context.position),
/// };
///
/// let context = StepContext { position: 0, status: StepStatus::Finished };
/// assert_eq!(renderer.render_step(context), StepContent::Image("check".into()));
/// ```
pub trait StepRenderer: Send + Sync {
    /// Produce the content of one marker.
    fn render_step(&self, context: StepContext) -> StepContent;
}

impl<F> StepRenderer for F
where
    F: Fn(StepContext) -> StepContent + Send + Sync,
{
    fn render_step(&self, context: StepContext) -> StepContent {
        self(context)
    }
}
