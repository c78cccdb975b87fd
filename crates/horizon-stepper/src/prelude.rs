//! Prelude module for Horizon Stepper.
//!
//! ```
//! use horizon_stepper::prelude::*;
//! ```

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use crate::{ConnectionId, Property, Signal};

// ============================================================================
// Step Indicator
// ============================================================================

pub use crate::widget::animation::Easing;
pub use crate::widget::step_indicator::{
    AnimationConfig, ConfigError, Orientation, StepContent, StepContext, StepIndicator,
    StepIndicatorBuilder, StepIndicatorScene, StepIndicatorStyle, StepRenderer, StepStatus,
    StyleOverrides,
};

// ============================================================================
// Geometry and Rendering
// ============================================================================

pub use crate::render::{Color, DisplayList, Point, Rect, Renderer, Size};
