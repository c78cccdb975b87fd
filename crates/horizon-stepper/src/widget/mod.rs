//! Widgets for Horizon Stepper.
//!
//! - [`animation`]: easing curves and tick-driven animated values
//! - [`step_indicator`]: the animated step indicator
//!
//! Widgets here are headless. They never read a clock or touch a window:
//! the host feeds them measurements, input and frame deltas, and draws what
//! they paint through a [`Renderer`](horizon_stepper_render::Renderer).

pub mod animation;
pub mod step_indicator;

pub use step_indicator::{StepIndicator, StepIndicatorBuilder};
