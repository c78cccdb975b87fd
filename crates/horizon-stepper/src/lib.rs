//! Horizon Stepper - an animated step indicator for Horizon-style hosts.
//!
//! This is the main crate. It re-exports the core and render crates and
//! provides the [`widget::step_indicator::StepIndicator`] widget.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_stepper::prelude::*;
//!
//! let mut indicator = StepIndicator::builder()
//!     .step_count(3)
//!     .in_progress(true)
//!     .build()?;
//!
//! indicator.resize(Size::new(300.0, 60.0));
//! indicator.update(1);
//! indicator.tick(Duration::from_millis(16));
//!
//! let mut display_list = DisplayList::new();
//! indicator.scene().replay(&mut display_list);
//! # Ok::<(), ConfigError>(())
//! ```

pub use horizon_stepper_core::*;

/// Rendering types.
pub mod render {
    pub use horizon_stepper_render::*;
}

pub mod prelude;
pub mod widget;
