//! Animation support for Horizon Stepper.
//!
//! This module provides easing functions and the tick-driven primitives the
//! step indicator animates with.
//!
//! # Easing Functions
//!
//! Easing functions control the rate of change during animations. They take a
//! normalized progress value `t` (0.0 to 1.0) and return a transformed value.
//!
//! # Timelines
//!
//! A [`Timeline`] plays [`Phase`]s one after another; the tweens inside a
//! phase run in parallel. Time only moves when the host calls
//! [`Timeline::advance`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_stepper::widget::animation::{Easing, Phase, Timeline, TimelineState};
//!
//! let mut timeline = Timeline::new([("width", 0.0)]);
//! timeline.play(vec![Phase::new(Duration::from_millis(100), Easing::Linear).tween("width", 10.0)]);
//!
//! assert_eq!(timeline.advance(Duration::from_millis(100)), TimelineState::Finished);
//! assert_eq!(timeline.value("width"), Some(10.0));
//! ```

mod easing;
mod scalar;
mod timeline;

pub use easing::{Easing, ease, lerp_eased};
pub use scalar::AnimatedScalar;
pub use timeline::{Phase, Timeline, TimelineState};
