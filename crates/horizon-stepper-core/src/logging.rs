//! Logging facilities for Horizon Stepper.
//!
//! Horizon Stepper uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_stepper=debug")
//!     .init();
//! ```
//!
//! All events are emitted under the targets in [`targets`], so individual
//! subsystems can be filtered with `tracing` directives.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_stepper_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_stepper_core::signal";
    /// Widget crate target.
    pub const WIDGET: &str = "horizon_stepper";
    /// Measurement and readiness target.
    pub const LAYOUT: &str = "horizon_stepper::layout";
    /// Transition driver and animation target.
    pub const TRANSITION: &str = "horizon_stepper::transition";
    /// Scene building target.
    pub const SCENE: &str = "horizon_stepper::scene";
    /// Style configuration target.
    pub const STYLE: &str = "horizon_stepper::style";
}

/// A guard that records the duration of an operation as a tracing span.
///
/// The span is active until the guard is dropped.
///
/// ```
/// use horizon_stepper_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("build_scene");
///     // work...
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_stepper::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
