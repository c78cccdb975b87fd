//! Core systems for Horizon Stepper.
//!
//! This crate provides the foundational pieces shared by the stepper widgets:
//!
//! - **Signal/Slot System**: Type-safe notifications from widgets to their owners
//! - **Property System**: Values with change detection
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Example
//!
//! ```
//! use horizon_stepper_core::{Property, Signal};
//!
//! let value = Property::new(0);
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! if value.set(42) {
//!     value_changed.emit(42);
//! }
//!
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
