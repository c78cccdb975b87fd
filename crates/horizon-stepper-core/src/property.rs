//! Reactive properties with change detection.
//!
//! A [`Property`] wraps a value and reports whether a write actually changed
//! it, so the owner can decide whether to emit its notification signal.
//!
//! # Example
//!
//! ```
//! use horizon_stepper_core::{Property, Signal};
//!
//! struct Cursor {
//!     position: Property<i32>,
//!     position_changed: Signal<i32>,
//! }
//!
//! impl Cursor {
//!     fn set_position(&self, position: i32) {
//!         if self.position.set(position) {
//!             self.position_changed.emit(position);
//!         }
//!     }
//! }
//!
//! let cursor = Cursor { position: Property::new(0), position_changed: Signal::new() };
//! cursor.set_position(2);
//! assert_eq!(cursor.position.get(), 2);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_set_reports_change() {
        let prop = Property::new(42);
        assert!(!prop.set(42));
        assert!(prop.set(100));
        assert_eq!(prop.get(), 100);
    }
}
