//! Rendering types for Horizon Stepper.
//!
//! This crate is renderer-neutral: it defines the geometry and color types
//! widgets compute with, the [`Renderer`] trait they paint through, and a
//! recording [`DisplayList`] that hosts can replay onto their own backend.
//!
//! # Example
//!
//! ```
//! use horizon_stepper_render::{Color, DisplayList, Rect, Renderer, RoundedRect};
//!
//! let mut list = DisplayList::new();
//! let marker = RoundedRect::new(Rect::new(0.0, 0.0, 30.0, 30.0), 15.0);
//! list.fill_rounded_rect(marker, Color::parse("#4aae4f").unwrap());
//!
//! assert_eq!(list.len(), 1);
//! ```

mod color;
mod error;
mod renderer;
mod types;

pub use error::{Error, Result};
pub use renderer::{
    DisplayList, DrawCommand, HorizontalAlign, Renderer, Stroke, TextRun, VerticalAlign,
};
pub use types::{Color, Point, Rect, RoundedRect, Size};
