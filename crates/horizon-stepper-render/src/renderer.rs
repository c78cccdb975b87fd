//! The drawing seam between widgets and hosts.
//!
//! Widgets paint through the [`Renderer`] trait. A host either implements it
//! on top of its own graphics backend, or lets the widget paint into a
//! [`DisplayList`] and replays the recorded commands later.

use crate::types::{Color, Rect, RoundedRect};

/// Stroke style options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Stroke {
    /// Create a new stroke with the given color and width.
    #[inline]
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Whether the stroke draws anything.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.color.a > 0.0
    }
}

/// Horizontal alignment of text within its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment of text within its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// A run of text to be laid out by the host inside `bounds`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// The text content.
    pub text: String,
    /// Box the text is laid out in.
    pub bounds: Rect,
    /// Font size in pixels.
    pub font_size: f32,
    /// Text color.
    pub color: Color,
    /// Horizontal alignment inside `bounds`.
    pub horizontal_align: HorizontalAlign,
    /// Vertical alignment inside `bounds`.
    pub vertical_align: VerticalAlign,
}

impl TextRun {
    /// Create a centered text run.
    pub fn new(text: impl Into<String>, bounds: Rect, font_size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            bounds,
            font_size,
            color,
            horizontal_align: HorizontalAlign::Center,
            vertical_align: VerticalAlign::Center,
        }
    }

    /// Set horizontal alignment using builder pattern.
    pub fn with_horizontal_align(mut self, align: HorizontalAlign) -> Self {
        self.horizontal_align = align;
        self
    }

    /// Set vertical alignment using builder pattern.
    pub fn with_vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = align;
        self
    }
}

/// Trait for 2D drawing backends.
pub trait Renderer {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a rounded rectangle with a solid color.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);

    /// Stroke the outline of a rounded rectangle.
    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: Stroke);

    /// Draw a run of text.
    fn draw_text(&mut self, run: &TextRun);

    /// Draw a host-provided image identified by `key`, scaled to fit `bounds`
    /// while preserving its aspect ratio.
    fn draw_image(&mut self, key: &str, bounds: Rect);
}

/// A single recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    FillRoundedRect { rect: RoundedRect, color: Color },
    StrokeRoundedRect { rect: RoundedRect, stroke: Stroke },
    Text(TextRun),
    Image { key: String, bounds: Rect },
}

/// A renderer that records commands in paint order.
///
/// # Example
///
/// ```
/// use horizon_stepper_render::{Color, DisplayList, Rect, Renderer};
///
/// let mut list = DisplayList::new();
/// list.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay the recorded commands onto another renderer.
    pub fn replay<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for command in &self.commands {
            match command {
                DrawCommand::FillRect { rect, color } => renderer.fill_rect(*rect, *color),
                DrawCommand::FillRoundedRect { rect, color } => {
                    renderer.fill_rounded_rect(*rect, *color)
                }
                DrawCommand::StrokeRoundedRect { rect, stroke } => {
                    renderer.stroke_rounded_rect(*rect, *stroke)
                }
                DrawCommand::Text(run) => renderer.draw_text(run),
                DrawCommand::Image { key, bounds } => renderer.draw_image(key, *bounds),
            }
        }
    }
}

impl Renderer for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.commands
            .push(DrawCommand::FillRoundedRect { rect, color });
    }

    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: Stroke) {
        if stroke.is_visible() {
            self.commands
                .push(DrawCommand::StrokeRoundedRect { rect, stroke });
        }
    }

    fn draw_text(&mut self, run: &TextRun) {
        self.commands.push(DrawCommand::Text(run.clone()));
    }

    fn draw_image(&mut self, key: &str, bounds: Rect) {
        self.commands.push(DrawCommand::Image {
            key: key.to_string(),
            bounds,
        });
    }
}
