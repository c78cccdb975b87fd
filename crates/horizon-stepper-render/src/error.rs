//! Error types for the render crate.

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while interpreting render values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A color string could not be parsed.
    #[error("Invalid color '{input}': {message}")]
    InvalidColor { input: String, message: String },
}

impl Error {
    /// Create a color error.
    pub fn invalid_color(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
            message: message.into(),
        }
    }
}
