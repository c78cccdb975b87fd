//! Error types for step indicator configuration.

/// Errors raised while reading a style document.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// The TOML document could not be parsed, or holds an invalid value.
    #[error("Invalid TOML style document: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON document could not be parsed, or holds an invalid value.
    #[error("Invalid JSON style document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reported by [`StepIndicatorBuilder::build`](super::StepIndicatorBuilder::build).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Fewer than two steps leave no interval between them.
    #[error("Step count must be at least 2, got {0}")]
    StepCount(usize),

    /// A label list does not have one entry per step.
    #[error("Expected {expected} {kind}, got {actual}")]
    LabelCount {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A style value is out of range.
    #[error("Invalid value for style property '{property}': {message}")]
    InvalidStyle {
        property: &'static str,
        message: String,
    },

    /// A style document could not be read.
    #[error(transparent)]
    Style(#[from] StyleError),
}

impl ConfigError {
    /// Create a label count error.
    pub fn label_count(kind: &'static str, expected: usize, actual: usize) -> Self {
        Self::LabelCount {
            kind,
            expected,
            actual,
        }
    }

    /// Create a style value error.
    pub fn invalid_style(property: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidStyle {
            property,
            message: message.into(),
        }
    }
}
