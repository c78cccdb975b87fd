//! Visual configuration for the step indicator.
//!
//! [`StepIndicatorStyle`] holds every visual parameter with its default.
//! Hosts tweak it directly, or describe partial changes as a
//! [`StyleOverrides`] document in TOML or JSON:
//!
//! ```
//! use horizon_stepper::widget::step_indicator::StepIndicatorStyle;
//!
//! let style = StepIndicatorStyle::from_toml(r##"
//!     current-step-indicator-size = 48
//!     separator-finished-color = "#fe7013"
//!     right-label-align = "center"
//! "##).unwrap();
//!
//! assert_eq!(style.current_step_indicator_size, 48.0);
//! assert_eq!(style.step_indicator_size, 30.0);
//! ```

use horizon_stepper_core::logging::targets;
use horizon_stepper_render::{Color, HorizontalAlign};
use serde::Deserialize;

use super::error::{ConfigError, StyleError};
use super::status::StepStatus;

/// Horizontal placement of the right label inside its part of a label cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RightLabelAlign {
    #[serde(alias = "flex-start")]
    Start,
    Center,
    #[default]
    #[serde(alias = "flex-end")]
    End,
}

impl From<RightLabelAlign> for HorizontalAlign {
    fn from(align: RightLabelAlign) -> Self {
        match align {
            RightLabelAlign::Start => HorizontalAlign::Left,
            RightLabelAlign::Center => HorizontalAlign::Center,
            RightLabelAlign::End => HorizontalAlign::Right,
        }
    }
}

/// Visual parameters of a step indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct StepIndicatorStyle {
    // Marker sizes
    /// Side of finished and unfinished markers.
    pub step_indicator_size: f32,
    /// Side of the current marker once it has grown.
    pub current_step_indicator_size: f32,

    // Strokes
    /// Thickness of the track.
    pub separator_stroke_width: f32,
    /// Outline width of the current marker.
    pub current_step_stroke_width: f32,
    /// Outline width of finished and unfinished markers.
    pub step_stroke_width: f32,
    /// Outline color of the current marker.
    pub step_stroke_current_color: Color,
    /// Outline color of finished markers.
    pub step_stroke_finished_color: Color,
    /// Outline color of unfinished markers.
    pub step_stroke_unfinished_color: Color,

    // Track
    /// Color of the filled part of the track.
    pub separator_finished_color: Color,
    /// Color of the track behind the fill.
    pub separator_unfinished_color: Color,

    // Marker fills
    /// Fill of finished markers.
    pub step_indicator_finished_color: Color,
    /// Fill of unfinished markers.
    pub step_indicator_unfinished_color: Color,
    /// Fill of the current marker.
    pub step_indicator_current_color: Color,

    // Marker content
    /// Font size of the text inside finished and unfinished markers.
    pub step_indicator_label_font_size: f32,
    /// Font size of the text inside the current marker.
    pub current_step_indicator_label_font_size: f32,
    /// Text color inside the current marker.
    pub step_indicator_label_current_color: Color,
    /// Text color inside finished markers.
    pub step_indicator_label_finished_color: Color,
    /// Text color inside unfinished markers.
    pub step_indicator_label_unfinished_color: Color,

    // Labels
    /// Color of labels after the current step.
    pub label_color: Color,
    /// Font size of labels.
    pub label_size: f32,
    /// Font size of sublabels.
    pub sublabel_size: f32,
    /// Color of sublabels.
    pub sublabel_color: Color,
    /// Color of right labels.
    pub right_label_color: Color,
    /// Color of the current step's label.
    pub current_step_label_color: Color,
    /// Color of labels before the current step.
    pub finished_step_label_color: Color,
    /// Alignment of right labels within their share of the cell.
    pub right_label_align: RightLabelAlign,
    /// Percentage of each label cell given to the label and sublabel.
    pub left_portion: f32,
}

impl Default for StepIndicatorStyle {
    fn default() -> Self {
        let green = Color::from_rgb8(0x4a, 0xae, 0x4f);
        let pale_green = Color::from_rgb8(0xa4, 0xd4, 0xa5);

        Self {
            step_indicator_size: 30.0,
            current_step_indicator_size: 40.0,

            separator_stroke_width: 3.0,
            current_step_stroke_width: 5.0,
            step_stroke_width: 0.0,
            step_stroke_current_color: green,
            step_stroke_finished_color: green,
            step_stroke_unfinished_color: green,

            separator_finished_color: green,
            separator_unfinished_color: pale_green,

            step_indicator_finished_color: green,
            step_indicator_unfinished_color: pale_green,
            step_indicator_current_color: Color::WHITE,

            step_indicator_label_font_size: 15.0,
            current_step_indicator_label_font_size: 15.0,
            step_indicator_label_current_color: Color::BLACK,
            step_indicator_label_finished_color: Color::WHITE,
            step_indicator_label_unfinished_color: Color::from_rgba(1.0, 1.0, 1.0, 0.5),

            label_color: Color::BLACK,
            label_size: 13.0,
            sublabel_size: 11.0,
            sublabel_color: Color::from_rgb8(0x6e, 0x6e, 0x6e),
            right_label_color: Color::BLACK,
            current_step_label_color: green,
            finished_step_label_color: Color::from_rgb8(0x99, 0x99, 0x99),
            right_label_align: RightLabelAlign::End,
            left_portion: 50.0,
        }
    }
}

impl StepIndicatorStyle {
    /// Default style with the overrides of a TOML document applied.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        let style = StyleOverrides::from_toml(document)?.apply(Self::default());
        style.validate()?;
        Ok(style)
    }

    /// Default style with the overrides of a JSON document applied.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let style = StyleOverrides::from_json(document)?.apply(Self::default());
        style.validate()?;
        Ok(style)
    }

    /// Check that every size is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("step-indicator-size", self.step_indicator_size),
            ("current-step-indicator-size", self.current_step_indicator_size),
            ("step-indicator-label-font-size", self.step_indicator_label_font_size),
            (
                "current-step-indicator-label-font-size",
                self.current_step_indicator_label_font_size,
            ),
            ("label-size", self.label_size),
            ("sublabel-size", self.sublabel_size),
        ];
        for (property, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid_style(
                    property,
                    format!("must be positive, got {value}"),
                ));
            }
        }

        let non_negative = [
            ("separator-stroke-width", self.separator_stroke_width),
            ("current-step-stroke-width", self.current_step_stroke_width),
            ("step-stroke-width", self.step_stroke_width),
        ];
        for (property, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid_style(
                    property,
                    format!("must not be negative, got {value}"),
                ));
            }
        }

        if !(0.0..=100.0).contains(&self.left_portion) {
            return Err(ConfigError::invalid_style(
                "left-portion",
                format!("must be within 0 to 100, got {}", self.left_portion),
            ));
        }

        Ok(())
    }

    /// Fill color of a marker.
    pub fn marker_color(&self, status: StepStatus) -> Color {
        match status {
            StepStatus::Finished => self.step_indicator_finished_color,
            StepStatus::Current => self.step_indicator_current_color,
            StepStatus::Unfinished => self.step_indicator_unfinished_color,
        }
    }

    /// Outline width and color of a marker.
    pub fn marker_stroke(&self, status: StepStatus) -> (f32, Color) {
        match status {
            StepStatus::Finished => (self.step_stroke_width, self.step_stroke_finished_color),
            StepStatus::Current => (self.current_step_stroke_width, self.step_stroke_current_color),
            StepStatus::Unfinished => (self.step_stroke_width, self.step_stroke_unfinished_color),
        }
    }

    /// Font size and color of the text inside a marker.
    pub fn marker_label(&self, status: StepStatus) -> (f32, Color) {
        match status {
            StepStatus::Finished => (
                self.step_indicator_label_font_size,
                self.step_indicator_label_finished_color,
            ),
            StepStatus::Current => (
                self.current_step_indicator_label_font_size,
                self.step_indicator_label_current_color,
            ),
            StepStatus::Unfinished => (
                self.step_indicator_label_font_size,
                self.step_indicator_label_unfinished_color,
            ),
        }
    }

    /// Color of a step's label.
    pub fn label_color_for(&self, status: StepStatus) -> Color {
        match status {
            StepStatus::Finished => self.finished_step_label_color,
            StepStatus::Current => self.current_step_label_color,
            StepStatus::Unfinished => self.label_color,
        }
    }
}

/// A partial style: every field present replaces the one it is applied to.
///
/// Keys are the kebab-case names of the [`StepIndicatorStyle`] fields; colors
/// are CSS color strings. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct StyleOverrides {
    pub step_indicator_size: Option<f32>,
    pub current_step_indicator_size: Option<f32>,
    pub separator_stroke_width: Option<f32>,
    pub current_step_stroke_width: Option<f32>,
    pub step_stroke_width: Option<f32>,
    pub step_stroke_current_color: Option<Color>,
    pub step_stroke_finished_color: Option<Color>,
    pub step_stroke_unfinished_color: Option<Color>,
    pub separator_finished_color: Option<Color>,
    pub separator_unfinished_color: Option<Color>,
    pub step_indicator_finished_color: Option<Color>,
    pub step_indicator_unfinished_color: Option<Color>,
    pub step_indicator_current_color: Option<Color>,
    pub step_indicator_label_font_size: Option<f32>,
    pub current_step_indicator_label_font_size: Option<f32>,
    pub step_indicator_label_current_color: Option<Color>,
    pub step_indicator_label_finished_color: Option<Color>,
    pub step_indicator_label_unfinished_color: Option<Color>,
    pub label_color: Option<Color>,
    pub label_size: Option<f32>,
    pub sublabel_size: Option<f32>,
    pub sublabel_color: Option<Color>,
    pub right_label_color: Option<Color>,
    pub current_step_label_color: Option<Color>,
    pub finished_step_label_color: Option<Color>,
    pub right_label_align: Option<RightLabelAlign>,
    pub left_portion: Option<f32>,
}

macro_rules! apply_overrides {
    ($overrides:expr, $style:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $overrides.$field {
                $style.$field = value;
            }
        )+
    };
}

impl StyleOverrides {
    /// Read overrides from a TOML document.
    pub fn from_toml(document: &str) -> Result<Self, StyleError> {
        let overrides: Self = toml::from_str(document)?;
        tracing::debug!(target: targets::STYLE, ?overrides, "read TOML style overrides");
        Ok(overrides)
    }

    /// Read overrides from a JSON document.
    pub fn from_json(document: &str) -> Result<Self, StyleError> {
        let overrides: Self = serde_json::from_str(document)?;
        tracing::debug!(target: targets::STYLE, ?overrides, "read JSON style overrides");
        Ok(overrides)
    }

    /// Apply these overrides on top of `style`.
    pub fn apply(&self, mut style: StepIndicatorStyle) -> StepIndicatorStyle {
        apply_overrides!(
            self,
            style,
            step_indicator_size,
            current_step_indicator_size,
            separator_stroke_width,
            current_step_stroke_width,
            step_stroke_width,
            step_stroke_current_color,
            step_stroke_finished_color,
            step_stroke_unfinished_color,
            separator_finished_color,
            separator_unfinished_color,
            step_indicator_finished_color,
            step_indicator_unfinished_color,
            step_indicator_current_color,
            step_indicator_label_font_size,
            current_step_indicator_label_font_size,
            step_indicator_label_current_color,
            step_indicator_label_finished_color,
            step_indicator_label_unfinished_color,
            label_color,
            label_size,
            sublabel_size,
            sublabel_color,
            right_label_color,
            current_step_label_color,
            finished_step_label_color,
            right_label_align,
            left_portion,
        );
        style
    }
}
