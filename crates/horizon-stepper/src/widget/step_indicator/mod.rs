//! Step indicator widget.
//!
//! A [`StepIndicator`] shows a row (or column) of numbered step markers
//! joined by a track. Steps before the current position are finished, the
//! current step is drawn larger, and a change of position animates the
//! track fill towards the new step before the new current marker grows.
//!
//! The widget is headless: the host reports measurements, forwards presses
//! and frame ticks, and draws the [`StepIndicatorScene`] it gets back.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_stepper::widget::step_indicator::StepIndicator;
//! use horizon_stepper_render::Size;
//!
//! let mut indicator = StepIndicator::builder()
//!     .step_count(5)
//!     .labels(["Cart", "Delivery", "Address", "Payment", "Summary"])
//!     .build()
//!     .unwrap();
//!
//! indicator.step_pressed.connect(|position| println!("pressed step {position}"));
//!
//! indicator.resize(Size::new(500.0, 80.0));
//! indicator.update(2);
//! while indicator.tick(Duration::from_millis(16)) {}
//!
//! assert_eq!(indicator.transition().fill_length(), 200.0);
//! assert!(!indicator.scene().is_empty());
//! ```
//!
//! # Signals
//!
//! - `step_pressed(usize)`: A marker or its label was pressed
//! - `position_changed(i32)`: [`StepIndicator::update`] changed the position
//! - `transition_finished(i32)`: A fill-and-grow sequence completed

mod content;
mod error;
mod geometry;
mod layout;
mod scene;
mod status;
mod style;
mod transition;

pub use content::{StepContent, StepContext, StepRenderer};
pub use error::{ConfigError, StyleError};
pub use geometry::{
    HORIZONTAL_LABEL_PADDING, IndicatorGeometry, LabelCell, Orientation, VERTICAL_LABEL_PADDING,
    clamp_position, offset,
};
pub use layout::LayoutMeasurer;
pub use scene::StepIndicatorScene;
pub use status::{StepStatus, classify};
pub use style::{RightLabelAlign, StepIndicatorStyle, StyleOverrides};
pub use transition::{AnimationConfig, StepTransition, TransitionPhase};

use std::time::Duration;

use horizon_stepper_core::logging::targets;
use horizon_stepper_core::{PerfSpan, Property, Signal};
use horizon_stepper_render::{
    DisplayList, HorizontalAlign, Point, Rect, Renderer, RoundedRect, Size, Stroke, TextRun,
    VerticalAlign,
};
use static_assertions::assert_impl_all;

/// Image key drawn for the relay marker unless the builder sets another.
pub const DEFAULT_IN_PROGRESS_IMAGE: &str = "in-progress";

/// An animated progress stepper.
///
/// Built with [`StepIndicator::builder`]. Everything that moves is driven by
/// the host: [`update`](Self::update) on position changes,
/// [`resize`](Self::resize) or the finer measurement setters on layout,
/// [`tick`](Self::tick) on every frame while it returns `true`.
pub struct StepIndicator {
    step_count: usize,
    current_position: Property<i32>,
    orientation: Orientation,
    in_progress: bool,

    labels: Option<Vec<String>>,
    sublabels: Option<Vec<String>>,
    right_labels: Option<Vec<String>>,

    style: StepIndicatorStyle,
    in_progress_image: String,
    step_renderer: Option<Box<dyn StepRenderer>>,

    measurer: LayoutMeasurer,
    transition: StepTransition,

    /// Signal emitted with the position of a pressed step.
    pub step_pressed: Signal<usize>,

    /// Signal emitted when [`update`](Self::update) changes the position.
    pub position_changed: Signal<i32>,

    /// Signal emitted with the current position when a transition completes.
    pub transition_finished: Signal<i32>,
}

assert_impl_all!(StepIndicator: Send, Sync);

impl StepIndicator {
    /// Start configuring a step indicator.
    pub fn builder() -> StepIndicatorBuilder {
        StepIndicatorBuilder::new()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Number of steps.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// The current position as last given, unclamped.
    pub fn current_position(&self) -> i32 {
        self.current_position.get()
    }

    /// The orientation, fixed at build time.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the current step is shown as in progress.
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Show or hide the in-progress relay marker.
    ///
    /// The relay marker follows immediately; the track fill picks up the
    /// half-step shift at the next position change or track measurement.
    pub fn set_in_progress(&mut self, in_progress: bool) {
        if self.in_progress != in_progress {
            tracing::debug!(target: targets::WIDGET, in_progress, "in-progress changed");
            self.in_progress = in_progress;
        }
    }

    /// The labels drawn beside the markers.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// The secondary labels drawn under each label.
    pub fn sublabels(&self) -> Option<&[String]> {
        self.sublabels.as_deref()
    }

    /// The labels drawn in the trailing part of each label cell.
    pub fn right_labels(&self) -> Option<&[String]> {
        self.right_labels.as_deref()
    }

    /// The validated style.
    pub fn style(&self) -> &StepIndicatorStyle {
        &self.style
    }

    /// Image key of the relay marker.
    pub fn in_progress_image(&self) -> &str {
        &self.in_progress_image
    }

    /// The status of the step at `position`.
    pub fn status(&self, position: usize) -> StepStatus {
        classify(position, self.current_position())
    }

    /// The animated values.
    pub fn transition(&self) -> &StepTransition {
        &self.transition
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Whether the container and track have both been measured.
    pub fn is_ready(&self) -> bool {
        self.measurer.is_ready()
    }

    /// The recorded measurements.
    pub fn measurer(&self) -> &LayoutMeasurer {
        &self.measurer
    }

    /// Layout for the measured container, if there is one.
    pub fn geometry(&self) -> Option<IndicatorGeometry> {
        self.measurer.has_container().then(|| {
            IndicatorGeometry::new(
                self.orientation,
                self.step_count,
                self.measurer.container_size(),
                self.style.current_step_indicator_size,
                self.style.separator_stroke_width,
                self.style.left_portion,
            )
        })
    }

    /// Record the size of the whole widget area.
    pub fn set_container_size(&mut self, size: Size) {
        let was_ready = self.is_ready();
        if self.measurer.set_container_size(size) && self.is_ready() && !was_ready {
            tracing::debug!(target: targets::LAYOUT, "step indicator ready");
            self.retarget();
        }
    }

    /// Record the measured track length.
    ///
    /// A new length restarts the transition towards the current position,
    /// since every offset scales with it.
    pub fn set_track_length(&mut self, length: f32) {
        if self.measurer.set_track_length(length) && self.is_ready() {
            self.retarget();
        }
    }

    /// Record the measured track box; its extent along the steps is the
    /// track length.
    pub fn set_track_size(&mut self, size: Size) {
        self.set_track_length(self.orientation.main_extent(size));
    }

    /// Record the container and derive the track length from the layout.
    pub fn resize(&mut self, size: Size) {
        self.set_container_size(size);
        let track_length = self.geometry().map_or(0.0, |g| g.track_length());
        self.set_track_length(track_length);
    }

    // =========================================================================
    // Position and animation
    // =========================================================================

    /// Move the current position.
    ///
    /// Does nothing if the position is unchanged. Otherwise the transition
    /// restarts towards the new step (once measured) and
    /// [`position_changed`](Self::position_changed) is emitted. Positions
    /// outside the step range are kept as given and clamped for geometry.
    #[tracing::instrument(target = "horizon_stepper", level = "trace", skip(self))]
    pub fn update(&mut self, new_position: i32) {
        if !self.current_position.set(new_position) {
            return;
        }

        if clamp_position(new_position, self.step_count) as i64 != i64::from(new_position) {
            tracing::warn!(
                target: targets::WIDGET,
                new_position,
                step_count = self.step_count,
                "position outside the step range, clamping for layout"
            );
        }

        if self.is_ready() {
            self.retarget();
        } else {
            tracing::debug!(
                target: targets::LAYOUT,
                new_position,
                "not measured yet, transition deferred"
            );
        }

        self.position_changed.emit(new_position);
    }

    /// Advance the transition by `delta`.
    ///
    /// Returns `true` while another frame is needed.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.transition.tick(delta) {
            self.transition_finished.emit(self.current_position());
        }
        self.transition.is_animating()
    }

    /// Offset of the relay marker along the track for the current inputs.
    pub fn relay_offset(&self) -> f32 {
        offset(
            self.current_position(),
            self.step_count,
            self.measurer.track_length(),
            self.in_progress,
            self.style.current_step_indicator_size,
        )
    }

    fn retarget(&mut self) {
        let target = offset(
            self.current_position(),
            self.step_count,
            self.measurer.track_length(),
            self.in_progress,
            self.style.current_step_indicator_size,
        );
        self.transition.retarget(target);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Report a press on the step at `position` (its marker or its label).
    ///
    /// Emits [`step_pressed`](Self::step_pressed) whatever the step's status.
    /// Returns `false` for a position past the last step.
    pub fn press(&self, position: usize) -> bool {
        if position >= self.step_count {
            tracing::debug!(
                target: targets::WIDGET,
                position,
                step_count = self.step_count,
                "ignoring press outside the step range"
            );
            return false;
        }

        tracing::debug!(
            target: targets::WIDGET,
            position,
            status = %self.status(position),
            "step pressed"
        );
        self.step_pressed.emit(position);
        true
    }

    /// Report a press at `point` in container coordinates.
    ///
    /// Returns the pressed step, if the point hit a marker cell or a label.
    pub fn press_at(&self, point: Point) -> Option<usize> {
        let position = self
            .geometry()?
            .hit_test(point, self.labels.is_some())?;
        self.press(position).then_some(position)
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Build the display list for the current frame.
    pub fn scene(&self) -> StepIndicatorScene {
        let _span = PerfSpan::new("step_indicator_scene");

        let mut display_list = DisplayList::new();
        self.paint(&mut display_list);

        tracing::trace!(
            target: targets::SCENE,
            commands = display_list.len(),
            "scene built"
        );
        StepIndicatorScene::new(self.measurer.container_size(), display_list)
    }

    /// Paint the current frame onto `renderer`.
    ///
    /// Nothing is drawn before the container has been measured. The track
    /// fill and the relay marker also wait for the track.
    pub fn paint<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let Some(geometry) = self.geometry() else {
            tracing::trace!(target: targets::SCENE, "container not measured, nothing to paint");
            return;
        };
        let style = &self.style;
        let current = self.current_position();

        renderer.fill_rect(geometry.track(), style.separator_unfinished_color);
        if self.is_ready() {
            renderer.fill_rect(
                geometry.fill(self.transition.fill_length()),
                style.separator_finished_color,
            );
        }

        for position in 0..self.step_count {
            self.paint_step(renderer, &geometry, position, current);
        }

        if self.in_progress && self.is_ready() {
            let relay = geometry.relay(self.relay_offset(), style.current_step_indicator_size);
            renderer.draw_image(&self.in_progress_image, relay);
        }

        if let Some(labels) = &self.labels {
            self.paint_labels(renderer, &geometry, labels, current);
        }
    }

    fn paint_step<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        geometry: &IndicatorGeometry,
        position: usize,
        current: i32,
    ) {
        let style = &self.style;
        let status = classify(position, current);

        let (side, radius) = match status {
            StepStatus::Current => (self.transition.marker_size(), self.transition.marker_radius()),
            StepStatus::Finished | StepStatus::Unfinished => {
                (style.step_indicator_size, style.step_indicator_size / 2.0)
            }
        };
        let bounds = geometry.marker(position, side);
        let marker = RoundedRect::new(bounds, radius);

        renderer.fill_rounded_rect(marker, style.marker_color(status));
        let (stroke_width, stroke_color) = style.marker_stroke(status);
        let stroke = Stroke::new(stroke_color, stroke_width);
        if stroke.is_visible() {
            renderer.stroke_rounded_rect(marker, stroke);
        }

        let context = StepContext { position, status };
        let content = match &self.step_renderer {
            Some(step_renderer) => step_renderer.render_step(context),
            None => StepContent::number(position),
        };
        match content {
            StepContent::Text(text) => {
                let (font_size, color) = style.marker_label(status);
                renderer.draw_text(&TextRun::new(text, bounds, font_size, color));
            }
            StepContent::Image(key) => renderer.draw_image(&key, bounds),
            StepContent::Empty => {}
        }
    }

    fn paint_labels<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        geometry: &IndicatorGeometry,
        labels: &[String],
        current: i32,
    ) {
        let style = &self.style;

        for (index, label) in labels.iter().enumerate() {
            let cell = geometry.label_cell(index);
            let label_color = style.label_color_for(classify(index, current));
            let sublabel = self
                .sublabels
                .as_ref()
                .and_then(|sublabels| sublabels.get(index))
                .filter(|sublabel| !sublabel.is_empty());

            match sublabel {
                Some(sublabel) => {
                    let (upper, lower) = split_vertically(cell.left);
                    renderer.draw_text(
                        &TextRun::new(label.as_str(), upper, style.label_size, label_color)
                            .with_horizontal_align(HorizontalAlign::Left)
                            .with_vertical_align(VerticalAlign::Bottom),
                    );
                    renderer.draw_text(
                        &TextRun::new(
                            sublabel.as_str(),
                            lower,
                            style.sublabel_size,
                            style.sublabel_color,
                        )
                        .with_horizontal_align(HorizontalAlign::Left)
                        .with_vertical_align(VerticalAlign::Top),
                    );
                }
                None => renderer.draw_text(
                    &TextRun::new(label.as_str(), cell.left, style.label_size, label_color)
                        .with_horizontal_align(HorizontalAlign::Left),
                ),
            }

            if let Some(right_label) = self.right_labels.as_ref().and_then(|r| r.get(index)) {
                renderer.draw_text(
                    &TextRun::new(
                        right_label.as_str(),
                        cell.right,
                        style.sublabel_size,
                        style.right_label_color,
                    )
                    .with_horizontal_align(style.right_label_align.into()),
                );
            }
        }
    }
}

impl std::fmt::Debug for StepIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepIndicator")
            .field("step_count", &self.step_count)
            .field("current_position", &self.current_position)
            .field("orientation", &self.orientation)
            .field("in_progress", &self.in_progress)
            .field("measurer", &self.measurer)
            .field("transition", &self.transition)
            .finish_non_exhaustive()
    }
}

fn split_vertically(rect: Rect) -> (Rect, Rect) {
    let half = rect.height() / 2.0;
    (
        Rect::new(rect.left(), rect.top(), rect.width(), half),
        Rect::new(rect.left(), rect.top() + half, rect.width(), half),
    )
}

/// Configuration for a [`StepIndicator`].
///
/// Every setting has a default: five steps, position 0, horizontal, not in
/// progress, no labels, the default style and a 500 ms ease-in-out
/// transition.
pub struct StepIndicatorBuilder {
    step_count: usize,
    current_position: i32,
    orientation: Orientation,
    in_progress: bool,
    labels: Option<Vec<String>>,
    sublabels: Option<Vec<String>>,
    right_labels: Option<Vec<String>>,
    style: StepIndicatorStyle,
    style_overrides: Option<StyleOverrides>,
    animation: AnimationConfig,
    step_renderer: Option<Box<dyn StepRenderer>>,
    in_progress_image: String,
}

impl Default for StepIndicatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StepIndicatorBuilder {
    /// The default number of steps.
    pub const DEFAULT_STEP_COUNT: usize = 5;

    /// Create a builder with every default.
    pub fn new() -> Self {
        Self {
            step_count: Self::DEFAULT_STEP_COUNT,
            current_position: 0,
            orientation: Orientation::Horizontal,
            in_progress: false,
            labels: None,
            sublabels: None,
            right_labels: None,
            style: StepIndicatorStyle::default(),
            style_overrides: None,
            animation: AnimationConfig::default(),
            step_renderer: None,
            in_progress_image: DEFAULT_IN_PROGRESS_IMAGE.to_string(),
        }
    }

    /// Set the number of steps (at least 2).
    pub fn step_count(mut self, step_count: usize) -> Self {
        self.step_count = step_count;
        self
    }

    /// Set the initial position.
    pub fn current_position(mut self, position: i32) -> Self {
        self.current_position = position;
        self
    }

    /// Set the orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Show the current step as in progress.
    pub fn in_progress(mut self, in_progress: bool) -> Self {
        self.in_progress = in_progress;
        self
    }

    /// Set one label per step.
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Set one sublabel per step. Empty strings leave a step without one.
    pub fn sublabels<I, S>(mut self, sublabels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sublabels = Some(sublabels.into_iter().map(Into::into).collect());
        self
    }

    /// Set one right label per step.
    pub fn right_labels<I, S>(mut self, right_labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.right_labels = Some(right_labels.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the whole style.
    pub fn style(mut self, style: StepIndicatorStyle) -> Self {
        self.style = style;
        self
    }

    /// Apply partial overrides on top of the style at build time.
    pub fn style_overrides(mut self, overrides: StyleOverrides) -> Self {
        self.style_overrides = Some(overrides);
        self
    }

    /// Set the transition timing.
    pub fn animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Draw custom content inside the markers.
    pub fn step_renderer(mut self, renderer: impl StepRenderer + 'static) -> Self {
        self.step_renderer = Some(Box::new(renderer));
        self
    }

    /// Set the image key of the relay marker.
    pub fn in_progress_image(mut self, key: impl Into<String>) -> Self {
        self.in_progress_image = key.into();
        self
    }

    /// Validate the configuration and create the widget.
    pub fn build(self) -> Result<StepIndicator, ConfigError> {
        if self.step_count < 2 {
            return Err(ConfigError::StepCount(self.step_count));
        }

        for (kind, list) in [
            ("labels", &self.labels),
            ("sublabels", &self.sublabels),
            ("right labels", &self.right_labels),
        ] {
            if let Some(list) = list
                && list.len() != self.step_count
            {
                return Err(ConfigError::label_count(kind, self.step_count, list.len()));
            }
        }

        let style = match &self.style_overrides {
            Some(overrides) => overrides.apply(self.style),
            None => self.style,
        };
        style.validate()?;

        let transition = StepTransition::new(
            style.step_indicator_size,
            style.current_step_indicator_size,
            self.animation,
        );

        tracing::debug!(
            target: targets::WIDGET,
            step_count = self.step_count,
            current_position = self.current_position,
            orientation = ?self.orientation,
            "step indicator built"
        );

        Ok(StepIndicator {
            step_count: self.step_count,
            current_position: Property::new(self.current_position),
            orientation: self.orientation,
            in_progress: self.in_progress,
            labels: self.labels,
            sublabels: self.sublabels,
            right_labels: self.right_labels,
            style,
            in_progress_image: self.in_progress_image,
            step_renderer: self.step_renderer,
            measurer: LayoutMeasurer::new(),
            transition,
            step_pressed: Signal::new(),
            position_changed: Signal::new(),
            transition_finished: Signal::new(),
        })
    }
}
