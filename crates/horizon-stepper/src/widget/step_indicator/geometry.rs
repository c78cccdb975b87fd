//! Position-to-geometry mapping.
//!
//! [`offset`] is the single formula that places both the track fill and the
//! relay marker. [`IndicatorGeometry`] lays out everything else (track, step
//! markers, label cells) from the measured container size.

use horizon_stepper_render::{Point, Rect, Size};

/// Orientation of the step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Steps run left to right, labels sit below the markers.
    #[default]
    Horizontal,
    /// Steps run top to bottom, labels sit to the right of the markers.
    Vertical,
}

impl Orientation {
    /// The extent of `size` along the step axis.
    #[inline]
    pub fn main_extent(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// The extent of `size` across the step axis.
    #[inline]
    pub fn cross_extent(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }
}

/// Vertical padding around the label row of a horizontal indicator.
pub const HORIZONTAL_LABEL_PADDING: f32 = 4.0;
/// Horizontal padding around the label column of a vertical indicator.
pub const VERTICAL_LABEL_PADDING: f32 = 10.0;

/// Clamp `current_position` into `[0, step_count - 1]`.
#[inline]
pub fn clamp_position(current_position: i32, step_count: usize) -> usize {
    let last = step_count.saturating_sub(1);
    usize::try_from(current_position).map_or(0, |p| p.min(last))
}

/// Distance along the track from its start to the current position.
///
/// When `in_progress` is set the result lies half a step interval further
/// along, shifted back by half the current marker so the relay marker is
/// centered between the current step and the next.
///
/// A `step_count` below 2 has no step interval and yields `0.0`.
///
/// # Example
///
/// ```
/// use horizon_stepper::widget::step_indicator::offset;
///
/// assert_eq!(offset(2, 5, 400.0, false, 40.0), 200.0);
/// assert_eq!(offset(1, 3, 300.0, true, 40.0), 205.0);
/// ```
pub fn offset(
    current_position: i32,
    step_count: usize,
    track_length: f32,
    in_progress: bool,
    current_marker_size: f32,
) -> f32 {
    if step_count < 2 {
        return 0.0;
    }

    let clamped = clamp_position(current_position, step_count) as f32;
    let unit = track_length / (step_count - 1) as f32;

    if in_progress {
        unit * (clamped + 0.5) - current_marker_size / 2.0
    } else {
        unit * clamped
    }
}

/// The rectangles making up one label cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelCell {
    /// The whole cell, also the press target.
    pub bounds: Rect,
    /// Leading part holding the label and sublabel.
    pub left: Rect,
    /// Trailing part holding the right label.
    pub right: Rect,
}

/// Layout of a step indicator inside a measured container.
///
/// The container's origin is `(0, 0)`. Markers sit in a strip as thick as the
/// current marker along the container's leading edge, one equal cell per
/// step. The track runs from the first step center to the last; labels fill
/// the rest of the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorGeometry {
    orientation: Orientation,
    step_count: usize,
    container: Size,
    strip_thickness: f32,
    separator_width: f32,
    left_portion: f32,
}

impl IndicatorGeometry {
    /// Compute the layout.
    ///
    /// `left_portion` is the percentage (0 to 100) of each label cell given to
    /// the label and sublabel.
    pub fn new(
        orientation: Orientation,
        step_count: usize,
        container: Size,
        current_marker_size: f32,
        separator_width: f32,
        left_portion: f32,
    ) -> Self {
        Self {
            orientation,
            step_count: step_count.max(1),
            container,
            strip_thickness: current_marker_size,
            separator_width,
            left_portion: left_portion.clamp(0.0, 100.0),
        }
    }

    /// The orientation this layout was computed for.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The container size this layout was computed for.
    pub fn container(&self) -> Size {
        self.container
    }

    /// Extent of one step cell along the step axis.
    #[inline]
    pub fn cell_extent(&self) -> f32 {
        self.orientation.main_extent(self.container) / self.step_count as f32
    }

    /// Expected track length: the distance between the first and last step
    /// centers.
    #[inline]
    pub fn track_length(&self) -> f32 {
        self.orientation.main_extent(self.container) - self.cell_extent()
    }

    /// The band holding the step markers.
    pub fn strip(&self) -> Rect {
        self.axis_rect(
            0.0,
            0.0,
            self.orientation.main_extent(self.container),
            self.strip_thickness,
        )
    }

    /// The press target of the marker at `position`.
    pub fn cell(&self, position: usize) -> Rect {
        let cell = self.cell_extent();
        self.axis_rect(position as f32 * cell, 0.0, cell, self.strip_thickness)
    }

    /// Center of the marker at `position`.
    pub fn step_center(&self, position: usize) -> Point {
        let main = (position as f32 + 0.5) * self.cell_extent();
        let cross = self.strip_thickness / 2.0;
        match self.orientation {
            Orientation::Horizontal => Point::new(main, cross),
            Orientation::Vertical => Point::new(cross, main),
        }
    }

    /// Square marker of side `side` centered on step `position`.
    pub fn marker(&self, position: usize, side: f32) -> Rect {
        Rect::from_center(self.step_center(position), Size::new(side, side))
    }

    /// The unfinished track background.
    pub fn track(&self) -> Rect {
        self.track_segment(self.track_length())
    }

    /// The finished part of the track, `fill_length` long.
    pub fn fill(&self, fill_length: f32) -> Rect {
        self.track_segment(fill_length.max(0.0))
    }

    /// The relay marker, a square of `side` whose leading edge is `offset`
    /// along the track.
    pub fn relay(&self, offset: f32, side: f32) -> Rect {
        self.axis_rect(
            self.track_start() + offset,
            (self.strip_thickness - side) / 2.0,
            side,
            side,
        )
    }

    /// The area holding the labels.
    pub fn label_band(&self) -> Rect {
        let cross_total = self.orientation.cross_extent(self.container);
        let padding = match self.orientation {
            Orientation::Horizontal => HORIZONTAL_LABEL_PADDING,
            Orientation::Vertical => VERTICAL_LABEL_PADDING,
        };
        let cross_start = self.strip_thickness + padding;
        let cross_len = (cross_total - self.strip_thickness - 2.0 * padding).max(0.0);

        self.axis_rect(
            0.0,
            cross_start,
            self.orientation.main_extent(self.container),
            cross_len,
        )
    }

    /// The label cell for step `position`.
    pub fn label_cell(&self, position: usize) -> LabelCell {
        let band = self.label_band();
        let cell = self.cell_extent();
        let bounds = match self.orientation {
            Orientation::Horizontal => Rect::new(
                band.left() + position as f32 * cell,
                band.top(),
                cell,
                band.height(),
            ),
            Orientation::Vertical => Rect::new(
                band.left(),
                band.top() + position as f32 * cell,
                band.width(),
                cell,
            ),
        };

        // The label and right label always share the cell side by side.
        let left_width = bounds.width() * self.left_portion / 100.0;
        LabelCell {
            bounds,
            left: Rect::new(bounds.left(), bounds.top(), left_width, bounds.height()),
            right: Rect::new(
                bounds.left() + left_width,
                bounds.top(),
                bounds.width() - left_width,
                bounds.height(),
            ),
        }
    }

    /// The step whose marker cell (or label cell, when `labels` is set)
    /// contains `point`.
    pub fn hit_test(&self, point: Point, labels: bool) -> Option<usize> {
        let cell = self.cell_extent();
        if cell <= 0.0 {
            return None;
        }

        let in_strip = self.strip().contains(point);
        let in_labels = labels && self.label_band().contains(point);
        if !in_strip && !in_labels {
            return None;
        }

        let main = match self.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        };
        let index = (main / cell).floor() as usize;
        Some(index.min(self.step_count - 1))
    }

    fn track_start(&self) -> f32 {
        self.cell_extent() / 2.0
    }

    fn track_segment(&self, length: f32) -> Rect {
        self.axis_rect(
            self.track_start(),
            (self.strip_thickness - self.separator_width) / 2.0,
            length,
            self.separator_width,
        )
    }

    fn axis_rect(&self, main: f32, cross: f32, main_len: f32, cross_len: f32) -> Rect {
        match self.orientation {
            Orientation::Horizontal => Rect::new(main, cross, main_len, cross_len),
            Orientation::Vertical => Rect::new(cross, main, cross_len, main_len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> IndicatorGeometry {
        IndicatorGeometry::new(
            Orientation::Horizontal,
            5,
            Size::new(500.0, 100.0),
            40.0,
            3.0,
            50.0,
        )
    }

    #[test]
    fn test_offset_not_in_progress() {
        for step_count in 2..7usize {
            for position in 0..step_count {
                let expected = 400.0 * position as f32 / (step_count - 1) as f32;
                let actual = offset(position as i32, step_count, 400.0, false, 40.0);
                assert!((actual - expected).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_offset_in_progress() {
        for step_count in 2..7usize {
            for position in 0..step_count {
                let expected =
                    300.0 * (position as f32 + 0.5) / (step_count - 1) as f32 - 40.0 / 2.0;
                let actual = offset(position as i32, step_count, 300.0, true, 40.0);
                assert!((actual - expected).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_offset_clamps_position() {
        assert_eq!(offset(9, 5, 400.0, false, 40.0), 400.0);
        assert_eq!(offset(4, 5, 400.0, false, 40.0), 400.0);
        assert_eq!(offset(-3, 5, 400.0, false, 40.0), 0.0);
    }

    #[test]
    fn test_offset_degenerate_step_count() {
        assert_eq!(offset(0, 1, 400.0, false, 40.0), 0.0);
        assert_eq!(offset(0, 0, 400.0, true, 40.0), 0.0);
    }

    #[test]
    fn test_clamp_position() {
        assert_eq!(clamp_position(-1, 5), 0);
        assert_eq!(clamp_position(2, 5), 2);
        assert_eq!(clamp_position(7, 5), 4);
    }

    #[test]
    fn test_horizontal_track() {
        let geometry = horizontal();
        assert_eq!(geometry.cell_extent(), 100.0);
        assert_eq!(geometry.track_length(), 400.0);
        assert_eq!(geometry.track(), Rect::new(50.0, 18.5, 400.0, 3.0));
        assert_eq!(geometry.fill(200.0), Rect::new(50.0, 18.5, 200.0, 3.0));
        assert_eq!(geometry.fill(-5.0).width(), 0.0);
    }

    #[test]
    fn test_markers_are_centered_in_cells() {
        let geometry = horizontal();
        assert_eq!(geometry.step_center(0), Point::new(50.0, 20.0));
        assert_eq!(geometry.marker(2, 30.0), Rect::new(235.0, 5.0, 30.0, 30.0));
        assert_eq!(geometry.cell(4), Rect::new(400.0, 0.0, 100.0, 40.0));
    }

    #[test]
    fn test_relay_leading_edge() {
        // Three steps over 400px: cells of 133.3, track of 266.7.
        let geometry = IndicatorGeometry::new(
            Orientation::Horizontal,
            3,
            Size::new(400.0, 40.0),
            40.0,
            3.0,
            50.0,
        );
        let relay = geometry.relay(205.0, 40.0);
        let track_start = geometry.cell_extent() / 2.0;
        assert!((relay.left() - (track_start + 205.0)).abs() < 1e-3);
        assert_eq!(relay.top(), 0.0);
        assert_eq!(relay.size, Size::new(40.0, 40.0));
    }

    #[test]
    fn test_vertical_layout() {
        let geometry = IndicatorGeometry::new(
            Orientation::Vertical,
            4,
            Size::new(200.0, 400.0),
            40.0,
            4.0,
            60.0,
        );
        assert_eq!(geometry.track(), Rect::new(18.0, 50.0, 4.0, 300.0));
        assert_eq!(geometry.step_center(1), Point::new(20.0, 150.0));
        assert_eq!(geometry.label_band(), Rect::new(50.0, 0.0, 140.0, 400.0));

        let cell = geometry.label_cell(3);
        assert_eq!(cell.bounds, Rect::new(50.0, 300.0, 140.0, 100.0));
        assert_eq!(cell.left, Rect::new(50.0, 300.0, 84.0, 100.0));
        assert_eq!(cell.right.left(), 134.0);
    }

    #[test]
    fn test_horizontal_label_cells() {
        let geometry = horizontal();
        assert_eq!(geometry.label_band(), Rect::new(0.0, 44.0, 500.0, 52.0));

        let cell = geometry.label_cell(1);
        assert_eq!(cell.bounds, Rect::new(100.0, 44.0, 100.0, 52.0));
        assert_eq!(cell.left.width(), 50.0);
        assert_eq!(cell.right.width(), 50.0);
    }

    #[test]
    fn test_hit_test() {
        let geometry = horizontal();
        assert_eq!(geometry.hit_test(Point::new(10.0, 10.0), false), Some(0));
        assert_eq!(geometry.hit_test(Point::new(350.0, 20.0), false), Some(3));
        assert_eq!(geometry.hit_test(Point::new(350.0, 60.0), false), None);
        assert_eq!(geometry.hit_test(Point::new(350.0, 60.0), true), Some(3));
        assert_eq!(geometry.hit_test(Point::new(600.0, 20.0), true), None);
    }
}
