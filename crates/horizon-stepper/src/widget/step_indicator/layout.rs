//! Host measurements and the readiness gate.

use horizon_stepper_core::logging::targets;
use horizon_stepper_render::Size;

/// The container size and track length last reported by the host.
///
/// Zero means "not measured yet". Geometry that depends on a measurement is
/// only produced once [`is_ready`](Self::is_ready) holds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutMeasurer {
    container: Size,
    track_length: f32,
}

impl LayoutMeasurer {
    /// Create a measurer with nothing measured.
    pub fn new() -> Self {
        Self::default()
    }

    /// The measured container size.
    #[inline]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// The measured track length.
    #[inline]
    pub fn track_length(&self) -> f32 {
        self.track_length
    }

    /// Whether the container has been measured.
    #[inline]
    pub fn has_container(&self) -> bool {
        !self.container.is_empty()
    }

    /// Whether both measurements are usable.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.has_container() && self.track_length > 0.0
    }

    /// Record the container size.
    ///
    /// Returns `true` if it differs from the previous measurement.
    pub fn set_container_size(&mut self, size: Size) -> bool {
        let size = Size::new(sanitize(size.width), sanitize(size.height));
        if size == self.container {
            return false;
        }

        tracing::debug!(
            target: targets::LAYOUT,
            width = size.width,
            height = size.height,
            "container measured"
        );
        self.container = size;
        true
    }

    /// Record the track length.
    ///
    /// Returns `true` if it differs from the previous measurement.
    pub fn set_track_length(&mut self, length: f32) -> bool {
        let length = sanitize(length);
        if length == self.track_length {
            return false;
        }

        tracing::debug!(target: targets::LAYOUT, length, "track measured");
        self.track_length = length;
        true
    }
}

/// Negative and non-finite measurements count as unmeasured.
fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
