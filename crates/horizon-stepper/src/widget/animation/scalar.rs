//! A single animated value.

use std::time::Duration;

use super::easing::{Easing, lerp_eased};

/// A numeric value that can be snapped or tweened towards a target.
///
/// The value only moves when [`advance`](Self::advance) is called; there is
/// no wall clock involved, so the host's frame scheduler decides the pace.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedScalar {
    value: f32,
    from: f32,
    target: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
    running: bool,
}

impl AnimatedScalar {
    /// Create a scalar resting at `value`.
    pub fn new(value: f32) -> Self {
        Self {
            value,
            from: value,
            target: value,
            duration: Duration::ZERO,
            elapsed: Duration::ZERO,
            easing: Easing::default(),
            running: false,
        }
    }

    /// The live value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The value the scalar is heading to (or resting at).
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether a tween is in flight.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Jump to `value` immediately, cancelling any tween.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.from = value;
        self.target = value;
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    /// Freeze at the live value, cancelling any tween.
    pub fn stop(&mut self) {
        self.snap_to(self.value);
    }

    /// Start a tween from the live value to `target`.
    pub fn animate_to(&mut self, target: f32, duration: Duration, easing: Easing) {
        self.from = self.value;
        self.target = target;
        self.duration = duration;
        self.elapsed = Duration::ZERO;
        self.easing = easing;
        self.running = true;
    }

    /// Advance the tween by `delta`.
    ///
    /// Returns `None` while the tween is still running, or the part of `delta`
    /// left over after it completed (all of it when nothing was running).
    pub fn advance(&mut self, delta: Duration) -> Option<Duration> {
        if !self.running {
            return Some(delta);
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed >= self.duration {
            let leftover = self.elapsed - self.duration;
            self.snap_to(self.target);
            return Some(leftover);
        }

        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.value = lerp_eased(self.easing, self.from, self.target, t);
        None
    }
}

impl Default for AnimatedScalar {
    fn default() -> Self {
        Self::new(0.0)
    }
}
