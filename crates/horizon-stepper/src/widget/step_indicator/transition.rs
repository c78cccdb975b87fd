//! The fill-then-grow transition of the step indicator.
//!
//! Whenever the current position changes the indicator runs one sequence:
//!
//! 1. the current marker snaps back to the base size,
//! 2. the track fill slides to its new length,
//! 3. the current marker grows to the current size, its corner radius
//!    following so it stays a circle.
//!
//! A new target cancels the running sequence; the fill continues from
//! wherever it was.

use std::time::Duration;

use horizon_stepper_core::logging::targets;
use static_assertions::assert_impl_all;

use crate::widget::animation::{Easing, Phase, Timeline, TimelineState};

/// Timing shared by both phases of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Duration of each phase.
    pub duration: Duration,
    /// Easing of every tween.
    pub easing: Easing,
}

impl AnimationConfig {
    /// The default phase duration.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

    /// Set the phase duration using builder pattern.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing using builder pattern.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            easing: Easing::EaseInOut,
        }
    }
}

/// The phase of a running transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    /// The track fill is moving.
    Fill,
    /// The current marker is growing.
    Grow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    FillLength,
    MarkerSize,
    MarkerRadius,
}

/// Owner of the three animated values of a step indicator.
#[derive(Debug, Clone)]
pub struct StepTransition {
    timeline: Timeline<Channel>,
    base_size: f32,
    current_size: f32,
    fill_target: f32,
    config: AnimationConfig,
}

assert_impl_all!(StepTransition: Send, Sync);

impl StepTransition {
    /// Create a transition at rest: no fill, marker at `base_size`.
    pub fn new(base_size: f32, current_size: f32, config: AnimationConfig) -> Self {
        Self {
            timeline: Timeline::new([
                (Channel::FillLength, 0.0),
                (Channel::MarkerSize, base_size),
                (Channel::MarkerRadius, base_size / 2.0),
            ]),
            base_size,
            current_size,
            fill_target: 0.0,
            config,
        }
    }

    /// The timing used for new sequences.
    pub fn config(&self) -> AnimationConfig {
        self.config
    }

    /// Start a fill-then-grow sequence towards `target_offset`.
    #[tracing::instrument(target = "horizon_stepper::transition", level = "trace", skip(self))]
    pub fn retarget(&mut self, target_offset: f32) {
        if self.timeline.is_running() {
            tracing::debug!(
                target: targets::TRANSITION,
                previous_target = self.fill_target,
                "cancelling in-flight transition"
            );
        }
        self.timeline.cancel();

        self.timeline.snap(Channel::MarkerSize, self.base_size);
        self.timeline.snap(Channel::MarkerRadius, self.base_size / 2.0);
        self.fill_target = target_offset;

        let AnimationConfig { duration, easing } = self.config;
        self.timeline.play(vec![
            Phase::new(duration, easing).tween(Channel::FillLength, target_offset),
            Phase::new(duration, easing)
                .tween(Channel::MarkerSize, self.current_size)
                .tween(Channel::MarkerRadius, self.current_size / 2.0),
        ]);

        tracing::debug!(target: targets::TRANSITION, target_offset, "transition started");
    }

    /// Advance the running sequence by `delta`.
    ///
    /// Returns `true` when the sequence completed during this call.
    pub fn tick(&mut self, delta: Duration) -> bool {
        match self.timeline.advance(delta) {
            TimelineState::Finished => {
                tracing::debug!(
                    target: targets::TRANSITION,
                    fill_length = self.fill_length(),
                    "transition finished"
                );
                true
            }
            TimelineState::Idle | TimelineState::Running { .. } => false,
        }
    }

    /// Whether a sequence is running.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.timeline.is_running()
    }

    /// The phase currently playing.
    pub fn phase(&self) -> Option<TransitionPhase> {
        self.timeline.current_phase().map(|index| match index {
            0 => TransitionPhase::Fill,
            _ => TransitionPhase::Grow,
        })
    }

    /// Live length of the track fill.
    pub fn fill_length(&self) -> f32 {
        self.channel(Channel::FillLength)
    }

    /// Where the track fill is heading (or resting).
    pub fn fill_target(&self) -> f32 {
        self.fill_target
    }

    /// Live side of the current marker.
    pub fn marker_size(&self) -> f32 {
        self.channel(Channel::MarkerSize)
    }

    /// Live corner radius of the current marker.
    pub fn marker_radius(&self) -> f32 {
        self.channel(Channel::MarkerRadius)
    }

    fn channel(&self, channel: Channel) -> f32 {
        self.timeline.value(channel).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    fn linear() -> StepTransition {
        StepTransition::new(30.0, 40.0, AnimationConfig::default().with_easing(Easing::Linear))
    }

    #[test]
    fn test_initial_state() {
        let transition = linear();
        assert_eq!(transition.fill_length(), 0.0);
        assert_eq!(transition.marker_size(), 30.0);
        assert_eq!(transition.marker_radius(), 15.0);
        assert!(!transition.is_animating());
        assert_eq!(transition.phase(), None);
    }

    #[test]
    fn test_fill_then_grow() {
        let mut transition = linear();
        transition.retarget(200.0);
        assert_eq!(transition.phase(), Some(TransitionPhase::Fill));

        assert!(!transition.tick(MS(250)));
        assert!((transition.fill_length() - 100.0).abs() < 1e-3);
        assert_eq!(transition.marker_size(), 30.0);

        assert!(!transition.tick(MS(250)));
        assert_eq!(transition.fill_length(), 200.0);
        assert_eq!(transition.phase(), Some(TransitionPhase::Grow));

        assert!(!transition.tick(MS(250)));
        assert!((transition.marker_size() - 35.0).abs() < 1e-3);

        assert!(transition.tick(MS(250)));
        assert_eq!(transition.marker_size(), 40.0);
        assert_eq!(transition.marker_radius(), 20.0);
        assert!(!transition.is_animating());
    }

    #[test]
    fn test_retarget_snaps_marker_and_continues_fill() {
        let mut transition = linear();
        transition.retarget(200.0);
        transition.tick(MS(750));
        assert!(transition.marker_size() > 30.0);

        transition.retarget(0.0);
        assert_eq!(transition.marker_size(), 30.0);
        assert_eq!(transition.marker_radius(), 15.0);
        assert_eq!(transition.fill_length(), 200.0);

        transition.tick(MS(250));
        assert!((transition.fill_length() - 100.0).abs() < 1e-3);
    }

    fn settle(transition: &mut StepTransition) {
        while transition.is_animating() {
            transition.tick(MS(16));
        }
    }

    fn assert_at_rest(transition: &StepTransition) {
        assert!(!transition.is_animating());
        assert_eq!(transition.fill_length(), 200.0);
        assert_eq!(transition.marker_size(), 40.0);
        assert_eq!(transition.marker_radius(), 20.0);
    }

    #[test]
    fn test_same_target_twice_rests_like_once() {
        let mut once = linear();
        once.retarget(200.0);
        settle(&mut once);

        let mut twice = linear();
        twice.retarget(200.0);
        twice.retarget(200.0);
        settle(&mut twice);

        assert_at_rest(&once);
        assert_eq!(once.fill_length(), twice.fill_length());
        assert_eq!(once.marker_size(), twice.marker_size());
        assert_eq!(once.marker_radius(), twice.marker_radius());
    }

    #[test]
    fn test_same_target_mid_fill_rests_at_target() {
        let mut transition = linear();
        transition.retarget(200.0);
        transition.tick(MS(250));
        assert_eq!(transition.phase(), Some(TransitionPhase::Fill));

        transition.retarget(200.0);
        assert_eq!(transition.phase(), Some(TransitionPhase::Fill));
        settle(&mut transition);
        assert_at_rest(&transition);
    }

    #[test]
    fn test_same_target_mid_grow_rests_at_target() {
        let mut transition = linear();
        transition.retarget(200.0);
        transition.tick(MS(750));
        assert_eq!(transition.phase(), Some(TransitionPhase::Grow));

        transition.retarget(200.0);
        assert_eq!(transition.marker_size(), 30.0);
        assert_eq!(transition.fill_length(), 200.0);
        settle(&mut transition);
        assert_at_rest(&transition);
    }

    #[test]
    fn test_huge_tick_finishes_sequence() {
        let mut transition = linear();
        transition.retarget(200.0);
        assert!(!transition.tick(MS(16)));
        assert!(transition.tick(Duration::MAX));
        assert_at_rest(&transition);
    }

    #[test]
    fn test_radius_tracks_size() {
        let mut transition = StepTransition::new(30.0, 40.0, AnimationConfig::default());
        transition.retarget(120.0);
        for _ in 0..70 {
            transition.tick(MS(16));
            assert_eq!(transition.marker_radius(), transition.marker_size() / 2.0);
        }
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let mut transition = StepTransition::new(
            30.0,
            40.0,
            AnimationConfig::default().with_duration(Duration::ZERO),
        );
        transition.retarget(80.0);
        assert!(transition.tick(Duration::ZERO));
        assert_eq!(transition.fill_length(), 80.0);
        assert_eq!(transition.marker_size(), 40.0);
    }

    #[test]
    fn test_untouched_sequence_stays_pending() {
        let mut transition = linear();
        transition.retarget(50.0);
        assert!(transition.is_animating());
        assert_eq!(transition.fill_length(), 0.0);
        assert_eq!(transition.fill_target(), 50.0);
    }
}
