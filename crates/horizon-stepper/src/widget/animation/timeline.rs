//! Sequenced and parallel composition of animated scalars.
//!
//! A [`Timeline`] owns a set of named channels (each an [`AnimatedScalar`])
//! and plays a list of [`Phase`]s in strict sequence. All tweens inside one
//! phase run in parallel and share its duration and easing. A phase captures
//! its start values when it begins, not when the timeline is played, so later
//! phases pick up whatever earlier phases (or snaps) left behind.

use std::time::Duration;

use super::easing::Easing;
use super::scalar::AnimatedScalar;

/// One step of a timeline: parallel tweens sharing a duration and easing.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase<C> {
    tweens: Vec<(C, f32)>,
    duration: Duration,
    easing: Easing,
}

impl<C: Copy + PartialEq> Phase<C> {
    /// Create an empty phase.
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            tweens: Vec::new(),
            duration,
            easing,
        }
    }

    /// Add a tween of `channel` to `target` using builder pattern.
    pub fn tween(mut self, channel: C, target: f32) -> Self {
        self.tweens.push((channel, target));
        self
    }

    /// The tweens in this phase.
    pub fn tweens(&self) -> &[(C, f32)] {
        &self.tweens
    }

    /// The phase duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Result of advancing a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineState {
    /// Nothing is playing.
    Idle,
    /// A phase is in flight.
    Running {
        /// Index of the phase currently playing.
        phase: usize,
    },
    /// The last phase completed during this advance.
    Finished,
}

/// A set of animated channels and the phase sequence driving them.
#[derive(Debug, Clone)]
pub struct Timeline<C> {
    channels: Vec<(C, AnimatedScalar)>,
    phases: Vec<Phase<C>>,
    phase_index: usize,
    phase_started: bool,
    running: bool,
}

impl<C: Copy + PartialEq + std::fmt::Debug> Timeline<C> {
    /// Create a timeline with the given channels and their resting values.
    pub fn new(channels: impl IntoIterator<Item = (C, f32)>) -> Self {
        Self {
            channels: channels
                .into_iter()
                .map(|(channel, value)| (channel, AnimatedScalar::new(value)))
                .collect(),
            phases: Vec::new(),
            phase_index: 0,
            phase_started: false,
            running: false,
        }
    }

    /// The live value of a channel, or `None` for an unknown channel.
    pub fn value(&self, channel: C) -> Option<f32> {
        self.channels
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, scalar)| scalar.value())
    }

    /// Snap a channel to `value` without animating.
    ///
    /// Returns `false` for an unknown channel.
    pub fn snap(&mut self, channel: C, value: f32) -> bool {
        match channel_mut(&mut self.channels, channel) {
            Some(scalar) => {
                scalar.snap_to(value);
                true
            }
            None => false,
        }
    }

    /// Whether a sequence is playing.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Index of the playing phase, if any.
    pub fn current_phase(&self) -> Option<usize> {
        self.running.then_some(self.phase_index)
    }

    /// Cancel whatever is playing, freezing every channel at its live value.
    pub fn cancel(&mut self) {
        for (_, scalar) in &mut self.channels {
            scalar.stop();
        }
        self.phases.clear();
        self.phase_index = 0;
        self.phase_started = false;
        self.running = false;
    }

    /// Cancel the current sequence and start playing `phases`.
    pub fn play(&mut self, phases: Vec<Phase<C>>) {
        self.cancel();
        self.running = !phases.is_empty();
        self.phases = phases;
    }

    /// Advance the sequence by `delta`.
    ///
    /// Time left over when a phase completes flows into the next one, so a
    /// single large step can cross phase boundaries.
    pub fn advance(&mut self, delta: Duration) -> TimelineState {
        if !self.running {
            return TimelineState::Idle;
        }

        let mut remaining = delta;
        loop {
            let phase = &self.phases[self.phase_index];

            if !self.phase_started {
                for &(channel, target) in &phase.tweens {
                    match channel_mut(&mut self.channels, channel) {
                        Some(scalar) => scalar.animate_to(target, phase.duration, phase.easing),
                        None => tracing::warn!(
                            target: "horizon_stepper::transition",
                            ?channel,
                            "tween targets an unknown channel"
                        ),
                    }
                }
                self.phase_started = true;
            }

            // The phase ends when its slowest tween does.
            let mut phase_leftover = Some(remaining);
            for &(channel, _) in &phase.tweens {
                if let Some(scalar) = channel_mut(&mut self.channels, channel) {
                    phase_leftover = match (phase_leftover, scalar.advance(remaining)) {
                        (Some(a), Some(b)) => Some(a.min(b)),
                        _ => None,
                    };
                }
            }

            let Some(leftover) = phase_leftover else {
                return TimelineState::Running {
                    phase: self.phase_index,
                };
            };

            self.phase_index += 1;
            self.phase_started = false;
            remaining = leftover;

            if self.phase_index >= self.phases.len() {
                self.phases.clear();
                self.phase_index = 0;
                self.running = false;
                return TimelineState::Finished;
            }
        }
    }
}

fn channel_mut<C: PartialEq>(
    channels: &mut [(C, AnimatedScalar)],
    channel: C,
) -> Option<&mut AnimatedScalar> {
    channels
        .iter_mut()
        .find(|(c, _)| *c == channel)
        .map(|(_, scalar)| scalar)
}
