//! Step status classification.

/// The status of a step relative to the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// The step before the current position.
    Finished,
    /// The step at the current position.
    Current,
    /// The step after the current position.
    Unfinished,
}

impl StepStatus {
    /// Lower-case name, as used in logs and style documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Finished => "finished",
            Self::Current => "current",
            Self::Unfinished => "unfinished",
        }
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the step at `position` against `current_position`.
///
/// `current_position` is used as given, without clamping, so a position past
/// the last step marks every step finished and a negative one marks every
/// step unfinished.
///
/// # Example
///
/// ```
/// use horizon_stepper::widget::step_indicator::{StepStatus, classify};
///
/// assert_eq!(classify(1, 2), StepStatus::Finished);
/// assert_eq!(classify(2, 2), StepStatus::Current);
/// assert_eq!(classify(3, 2), StepStatus::Unfinished);
/// ```
#[inline]
pub fn classify(position: usize, current_position: i32) -> StepStatus {
    let position = position as i64;
    let current = i64::from(current_position);
    match position.cmp(&current) {
        std::cmp::Ordering::Less => StepStatus::Finished,
        std::cmp::Ordering::Equal => StepStatus::Current,
        std::cmp::Ordering::Greater => StepStatus::Unfinished,
    }
}
