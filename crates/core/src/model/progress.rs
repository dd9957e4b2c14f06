use std::fmt;

use crate::error::ProgressError;
use crate::model::Step;

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// A completion percentage, always within `[Progress::MIN, Progress::MAX]`.
///
/// The inner value is private: the only ways to obtain a different `Progress`
/// are the validated constructor and the saturating step operations, so an
/// out-of-range value cannot be represented.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Progress(u8);

impl Progress {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    pub const ZERO: Self = Self(Self::MIN);
    pub const FULL: Self = Self(Self::MAX);

    /// Creates a validated progress value.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::OutOfRange` if `value` is above `Progress::MAX`.
    pub fn new(value: u32) -> Result<Self, ProgressError> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self(v)),
            _ => Err(ProgressError::OutOfRange { value }),
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// True at the lower absorbing boundary.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == Self::MIN
    }

    /// True at the upper absorbing boundary.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 == Self::MAX
    }

    /// `min(self + step, MAX)`.
    #[must_use]
    pub fn saturating_add(self, step: Step) -> Self {
        let headroom = u32::from(Self::MAX - self.0);
        let delta = step.value().min(headroom);
        // delta <= headroom, so the sum stays within u8 and MAX.
        Self(self.0 + delta as u8)
    }

    /// `max(self - step, MIN)`.
    #[must_use]
    pub fn saturating_sub(self, step: Step) -> Self {
        let delta = step.value().min(u32::from(self.0));
        Self(self.0 - delta as u8)
    }

    /// Direction of travel from `self` to `other`, if they differ.
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        match other.cmp(&self) {
            std::cmp::Ordering::Greater => Some(Direction::Forward),
            std::cmp::Ordering::Less => Some(Direction::Backward),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl TryFrom<u32> for Progress {
    type Error = ProgressError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

impl fmt::Debug for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Progress({})", self.0)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Which way a change moved the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}
