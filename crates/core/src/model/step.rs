use std::fmt;

use crate::error::ProgressError;

/// Size of a single `advance`/`retreat` move.
///
/// Steps are unsigned, so a step can never silently reverse the direction of
/// the operation it is passed to. Signed input (CLI, env) goes through
/// `Step::try_from(i64)`, which rejects negatives. Steps larger than the
/// progress range are allowed and simply saturate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Step(u32);

impl Step {
    pub const ONE: Self = Self(1);

    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<u32> for Step {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Step {
    type Error = ProgressError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(ProgressError::NegativeStep { value });
        }
        // Anything past u32::MAX saturates the range the same way u32::MAX does.
        Ok(Self(u32::try_from(value).unwrap_or(u32::MAX)))
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step({})", self.0)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
