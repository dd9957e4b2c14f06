use thiserror::Error;

use crate::model::Progress;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("progress must be between {min} and {max}, got {value}", min = Progress::MIN, max = Progress::MAX)]
    OutOfRange { value: u32 },

    #[error("step must not be negative, got {value}")]
    NegativeStep { value: i64 },
}
