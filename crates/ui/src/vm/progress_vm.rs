use chrono::{DateTime, Utc};
use progress_core::Progress;

use crate::vm::time_fmt::format_time;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressStateTag {
    Empty,
    Partial,
    Complete,
}

impl ProgressStateTag {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Partial => "partial",
            Self::Complete => "complete",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub value: u8,
    pub label: String,
    pub width_style: String,
    pub state: ProgressStateTag,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub updated_label: String,
}

#[must_use]
pub fn map_progress(progress: Progress, updated_at: Option<DateTime<Utc>>) -> ProgressVm {
    let state = if progress.is_empty() {
        ProgressStateTag::Empty
    } else if progress.is_complete() {
        ProgressStateTag::Complete
    } else {
        ProgressStateTag::Partial
    };

    let updated_label = updated_at.map_or_else(
        || "Not changed yet".to_string(),
        |at| format!("Updated {}", format_time(at)),
    );

    ProgressVm {
        value: progress.value(),
        label: progress.to_string(),
        width_style: format!("width: {}%;", progress.value()),
        state,
        can_advance: !progress.is_complete(),
        can_retreat: !progress.is_empty(),
        updated_label,
    }
}
