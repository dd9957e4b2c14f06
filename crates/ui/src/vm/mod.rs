mod progress_vm;
mod time_fmt;

pub use progress_vm::{ProgressStateTag, ProgressVm, map_progress};
