mod progress;

pub use progress::{PROGRESS_ANCHOR_ID, ProgressView};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
