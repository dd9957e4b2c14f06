mod progress;
mod step;

pub use progress::{Direction, Progress};
pub use step::Step;
