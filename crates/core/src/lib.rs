#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod model;
pub mod time;

pub use controller::{ProgressChange, ProgressController, SubscriptionId};
pub use error::ProgressError;
pub use model::{Direction, Progress, Step};
pub use time::Clock;
