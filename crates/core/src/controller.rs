//! The owner of the progress value and its only sanctioned mutations.
//!
//! Observers register a listener and are told about every change after it has
//! been applied. There is no global instance: whoever builds the controller
//! owns it and hands out references (see the `ui` crate's `AppContext`).

use std::fmt;

use chrono::{DateTime, Utc};

use crate::model::{Direction, Progress, Step};
use crate::time::Clock;

/// Handle returned by [`ProgressController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Published after a mutation moved the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressChange {
    previous: Progress,
    current: Progress,
    direction: Direction,
    at: DateTime<Utc>,
}

impl ProgressChange {
    #[must_use]
    pub fn previous(&self) -> Progress {
        self.previous
    }

    #[must_use]
    pub fn current(&self) -> Progress {
        self.current
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }
}

type Listener = Box<dyn FnMut(&ProgressChange)>;

pub struct ProgressController {
    progress: Progress,
    clock: Clock,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ProgressController {
    /// Creates a controller starting at `Progress::ZERO`.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self::with_initial(Progress::ZERO, clock)
    }

    #[must_use]
    pub fn with_initial(initial: Progress, clock: Clock) -> Self {
        Self {
            progress: initial,
            clock,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Moves forward by one.
    pub fn advance(&mut self) -> Option<ProgressChange> {
        self.advance_by(Step::ONE)
    }

    /// Sets `progress = min(progress + step, 100)`.
    ///
    /// Returns the published change, or `None` when the value did not move
    /// (zero step, or already at `Progress::FULL`).
    pub fn advance_by(&mut self, step: Step) -> Option<ProgressChange> {
        let next = self.progress.saturating_add(step);
        self.apply(next, step)
    }

    /// Moves backward by one.
    pub fn retreat(&mut self) -> Option<ProgressChange> {
        self.retreat_by(Step::ONE)
    }

    /// Sets `progress = max(progress - step, 0)`.
    ///
    /// Returns the published change, or `None` when the value did not move
    /// (zero step, or already at `Progress::ZERO`).
    pub fn retreat_by(&mut self, step: Step) -> Option<ProgressChange> {
        let next = self.progress.saturating_sub(step);
        self.apply(next, step)
    }

    /// Registers a listener called after every change, in subscription order.
    ///
    /// Listeners receive the change by value and must not call back into the
    /// controller.
    pub fn subscribe(&mut self, listener: impl FnMut(&ProgressChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::debug!(subscription = id.0, "progress listener subscribed");
        id
    }

    /// Removes a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::debug!(subscription = id.0, "progress listener unsubscribed");
        }
        removed
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn apply(&mut self, next: Progress, step: Step) -> Option<ProgressChange> {
        let Some(direction) = self.progress.direction_to(next) else {
            tracing::trace!(progress = self.progress.value(), step = step.value(), "progress unchanged");
            return None;
        };

        let change = ProgressChange {
            previous: self.progress,
            current: next,
            direction,
            at: self.clock.now(),
        };
        self.progress = next;

        tracing::debug!(
            previous = change.previous.value(),
            current = change.current.value(),
            step = step.value(),
            ?direction,
            "progress changed"
        );

        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
        Some(change)
    }
}

impl Default for ProgressController {
    fn default() -> Self {
        Self::new(Clock::default())
    }
}

impl fmt::Debug for ProgressController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressController")
            .field("progress", &self.progress)
            .field("clock", &self.clock)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
