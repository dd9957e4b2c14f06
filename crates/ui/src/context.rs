use std::cell::RefCell;
use std::rc::Rc;

use progress_core::{Clock, Progress, ProgressChange, ProgressController, Step, SubscriptionId};

/// Launch-time settings for the progress window.
///
/// Handed to the desktop launcher as a root context, so it only carries plain
/// `Send + Sync` values. The controller itself is built per window from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    title: String,
    initial: Progress,
    step: Step,
}

impl UiConfig {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            initial: Progress::ZERO,
            step: Step::ONE,
        }
    }

    #[must_use]
    pub fn with_initial(mut self, initial: Progress) -> Self {
        self.initial = initial;
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn initial(&self) -> Progress {
        self.initial
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new("Progress")
    }
}

/// Per-window handle to the progress controller.
///
/// Views read and mutate progress only through this type. Clones share the
/// same controller.
#[derive(Clone)]
pub struct AppContext {
    title: Rc<str>,
    step: Step,
    controller: Rc<RefCell<ProgressController>>,
}

impl AppContext {
    #[must_use]
    pub fn new(config: &UiConfig, clock: Clock) -> Self {
        let controller = ProgressController::with_initial(config.initial(), clock);
        Self {
            title: Rc::from(config.title()),
            step: config.step(),
            controller: Rc::new(RefCell::new(controller)),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Step applied by the no-argument `advance`/`retreat`.
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.controller.borrow().progress()
    }

    pub fn advance(&self) -> Option<ProgressChange> {
        self.controller.borrow_mut().advance_by(self.step)
    }

    pub fn retreat(&self) -> Option<ProgressChange> {
        self.controller.borrow_mut().retreat_by(self.step)
    }

    /// The listener runs while the controller is borrowed; it must not call
    /// back into this context.
    pub fn subscribe(&self, listener: impl FnMut(&ProgressChange) + 'static) -> SubscriptionId {
        self.controller.borrow_mut().subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.controller.borrow_mut().unsubscribe(id)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.controller.borrow().subscriber_count()
    }
}

/// Build an `AppContext` backed by the system clock.
#[must_use]
pub fn build_app_context(config: &UiConfig) -> AppContext {
    tracing::debug!(
        title = config.title(),
        initial = config.initial().value(),
        step = config.step().value(),
        "building progress context"
    );
    AppContext::new(config, Clock::system())
}
