use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use progress_core::time::fixed_clock;
use progress_core::{Progress, Step};

use crate::context::{AppContext, UiConfig};
use crate::views::ProgressView;

#[derive(Props, Clone)]
struct ProgressHarnessProps {
    context: AppContext,
}

impl PartialEq for ProgressHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ProgressHarness(props: ProgressHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    rsx! { ProgressView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub context: AppContext,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Run `action` the way an event handler would, then flush re-renders.
    pub fn act(&mut self, action: impl FnOnce(&AppContext)) {
        let context = self.context.clone();
        self.dom.in_runtime(|| action(&context));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(title: &str, initial: u32, step: u32) -> ViewHarness {
    let config = UiConfig::new(title)
        .with_initial(Progress::new(initial).expect("initial progress in range"))
        .with_step(Step::new(step));
    let context = AppContext::new(&config, fixed_clock());

    let dom = VirtualDom::new_with_props(
        ProgressHarness,
        ProgressHarnessProps {
            context: context.clone(),
        },
    );

    ViewHarness { dom, context }
}
