use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use progress_core::{Progress, ProgressChange};

use crate::context::AppContext;
use crate::vm::map_progress;

/// Stable id of the element the progress view is attached to.
pub const PROGRESS_ANCHOR_ID: &str = "progress-root";

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();

    let progress = use_signal(|| ctx.progress());
    let updated_at = use_signal(|| None::<DateTime<Utc>>);

    // Mirror controller changes into signals; the signals drive re-rendering.
    let subscription = use_hook(|| {
        let mut progress = progress;
        let mut updated_at = updated_at;
        ctx.subscribe(move |change: &ProgressChange| {
            progress.set(change.current());
            updated_at.set(Some(change.at()));
        })
    });
    use_drop({
        let ctx = ctx.clone();
        move || {
            ctx.unsubscribe(subscription);
        }
    });

    let on_advance = {
        let ctx = ctx.clone();
        move |_: MouseEvent| {
            ctx.advance();
        }
    };
    let on_retreat = {
        let ctx = ctx.clone();
        move |_: MouseEvent| {
            ctx.retreat();
        }
    };

    let vm = map_progress(progress(), updated_at());
    let title = ctx.title().to_string();
    let (min, max) = (Progress::MIN, Progress::MAX);

    rsx! {
        section {
            id: PROGRESS_ANCHOR_ID,
            class: "progress-panel",
            "data-state": vm.state.as_str(),

            h2 { "{title}" }

            div {
                class: "progress-track",
                role: "progressbar",
                "aria-valuemin": "{min}",
                "aria-valuemax": "{max}",
                "aria-valuenow": "{vm.value}",
                div { class: "progress-fill", style: "{vm.width_style}" }
            }

            p { class: "progress-label", "{vm.label}" }
            p { class: "progress-updated", "{vm.updated_label}" }

            div { class: "progress-actions",
                button {
                    class: "btn",
                    title: "Retreat",
                    disabled: !vm.can_retreat,
                    onclick: on_retreat,
                    "−"
                }
                button {
                    class: "btn btn-primary",
                    title: "Advance",
                    disabled: !vm.can_advance,
                    onclick: on_advance,
                    "+"
                }
            }
        }
    }
}
